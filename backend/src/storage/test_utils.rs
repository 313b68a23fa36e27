//! Test utilities providing a throwaway data directory and ready-made
//! controllers on top of it.
//!
//! The temp directory is removed when the environment is dropped, even if a
//! test panics.

use anyhow::Result;
use shared::TripRecord;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use super::file::FileConnection;
use super::traits::TripStorage;
use super::trip_repository::TripRepository;
use crate::domain::clock::FixedClock;
use crate::domain::controller::TripController;

/// Temporary data directory with a trip repository on top of it
pub struct TestEnvironment {
    pub connection: Arc<FileConnection>,
    pub repository: Arc<TripRepository>,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Date stamped on expenses created through `controller()`
    pub const TODAY: &'static str = "6/1/2025";

    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = Arc::new(FileConnection::new(temp_dir.path())?);
        let repository = Arc::new(TripRepository::with_default_key(connection.clone()));

        Ok(Self {
            connection,
            repository,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// A controller loaded from this environment's storage
    pub fn controller(&self) -> TripController {
        TripController::new(
            self.repository.clone(),
            Arc::new(FixedClock(Self::TODAY.to_string())),
        )
    }

    /// Read the snapshot back as a fresh process would
    pub fn reload(&self) -> TripRecord {
        self.repository.load()
    }
}

/// Storage whose writes always fail
pub struct FailingStorage;

impl TripStorage for FailingStorage {
    fn load(&self) -> TripRecord {
        TripRecord::default()
    }

    fn save(&self, _record: &TripRecord) -> Result<()> {
        Err(anyhow::anyhow!("disk full"))
    }

    fn reset(&self) -> Result<bool> {
        Err(anyhow::anyhow!("disk full"))
    }
}

/// Storage that keeps nothing and counts how often it was asked to save
#[derive(Debug, Default)]
pub struct CountingStorage {
    saves: AtomicUsize,
}

impl CountingStorage {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl TripStorage for CountingStorage {
    fn load(&self) -> TripRecord {
        TripRecord::default()
    }

    fn save(&self, _record: &TripRecord) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn reset(&self) -> Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_controller_sees_previous_session() -> Result<()> {
        let env = TestEnvironment::new()?;
        env.controller().add_day()?;

        let controller = env.controller();
        assert_eq!(controller.record().days.len(), 1);
        Ok(())
    }
}
