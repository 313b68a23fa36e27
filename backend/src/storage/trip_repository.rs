//! # Trip Repository
//!
//! Persists the whole `TripRecord` as one JSON snapshot under a single key.
//! Each save overwrites the previous snapshot entirely; there are no partial
//! writes and no schema version.
//!
//! Loading fails soft: a missing key, an unreadable store or a snapshot that no
//! longer parses all produce the empty default record. Those cases are logged
//! but never surfaced as errors.

use anyhow::Result;
use log::{debug, info, warn};
use shared::TripRecord;
use std::sync::Arc;

use crate::storage::traits::{KeyValueStorage, TripStorage};

/// Key the browser build used for its localStorage slot
pub const DEFAULT_STORAGE_KEY: &str = "tripWiseData";

#[derive(Clone)]
pub struct TripRepository {
    connection: Arc<dyn KeyValueStorage>,
    key: String,
}

impl TripRepository {
    /// Create a repository storing the snapshot under `key`
    pub fn new(connection: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            connection,
            key: key.into(),
        }
    }

    /// Create a repository using the default storage key
    pub fn with_default_key(connection: Arc<dyn KeyValueStorage>) -> Self {
        Self::new(connection, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TripStorage for TripRepository {
    fn load(&self) -> TripRecord {
        let raw = match self.connection.get_value(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved trip under '{}', starting empty", self.key);
                return TripRecord::default();
            }
            Err(e) => {
                warn!("Could not read saved trip '{}': {}. Starting empty.", self.key, e);
                return TripRecord::default();
            }
        };

        match serde_json::from_str::<TripRecord>(&raw) {
            Ok(record) => {
                debug!(
                    "Loaded trip '{}' ({} days, {} expenses, {} packing items)",
                    record.name,
                    record.days.len(),
                    record.budget.expenses.len(),
                    record.packing.len()
                );
                record
            }
            Err(e) => {
                warn!("Saved trip '{}' is corrupt: {}. Starting empty.", self.key, e);
                TripRecord::default()
            }
        }
    }

    fn save(&self, record: &TripRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.connection.put_value(&self.key, &json)?;
        debug!("Saved trip snapshot under '{}' ({} bytes)", self.key, json.len());
        Ok(())
    }

    fn reset(&self) -> Result<bool> {
        let existed = self.connection.delete_value(&self.key)?;
        if existed {
            info!("Deleted saved trip under '{}'", self.key);
        }
        Ok(existed)
    }
}
