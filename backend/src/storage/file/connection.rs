use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::traits::KeyValueStorage;

const VALUE_EXTENSION: &str = "json";

/// FileConnection stores each key as its own `<key>.json` file under a base
/// directory. Writes go to a temp file first and are renamed into place, so a
/// reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileConnection {
    base_directory: PathBuf,
}

impl FileConnection {
    /// Create a new file connection, creating the base directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path holding the value for `key`
    pub fn value_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self
            .base_directory
            .join(format!("{}.{}", key, VALUE_EXTENSION)))
    }

    /// Keys become file names, so only a conservative character set is allowed
    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(anyhow::anyhow!(
                "Invalid storage key '{}': use letters, digits, '_', '-' or '.'",
                key
            ));
        }
        Ok(())
    }
}

impl KeyValueStorage for FileConnection {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;

        if !path.exists() {
            debug!("No stored value for key '{}'", key);
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        debug!("Read {} bytes for key '{}' from {:?}", value.len(), key, path);
        Ok(Some(value))
    }

    fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
            info!("Created data directory: {}", self.base_directory.display());
        }

        // Atomic write: temp file then rename over the old value
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote {} bytes for key '{}' to {:?}", value.len(), key, path);
        Ok(())
    }

    fn delete_value(&self, key: &str) -> Result<bool> {
        let path = self.value_path(key)?;

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        info!("Deleted stored value for key '{}'", key);
        Ok(true)
    }
}
