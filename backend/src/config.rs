//! # Application Configuration
//!
//! Resolution order for the data directory:
//!
//! 1. `--data-dir` on the command line
//! 2. the `TRIPWISE_DATA_DIR` environment variable
//! 3. the platform data directory (`~/.local/share/TripWise` on Linux),
//!    falling back to `~/TripWise`
//!
//! Inside the data directory an optional `config.yaml` overrides the other
//! settings:
//!
//! ```yaml
//! storage_key: "tripWiseData"
//! currency_symbol: "₹"
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::DEFAULT_STORAGE_KEY;

pub const DATA_DIR_ENV: &str = "TRIPWISE_DATA_DIR";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
const APP_DIR_NAME: &str = "TripWise";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the snapshot and config file live; never read from the file itself
    #[serde(skip)]
    pub data_directory: PathBuf,
    /// Key the trip snapshot is stored under
    pub storage_key: String,
    /// Prefix used when rendering amounts
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config for a data directory. A missing `config.yaml` means
    /// defaults; an unreadable or invalid one is an error.
    pub fn load<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let data_directory = data_directory.as_ref().to_path_buf();
        let config_path = data_directory.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            info!("Loaded config from {}", config_path.display());
            config
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            AppConfig::default()
        };

        config.data_directory = data_directory;
        Ok(config)
    }

    /// Resolve the data directory from the flag, then the environment, then
    /// the platform default
    pub fn resolve_data_directory(flag: Option<PathBuf>, env_value: Option<String>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path);
        }
        if let Some(value) = env_value.filter(|value| !value.trim().is_empty()) {
            return Ok(PathBuf::from(value.trim()));
        }
        Self::default_data_directory()
    }

    pub fn default_data_directory() -> Result<PathBuf> {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .map(|base| base.join(APP_DIR_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory; pass --data-dir"))
    }
}
