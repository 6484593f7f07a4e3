//! POS configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TILLPOINT_DATA_DIR` - Directory holding the persisted datasets
//!   (default: `tillpoint_data`)

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming the data directory.
const DATA_DIR_VAR: &str = "TILLPOINT_DATA_DIR";

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = "tillpoint_data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// POS engine configuration.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Directory holding every persisted dataset.
    pub data_dir: PathBuf,
}

impl PosConfig {
    /// Create a configuration rooted at an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `TILLPOINT_DATA_DIR` is set
    /// but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(DATA_DIR_VAR) {
            Ok(dir) if dir.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
                DATA_DIR_VAR.to_owned(),
                "must not be empty".to_owned(),
            )),
            Ok(dir) => Ok(Self::new(dir)),
            Err(_) => Ok(Self::new(DEFAULT_DATA_DIR)),
        }
    }

    /// Path of the product catalog table.
    #[must_use]
    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir.join("inventory.csv")
    }

    /// Path of the append-only sales ledger table.
    #[must_use]
    pub fn sales_file(&self) -> PathBuf {
        self.data_dir.join("sales_records.csv")
    }

    /// Path of the customer table.
    #[must_use]
    pub fn customers_file(&self) -> PathBuf {
        self.data_dir.join("customers.csv")
    }

    /// Path of the shopping lists document.
    #[must_use]
    pub fn shopping_lists_file(&self) -> PathBuf {
        self.data_dir.join("shopping_lists.json")
    }

    /// Path of the ID counter sidecar.
    #[must_use]
    pub fn counters_file(&self) -> PathBuf {
        self.data_dir.join("counters.json")
    }

    /// The configured data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
