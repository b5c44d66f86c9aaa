//! Configuration management for todo-store.
//!
//! Settings live in `config.yaml` inside the data directory
//! (`~/.todo-store/config.yaml` by default). Every field is optional; a
//! missing file means defaults.

use crate::error::{Error, Result};
use crate::paths;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the database and log file.
    /// None means `~/.todo-store/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Log level for the file logger (`error`, `warn`, `info`, `debug`,
    /// `trace` or `off`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether to write log records to `todo-store.log` in the data directory.
    #[serde(default)]
    pub file_logging: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_dir: None, log_level: default_log_level(), file_logging: false }
    }
}

impl StoreConfig {
    /// Load config from the default data directory, falling back to defaults
    /// if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let Some(dir) = paths::data_dir() else {
            return Ok(Self::default());
        };
        Ok(Self::load_from(&dir)?.unwrap_or_default())
    }

    /// Load config from a specific data directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(data_dir: &Path) -> Result<Option<Self>> {
        let config_path = paths::config_path(data_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, data_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(data_dir)?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(paths::config_path(data_dir), content)?;
        Ok(())
    }

    /// The data directory this config points at.
    ///
    /// Returns `None` if no directory is configured and the home directory
    /// cannot be determined.
    #[must_use]
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(paths::data_dir)
    }

    /// Parse the configured log level.
    ///
    /// # Errors
    ///
    /// Returns an error if the level name is not recognised.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| Error::Validation(format!("unknown log level: {}", self.log_level)))
    }
}
