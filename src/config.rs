//! Configuration loading and management
//!
//! Handles parsing of the optional `.todo.toml` file in the working directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::DEFAULT_FILE;
use crate::timestamp::DEFAULT_DISPLAY_FORMAT;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = ".todo.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the persisted task list, relative to the working directory
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// strftime-style format used for timestamps in `--list`
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Colorize table output when stdout is a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: default_file(),
            timestamp_format: default_timestamp_format(),
            color: true,
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

fn default_timestamp_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|err| Error::InvalidConfig(format!("{}: {}", path.display(), err.message())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.todo.toml` from `dir`, falling back to defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Task file path, resolved against `dir` when relative
    pub fn task_file(&self, dir: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            dir.join(&self.file)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.file.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("file cannot be empty".to_string()));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "timestamp_format cannot be empty".to_string(),
            ));
        }
        // chrono only reports bad specifiers at format time
        let has_bad_item = chrono::format::StrftimeItems::new(&self.timestamp_format)
            .any(|item| matches!(item, chrono::format::Item::Error));
        if has_bad_item {
            return Err(Error::InvalidConfig(format!(
                "invalid timestamp_format: {}",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}
