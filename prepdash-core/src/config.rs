//! Configuration loading
//!
//! Config lives at `~/.config/prepdash/config.toml` (XDG on Linux, the
//! equivalent platform directories elsewhere). Everything has a default so a
//! missing file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tracker identity and horizon settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Owner identifier the document is stored under. Overridable with the
    /// `PREPDASH_OWNER` environment variable.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Optional fixed start date (`YYYY-MM-DD`). When unset, the document's
    /// own start date (set at initialization) is used.
    #[serde(default)]
    pub start_date: Option<chrono::NaiveDate>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            start_date: None,
        }
    }
}

fn default_owner() -> String {
    "default".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Days of rotated log files to keep
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_files() -> usize {
    7
}

impl Config {
    /// Load config from the default path, falling back to defaults when the
    /// file does not exist. The `PREPDASH_OWNER` override applies either way.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(owner) = std::env::var("PREPDASH_OWNER") {
            if !owner.is_empty() {
                self.tracker.owner = owner;
            }
        }
    }

    /// `~/.config/prepdash/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
        Ok(dir.join("prepdash").join("config.toml"))
    }

    /// `~/.local/share/prepdash` (created if missing)
    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("could not determine data directory".to_string()))?
            .join("prepdash");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// `~/.local/state/prepdash` (created if missing)
    pub fn state_dir() -> Result<PathBuf> {
        let dir = dirs::state_dir()
            .or_else(dirs::data_dir)
            .ok_or_else(|| Error::Config("could not determine state directory".to_string()))?
            .join("prepdash");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Path to the SQLite document store.
    pub fn database_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("prepdash.db"))
    }

    /// Directory rotated log files are written into.
    pub fn log_dir() -> Result<PathBuf> {
        let dir = Self::state_dir()?.join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
