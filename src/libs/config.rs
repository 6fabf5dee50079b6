//! Process-wide configuration.
//!
//! Configuration is resolved once at startup: a `.env` file in the working
//! directory is loaded if present, then the `TASKDESK_*` environment variables
//! are read into an explicit [`Config`] that is handed to the store
//! constructor. Nothing below the command layer reads the environment.
//!
//! ## Variables
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `TASKDESK_DB_PATH` | SQLite database file | `<data dir>/taskdesk.db` |
//! | `TASKDESK_DB_BUSY_TIMEOUT_MS` | SQLite busy timeout | `5000` |
//!
//! The data directory is `~/.local/share/taskdesk` on Linux,
//! `~/Library/Application Support/taskdesk` on macOS and
//! `%LOCALAPPDATA%\taskdesk` on Windows.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//! use taskdesk::db::tasks::Tasks;
//!
//! let config = Config::load()?;
//! let tasks = Tasks::new(&config.db)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::data_storage::DataStorage;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DB_FILE_NAME: &str = "taskdesk.db";
pub const ENV_DB_PATH: &str = "TASKDESK_DB_PATH";
pub const ENV_DB_BUSY_TIMEOUT_MS: &str = "TASKDESK_DB_BUSY_TIMEOUT_MS";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: expected a non-negative integer")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Failed to prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),
}

/// Database connection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbConfig {
    /// Path of the SQLite database file. Created on first open.
    pub path: PathBuf,

    /// How long a statement waits on a locked database before failing.
    pub busy_timeout_ms: u64,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub db: DbConfig,
}

impl Config {
    /// Loads `.env` (if any) and builds the configuration from the environment.
    pub fn load() -> Result<Config, ConfigError> {
        // A missing .env file is normal; only the variables matter.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Builds the configuration from the current environment without touching `.env`.
    pub fn from_env() -> Result<Config, ConfigError> {
        let path = match env::var(ENV_DB_PATH) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => DataStorage::new().get_path(DB_FILE_NAME)?,
        };

        let busy_timeout_ms = match env::var(ENV_DB_BUSY_TIMEOUT_MS) {
            Ok(value) => value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                var: ENV_DB_BUSY_TIMEOUT_MS,
                value,
            })?,
            Err(_) => DEFAULT_BUSY_TIMEOUT_MS,
        };

        Ok(Config {
            db: DbConfig { path, busy_timeout_ms },
        })
    }
}
