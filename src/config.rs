//! Store configuration.
//!
//! Connection settings may come from a TOML file:
//!
//! ```toml
//! path = "session.db"
//! journal_mode = "wal"
//! sync_mode = "normal"
//! busy_timeout_ms = 5000
//! ```

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// SQLite journal mode applied when the store is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    Delete,
    Truncate,
    #[default]
    Wal,
    Memory,
}

impl JournalMode {
    pub fn as_pragma(self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Wal => "WAL",
            JournalMode::Memory => "MEMORY",
        }
    }
}

/// SQLite synchronous mode applied when the store is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    Off,
    #[default]
    Normal,
    Full,
}

impl SyncMode {
    pub fn as_pragma(self) -> &'static str {
        match self {
            SyncMode::Off => "OFF",
            SyncMode::Normal => "NORMAL",
            SyncMode::Full => "FULL",
        }
    }
}

/// Configuration for opening a [`TraceStore`](crate::TraceStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Database file. `None` means the caller supplies the path.
    pub path: Option<PathBuf>,
    pub journal_mode: JournalMode,
    pub sync_mode: SyncMode,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout_ms: u64,
    /// Create the database file (and schema) if it does not exist yet.
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            journal_mode: JournalMode::default(),
            sync_mode: SyncMode::default(),
            busy_timeout_ms: 5_000,
            create_if_missing: true,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| StoreError::Config(e.to_string()))
    }
}
