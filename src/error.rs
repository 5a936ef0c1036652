//! Error taxonomy for the reconciliation engine.
//!
//! The engine never retries and never swallows failures; every variant
//! here surfaces to the CLI layer, which wraps it in `anyhow` for reporting.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = SyncError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Record store unreachable or a constraint was violated.
    #[error("Record store error: {0}")]
    Store(String),

    /// The locale loader failed for a group.
    #[error("Failed to load '{group}' for locale '{locale}': {message}")]
    Loader {
        locale: String,
        group: String,
        message: String,
    },

    #[error("File system error at {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Only reachable if the call-site grammar itself is malformed.
    #[error("Invalid scan pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to serialize translations: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A locale or group name that does not map to a file under the language root.
    #[error("Invalid {kind} name '{name}'")]
    InvalidName { kind: &'static str, name: String },

    /// Operation switched off in the configuration.
    #[error("'{0}' is disabled in the configuration")]
    Disabled(&'static str),
}

impl SyncError {
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

impl From<rusqlite::Error> for SyncError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(err.to_string())
    }
}
