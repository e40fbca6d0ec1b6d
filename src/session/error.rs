//! Session storage error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when persisting session state
#[derive(Error, Debug)]
pub enum SessionError {
    /// Backing file could not be written
    #[error("Failed to write session file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User record or storage map could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
