//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported session schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Saved state has no entry for key: {0}")]
    MissingEntry(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
