//! Notification error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("No notification at position {index} ({count} in the feed)")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
