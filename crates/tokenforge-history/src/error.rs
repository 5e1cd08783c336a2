//! Error types for token history.

use thiserror::Error;

/// Errors that can occur while reading or writing history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Version not found: {id}")]
    VersionNotFound { id: String },

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;
