//! Error types for extraction.

use thiserror::Error;
use tokenforge_core::CoreError;

/// Result type alias for extraction.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that abort an extraction walk.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document failed validation at the ingestion boundary.
    #[error(transparent)]
    Document(#[from] CoreError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
