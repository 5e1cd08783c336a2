//! Error types for tokenforge-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised at the document ingestion boundary and by value parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node record lacks a required field or has the wrong shape.
    #[error("Malformed node at {path}: {reason}")]
    MalformedNode { path: String, reason: String },

    /// A string could not be parsed into a closed enum.
    #[error("Unsupported {kind}: {value}")]
    UnsupportedValue { kind: &'static str, value: String },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a malformed-node error for the given ancestor path.
    pub fn malformed(path: &[String], reason: impl Into<String>) -> Self {
        let path = if path.is_empty() {
            "<root>".to_string()
        } else {
            path.join(" / ")
        };
        Self::MalformedNode {
            path,
            reason: reason.into(),
        }
    }
}
