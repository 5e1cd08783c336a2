//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Extraction error: {0}")]
    Extract(#[from] tokenforge_extract::ExtractError),

    #[error("Codegen error: {0}")]
    Codegen(#[from] tokenforge_codegen::CodegenError),

    #[error("Export error: {0}")]
    Export(#[from] tokenforge_export::ExportError),

    #[error("History error: {0}")]
    History(#[from] tokenforge_history::HistoryError),
}

pub type Result<T> = std::result::Result<T, CliError>;
