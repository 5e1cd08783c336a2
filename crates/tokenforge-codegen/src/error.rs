//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// No generator is registered for the requested framework.
    #[error("Unsupported framework: {0}")]
    UnsupportedFramework(String),

    /// Unknown stylesheet syntax.
    #[error("Unsupported style format: {0}")]
    UnsupportedStyleFormat(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
