//! Export format selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Target syntax for a token set export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
    #[serde(rename = "ts", alias = "typescript")]
    TypeScript,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Json,
        ExportFormat::TypeScript,
    ];

    /// File extension, which doubles as the wire name.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
            ExportFormat::TypeScript => "ts",
        }
    }

    /// Download name for an export in this format.
    pub fn file_name(&self) -> String {
        format!("design-tokens.{}", self.extension())
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Css => "text/css",
            ExportFormat::Scss => "text/x-scss",
            ExportFormat::Json => "application/json",
            ExportFormat::TypeScript => "application/typescript",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" => Ok(ExportFormat::Scss),
            "json" => Ok(ExportFormat::Json),
            "ts" | "typescript" => Ok(ExportFormat::TypeScript),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}
