//! Token set export.
//!
//! Serializes a [`TokenSet`] into a single downloadable text file.
//!
//! Supported formats:
//! - CSS (custom properties under `:root`)
//! - SCSS (variables, typography as maps)
//! - JSON (structural serialization)
//! - TypeScript (`as const` object literal and a `DesignTokens` type)

pub mod css;
pub mod error;
mod format;
pub mod scss;
pub mod typescript;

use serde::{Deserialize, Serialize};
use tokenforge_core::TokenSet;
use tracing::debug;

pub use error::{ExportError, Result};
pub use format::ExportFormat;

/// Export a token set in the given format.
pub fn export(tokens: &TokenSet, format: ExportFormat) -> Result<String> {
    let content = match format {
        ExportFormat::Css => css::export(tokens),
        ExportFormat::Scss => scss::export(tokens),
        ExportFormat::Json => export_json(tokens)?,
        ExportFormat::TypeScript => typescript::export(tokens),
    };
    debug!(format = %format, entries = tokens.len(), "exported token set");
    Ok(content)
}

/// Export a token set as pretty-printed JSON.
pub fn export_json(tokens: &TokenSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// External export request: `{tokenSet, format}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(alias = "tokens")]
    pub token_set: TokenSet,
    pub format: ExportFormat,
}

/// An exported file ready for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: String,
    pub content: String,
}

impl ExportRequest {
    pub fn handle(&self) -> Result<ExportedFile> {
        Ok(ExportedFile {
            file_name: self.format.file_name(),
            content_type: self.format.content_type().to_string(),
            content: export(&self.token_set, self.format)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tokenforge_core::TypographyEntry;

    pub(crate) fn sample() -> TokenSet {
        let mut tokens = TokenSet::new();
        tokens
            .colors
            .insert("primary-blue".into(), "rgba(0, 102, 255, 1)".into());
        tokens.typography.insert(
            "heading".into(),
            TypographyEntry {
                font_family: "Inter".into(),
                font_size: "24px".into(),
                font_weight: 700,
                line_height: 1.5,
                letter_spacing: "0px".into(),
            },
        );
        tokens.spacing.insert("stack".into(), "8px".into());
        tokens
            .shadows
            .insert("card".into(), "0px 2px 4px 0px rgba(0, 0, 0, 0.25)".into());
        tokens
    }

    #[test]
    fn test_json_round_trips() {
        let json = export(&sample(), ExportFormat::Json).unwrap();
        assert!(json.starts_with("{\n  \"colors\": {\n    \"primary-blue\""));
        assert!(json.contains("\"fontFamily\": \"Inter\""));

        let parsed: TokenSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_typescript_has_two_buckets() {
        let mut tokens = TokenSet::new();
        tokens
            .colors
            .insert("brand-red".into(), "rgba(255, 0, 0, 1)".into());
        tokens
            .typography
            .insert("body-text".into(), sample().typography["heading"].clone());

        let ts = export(&tokens, ExportFormat::TypeScript).unwrap();
        let top_level: Vec<&str> = ts
            .lines()
            .filter(|line| line.starts_with("  ") && !line.starts_with("   ") && line.ends_with('{'))
            .collect();
        assert_eq!(top_level, ["  colors: {", "  typography: {"]);
        assert!(ts.contains("    brandRed: 'rgba(255, 0, 0, 1)',"));
        assert!(ts.contains("    bodyText: {"));
        assert_eq!(ts.matches("as const").count(), 1);
    }

    #[test]
    fn test_handle_request() {
        let request: ExportRequest = serde_json::from_value(serde_json::json!({
            "tokens": { "colors": { "primary": "rgba(1, 2, 3, 1)" } },
            "format": "scss"
        }))
        .unwrap();

        let file = request.handle().unwrap();
        assert_eq!(file.file_name, "design-tokens.scss");
        assert_eq!(file.content_type, "text/x-scss");
        assert!(file.content.contains("$color-primary: rgba(1, 2, 3, 1);\n"));
    }

    #[test]
    fn test_unknown_request_format() {
        let result = serde_json::from_value::<ExportRequest>(serde_json::json!({
            "tokenSet": {},
            "format": "yaml"
        }));
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn test_css_has_one_declaration_per_entry(
            colors in prop::collection::vec("[a-z]{1,8}", 0..6),
            spacing in prop::collection::vec("[a-z]{1,8}", 0..6),
        ) {
            let mut tokens = TokenSet::new();
            for name in &colors {
                tokens.colors.insert(name.clone(), "rgba(0, 0, 0, 1)".into());
            }
            for name in &spacing {
                tokens.spacing.insert(name.clone(), "4px".into());
            }

            let css = export(&tokens, ExportFormat::Css).unwrap();
            let declarations = css.lines().filter(|line| line.starts_with("  --")).count();
            prop_assert_eq!(declarations, tokens.colors.len() + tokens.spacing.len());
            prop_assert_eq!(export(&tokens, ExportFormat::Css).unwrap(), css);
        }
    }
}
