//! Code generation options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodegenError;

/// Target UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Vue,
    Angular,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Self::React, Self::Vue, Self::Angular];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "angular" => Ok(Self::Angular),
            _ => Err(CodegenError::UnsupportedFramework(s.to_string())),
        }
    }
}

/// Stylesheet syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
}

impl StyleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
        }
    }

    /// Extension of per-component stylesheets. Tailwind components are plain
    /// CSS with `@apply` rules.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Css | Self::Tailwind => "css",
        }
    }
}

impl fmt::Display for StyleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleFormat {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "tailwind" => Ok(Self::Tailwind),
            _ => Err(CodegenError::UnsupportedStyleFormat(s.to_string())),
        }
    }
}

/// Options for a code generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeGenerationOptions {
    pub framework: Framework,
    #[serde(alias = "style_format")]
    pub style_format: StyleFormat,
    /// Emit typed output (`.tsx`, `lang="ts"`, props interfaces).
    #[serde(alias = "typescriptOutput")]
    pub typescript: bool,
    /// Run the whitespace post-pass on every emitted file.
    #[serde(alias = "prettier")]
    pub format_output: bool,
}

impl Default for CodeGenerationOptions {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            style_format: StyleFormat::Css,
            typescript: true,
            format_output: true,
        }
    }
}

impl CodeGenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    pub fn with_style_format(mut self, style_format: StyleFormat) -> Self {
        self.style_format = style_format;
        self
    }

    pub fn with_typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    pub fn with_format_output(mut self, format_output: bool) -> Self {
        self.format_output = format_output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_framework() {
        assert_eq!("Vue".parse::<Framework>().unwrap(), Framework::Vue);
        assert!(matches!(
            "svelte".parse::<Framework>(),
            Err(CodegenError::UnsupportedFramework(_))
        ));
    }

    #[test]
    fn test_parse_style_format() {
        assert_eq!("scss".parse::<StyleFormat>().unwrap(), StyleFormat::Scss);
        assert!("less".parse::<StyleFormat>().is_err());
        assert_eq!(StyleFormat::Tailwind.extension(), "css");
    }

    #[test]
    fn test_options_wire_names() {
        let options: CodeGenerationOptions = serde_json::from_value(json!({
            "framework": "angular",
            "styleFormat": "scss",
            "typescriptOutput": false,
            "prettier": false
        }))
        .unwrap();

        assert_eq!(
            options,
            CodeGenerationOptions::new()
                .with_framework(Framework::Angular)
                .with_style_format(StyleFormat::Scss)
                .with_typescript(false)
                .with_format_output(false)
        );
    }

    #[test]
    fn test_options_defaults() {
        let options: CodeGenerationOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options.framework, Framework::React);
        assert_eq!(options.style_format, StyleFormat::Css);
        assert!(options.typescript);
        assert!(options.format_output);
    }
}
