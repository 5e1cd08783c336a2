//! Style backend: renders tokens into stylesheet text.
//!
//! Global rendering works in two steps. Color and typography tokens are first
//! folded into a [`StyleSheet`]: a flat map of custom-property names to values,
//! plus utility rules that refer back to those properties. The sheet is then
//! printed in the selected syntax:
//!
//! - **CSS**: a `:root` block of custom properties, then one rule per utility.
//! - **SCSS**: `$` variables, the two helper mixins, then utilities nested under
//!   their shared prefix (`.text { &-primary { ... } }`).
//! - **Tailwind**: colors, font sizes and line heights folded into
//!   `theme.extend` of a `module.exports` configuration object.
//!
//! Colors are printed as `rgba(channel*255, ..., alpha)` without rounding.

mod component;

pub use component::component_declarations;

use indexmap::IndexMap;
use serde::Serialize;
use tokenforge_core::naming::{kebab_case, number, pascal_case};
use tokenforge_core::{ComponentValue, Token, TokenValue};
use tracing::debug;

use crate::error::Result;
use crate::generators::{FileKind, GeneratedFile};
use crate::options::{CodeGenerationOptions, StyleFormat};

const COLOR_PREFIX: &str = "color-";
const FONT_SIZE_PREFIX: &str = "font-size-";
const LINE_HEIGHT_PREFIX: &str = "line-height-";

const MIXINS: &str = "@mixin flex-layout($direction: row) {
  display: flex;
  flex-direction: $direction;
}

@mixin typography($size, $weight, $height) {
  font-size: $size;
  font-weight: $weight;
  line-height: $height;
}";

/// Value of a utility declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRef {
    /// A custom property, by name without the leading `--` or `$`.
    Var(String),
    Literal(String),
}

impl ValueRef {
    fn to_css(&self) -> String {
        match self {
            Self::Var(name) => format!("var(--{})", name),
            Self::Literal(value) => value.clone(),
        }
    }

    fn to_scss(&self) -> String {
        match self {
            Self::Var(name) => format!("${}", name),
            Self::Literal(value) => value.clone(),
        }
    }
}

/// One utility class rule, `.{prefix}-{name}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Utility {
    pub prefix: &'static str,
    pub name: String,
    pub declarations: Vec<(&'static str, ValueRef)>,
}

impl Utility {
    pub fn selector(&self) -> String {
        format!(".{}-{}", self.prefix, self.name)
    }
}

/// Custom properties and utility rules derived from style tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    /// Property name (without `--`) to value.
    pub variables: IndexMap<String, String>,
    /// Selector to rule. A later token with the same slug replaces the rule in place.
    pub utilities: IndexMap<String, Utility>,
}

impl StyleSheet {
    /// Fold color and typography tokens. Other kinds contribute nothing.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut sheet = Self::default();

        for token in tokens {
            let slug = token.slug();
            match &token.value {
                TokenValue::Color(color) => {
                    let var = format!("{}{}", COLOR_PREFIX, slug);
                    sheet
                        .variables
                        .insert(var.clone(), color.color.to_css_exact());
                    sheet.add_utility("text", &slug, vec![("color", ValueRef::Var(var.clone()))]);
                    sheet.add_utility("bg", &slug, vec![("background-color", ValueRef::Var(var))]);
                }
                TokenValue::Typography(typography) => {
                    let size = format!("{}{}", FONT_SIZE_PREFIX, slug);
                    let height = format!("{}{}", LINE_HEIGHT_PREFIX, slug);
                    sheet
                        .variables
                        .insert(size.clone(), format!("{}px", number(typography.font_size)));
                    sheet
                        .variables
                        .insert(height.clone(), typography.line_height.to_css());
                    sheet.add_utility(
                        "font",
                        &slug,
                        vec![
                            ("font-size", ValueRef::Var(size)),
                            ("line-height", ValueRef::Var(height)),
                            (
                                "font-weight",
                                ValueRef::Literal(number(typography.font_weight)),
                            ),
                        ],
                    );
                }
                _ => {}
            }
        }

        sheet
    }

    fn add_utility(
        &mut self,
        prefix: &'static str,
        slug: &str,
        declarations: Vec<(&'static str, ValueRef)>,
    ) {
        let utility = Utility {
            prefix,
            name: slug.to_string(),
            declarations,
        };
        self.utilities.insert(utility.selector(), utility);
    }

    pub fn to_css(&self) -> String {
        let mut lines = vec![":root {".to_string()];
        for (name, value) in &self.variables {
            lines.push(format!("  --{}: {};", name, value));
        }
        lines.push("}".to_string());

        for utility in self.utilities.values() {
            lines.push(String::new());
            lines.push(format!("{} {{", utility.selector()));
            for (property, value) in &utility.declarations {
                lines.push(format!("  {}: {};", property, value.to_css()));
            }
            lines.push("}".to_string());
        }

        finish(lines)
    }

    pub fn to_scss(&self) -> String {
        let mut lines = vec!["// Variables".to_string()];
        for (name, value) in &self.variables {
            lines.push(format!("${}: {};", name, value));
        }

        lines.push(String::new());
        lines.push("// Mixins".to_string());
        lines.extend(MIXINS.lines().map(str::to_string));

        lines.push(String::new());
        lines.push("// Utility Classes".to_string());

        let mut groups: IndexMap<&str, Vec<&Utility>> = IndexMap::new();
        for utility in self.utilities.values() {
            groups.entry(utility.prefix).or_default().push(utility);
        }

        for (index, (prefix, utilities)) in groups.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.push(format!(".{} {{", prefix));
            for utility in utilities {
                lines.push(format!("  &-{} {{", utility.name));
                for (property, value) in &utility.declarations {
                    lines.push(format!("    {}: {};", property, value.to_scss()));
                }
                lines.push("  }".to_string());
            }
            lines.push("}".to_string());
        }

        finish(lines)
    }

    pub fn to_tailwind_config(&self) -> Result<String> {
        let extract = |prefix: &str| -> IndexMap<String, String> {
            self.variables
                .iter()
                .filter_map(|(name, value)| {
                    name.strip_prefix(prefix)
                        .map(|key| (key.to_string(), value.clone()))
                })
                .collect()
        };

        let config = TailwindConfig {
            theme: TailwindTheme {
                extend: TailwindExtend {
                    colors: extract(COLOR_PREFIX),
                    font_size: extract(FONT_SIZE_PREFIX),
                    line_height: extract(LINE_HEIGHT_PREFIX),
                },
            },
        };

        Ok(format!(
            "module.exports = {};\n",
            serde_json::to_string_pretty(&config)?
        ))
    }
}

#[derive(Serialize)]
struct TailwindConfig {
    theme: TailwindTheme,
}

#[derive(Serialize)]
struct TailwindTheme {
    extend: TailwindExtend,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TailwindExtend {
    colors: IndexMap<String, String>,
    font_size: IndexMap<String, String>,
    line_height: IndexMap<String, String>,
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Renders global and per-component stylesheets in one syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBackend {
    format: StyleFormat,
}

impl StyleBackend {
    pub fn new(options: &CodeGenerationOptions) -> Self {
        Self {
            format: options.style_format,
        }
    }

    pub fn format(&self) -> StyleFormat {
        self.format
    }

    /// Stylesheet text for the style-bearing tokens in `tokens`.
    pub fn render_global_styles(&self, tokens: &[Token]) -> Result<String> {
        let sheet = StyleSheet::from_tokens(tokens);
        debug!(
            format = %self.format,
            variables = sheet.variables.len(),
            utilities = sheet.utilities.len(),
            "rendering global styles"
        );

        match self.format {
            StyleFormat::Css => Ok(sheet.to_css()),
            StyleFormat::Scss => Ok(sheet.to_scss()),
            StyleFormat::Tailwind => sheet.to_tailwind_config(),
        }
    }

    /// Stylesheet text for one component.
    pub fn render_component_styles(&self, component: &ComponentValue) -> String {
        let class = kebab_case(&component.name);
        let declarations = component_declarations(component);

        match self.format {
            StyleFormat::Css | StyleFormat::Scss => component::to_rule(&class, &declarations),
            StyleFormat::Tailwind => component::to_apply_rule(&class, &declarations),
        }
    }

    /// The global stylesheet as a file.
    pub fn global_file(&self, tokens: &[Token]) -> Result<GeneratedFile> {
        let content = self.render_global_styles(tokens)?;
        let file = match self.format {
            StyleFormat::Css => {
                GeneratedFile::new("global.css", content, FileKind::Style, ["styles"])
            }
            StyleFormat::Scss => {
                GeneratedFile::new("global.scss", content, FileKind::Style, ["styles"])
            }
            StyleFormat::Tailwind => GeneratedFile::new(
                "tailwind.config.js",
                content,
                FileKind::Style,
                Vec::<String>::new(),
            ),
        };
        Ok(file)
    }

    /// A component's stylesheet as a file.
    pub fn component_file(&self, component: &ComponentValue) -> GeneratedFile {
        GeneratedFile::new(
            format!("{}.{}", pascal_case(&component.name), self.format.extension()),
            self.render_component_styles(component),
            FileKind::Style,
            ["styles", "components"],
        )
    }
}
