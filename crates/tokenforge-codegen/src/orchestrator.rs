//! Generation orchestrator.

use serde::{Deserialize, Serialize};
use tokenforge_core::naming::pascal_case;
use tokenforge_core::{ComponentValue, Token};
use tracing::{debug, info};

use crate::error::Result;
use crate::generators::{FileKind, FrameworkGenerator, GeneratedFile};
use crate::options::CodeGenerationOptions;
use crate::registry::GeneratorRegistry;
use crate::styles::StyleBackend;

/// External generation request: `{tokens, options}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub options: CodeGenerationOptions,
}

/// External generation response: `{files}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub files: Vec<GeneratedFile>,
}

/// Coordinates one framework generator and one style backend over a token
/// sequence.
///
/// Output order is fixed: the global stylesheet, then each component file
/// immediately followed by its stylesheet (in input order), then either the
/// framework's module file or an index file re-exporting every component.
pub struct CodeGenerator {
    options: CodeGenerationOptions,
    registry: GeneratorRegistry,
    framework: Box<dyn FrameworkGenerator>,
    styles: StyleBackend,
}

impl CodeGenerator {
    /// Create a generator backed by the default registry.
    pub fn new(options: CodeGenerationOptions) -> Result<Self> {
        Self::with_registry(options, GeneratorRegistry::with_defaults())
    }

    pub fn with_registry(options: CodeGenerationOptions, registry: GeneratorRegistry) -> Result<Self> {
        let framework = registry.create(&options)?;
        Ok(Self {
            styles: StyleBackend::new(&options),
            options,
            registry,
            framework,
        })
    }

    pub fn options(&self) -> &CodeGenerationOptions {
        &self.options
    }

    /// Replace the options, rebuilding both backends from scratch.
    ///
    /// On error the previous options and backends are kept.
    pub fn set_options(&mut self, options: CodeGenerationOptions) -> Result<()> {
        let framework = self.registry.create(&options)?;
        self.framework = framework;
        self.styles = StyleBackend::new(&options);
        self.options = options;
        debug!(
            framework = %options.framework,
            style_format = %options.style_format,
            "generator options updated"
        );
        Ok(())
    }

    /// Generate the full file set for a token sequence.
    pub fn generate_from_tokens(&self, tokens: &[Token]) -> Result<Vec<GeneratedFile>> {
        let (style_tokens, components): (Vec<Token>, Vec<Token>) = tokens
            .iter()
            .cloned()
            .partition(|token| token.kind().is_style());
        let components: Vec<&ComponentValue> =
            components.iter().filter_map(Token::as_component).collect();

        let mut files = Vec::with_capacity(components.len() * 2 + 2);
        files.push(self.styles.global_file(&style_tokens)?);

        for component in &components {
            files.push(self.framework.generate_component(component)?);
            files.push(self.styles.component_file(component));
            debug!(component = %component.name, "generated component");
        }

        match self.framework.generate_module(&components)? {
            Some(module) => files.push(module),
            None => files.push(self.index_file(&components)),
        }

        if self.options.format_output {
            for file in &mut files {
                file.content = tidy(&file.content);
            }
        }

        info!(
            framework = %self.options.framework,
            components = components.len(),
            files = files.len(),
            "code generation complete"
        );
        Ok(files)
    }

    /// Serve an external generation request.
    pub fn handle(request: &GenerationRequest) -> Result<GenerationResponse> {
        let generator = Self::new(request.options)?;
        Ok(GenerationResponse {
            files: generator.generate_from_tokens(&request.tokens)?,
        })
    }

    fn index_file(&self, components: &[&ComponentValue]) -> GeneratedFile {
        let extension = if self.options.typescript { "ts" } else { "js" };
        let mut content = components
            .iter()
            .map(|component| {
                let name = pascal_case(&component.name);
                format!("export {{ {} }} from './components/{}';", name, name)
            })
            .collect::<Vec<_>>()
            .join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        GeneratedFile::new(
            format!("index.{}", extension),
            content,
            FileKind::Index,
            Vec::<String>::new(),
        )
    }
}

/// Whitespace post-pass: trailing whitespace stripped, blank-line runs
/// collapsed to one, leading blank lines dropped, one final newline.
pub fn tidy(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut blank_run = true;

    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if blank_run {
                continue;
            }
            blank_run = true;
        } else {
            blank_run = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Framework, StyleFormat};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tokenforge_core::{
        DocumentNode, LayoutMode, LayoutValue, NodeType, Padding, Rgba, TokenValue,
        TypographyValue,
    };

    fn button() -> Token {
        Token::component(ComponentValue::new("Button").with_layout(LayoutValue {
            layout_mode: LayoutMode::Horizontal,
            padding: Some(Padding::uniform(8.0)),
            ..Default::default()
        }))
    }

    fn tokens() -> Vec<Token> {
        vec![
            Token::color("Primary", Rgba::rgba(0.1, 0.2, 0.3, 1.0)),
            button(),
            Token::component(ComponentValue::new("Card")),
        ]
    }

    fn names(files: &[GeneratedFile]) -> Vec<String> {
        files.iter().map(GeneratedFile::relative_path).collect()
    }

    #[test]
    fn test_react_file_order() {
        let generator = CodeGenerator::new(CodeGenerationOptions::new()).unwrap();
        let files = generator.generate_from_tokens(&tokens()).unwrap();

        assert_eq!(
            names(&files),
            [
                "styles/global.css",
                "components/Button/Button.tsx",
                "styles/components/Button.css",
                "components/Card/Card.tsx",
                "styles/components/Card.css",
                "index.ts",
            ]
        );
        assert!(files[0].content.contains("--color-primary: rgba(25.5, 51, 76.5, 1);"));
        assert!(files[1].content.contains("flex flex-row p-2"));
        assert_eq!(
            files[5].content,
            "export { Button } from './components/Button';\nexport { Card } from './components/Card';\n"
        );
    }

    #[test]
    fn test_angular_emits_module() {
        let options = CodeGenerationOptions::new()
            .with_framework(Framework::Angular)
            .with_style_format(StyleFormat::Scss);
        let files = CodeGenerator::new(options)
            .unwrap()
            .generate_from_tokens(&tokens())
            .unwrap();

        let last = files.last().unwrap();
        assert_eq!(last.file_name, "components.module.ts");
        assert_eq!(last.kind, FileKind::Module);
        assert!(last.content.contains("declarations: [ButtonComponent, CardComponent]"));
        assert!(files.iter().all(|f| f.kind != FileKind::Index));
        assert_eq!(files[0].file_name, "global.scss");
    }

    #[test]
    fn test_empty_tokens_yield_single_global_file() {
        let generator = CodeGenerator::new(CodeGenerationOptions::new()).unwrap();
        let files = generator.generate_from_tokens(&[]).unwrap();

        let styles: Vec<_> = files.iter().filter(|f| f.kind == FileKind::Style).collect();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].file_name, "global.css");
        assert!(files.iter().all(|f| f.kind != FileKind::Component));
        assert_eq!(files.last().unwrap().content, "");
    }

    #[test]
    fn test_set_options_rebuilds_backends() {
        let mut generator = CodeGenerator::new(CodeGenerationOptions::new()).unwrap();
        generator
            .set_options(
                CodeGenerationOptions::new()
                    .with_framework(Framework::Vue)
                    .with_style_format(StyleFormat::Tailwind)
                    .with_typescript(false),
            )
            .unwrap();

        let files = generator.generate_from_tokens(&tokens()).unwrap();
        assert_eq!(files[0].file_name, "tailwind.config.js");
        assert_eq!(files[1].file_name, "Button.vue");
        assert_eq!(files.last().unwrap().file_name, "index.js");
    }

    #[test]
    fn test_set_options_failure_keeps_previous_state() {
        let mut generator =
            CodeGenerator::with_registry(CodeGenerationOptions::new(), GeneratorRegistry::with_defaults())
                .unwrap();
        let mut registry = GeneratorRegistry::new();
        std::mem::swap(&mut generator.registry, &mut registry);

        let result = generator.set_options(CodeGenerationOptions::new().with_framework(Framework::Vue));
        assert!(result.is_err());
        assert_eq!(generator.options().framework, Framework::React);
    }

    #[test]
    fn test_handle_request() {
        let request: GenerationRequest = serde_json::from_value(serde_json::json!({
            "tokens": serde_json::to_value(tokens()).unwrap(),
            "options": {"framework": "vue", "styleFormat": "css", "typescriptOutput": true, "formatOutput": true}
        }))
        .unwrap();

        let response = CodeGenerator::handle(&request).unwrap();
        assert_eq!(response.files.len(), 6);
        assert_eq!(response.files[1].file_name, "Button.vue");
    }

    #[test]
    fn test_non_ascii_names_survive_generation() {
        let root = DocumentNode::new("Page", NodeType::Canvas).with_children(vec![
            DocumentNode::new("主色", NodeType::Rectangle).with_fill(Rgba::rgb(1.0, 0.0, 0.0)),
            DocumentNode::new("副色", NodeType::Rectangle).with_fill(Rgba::rgb(0.0, 1.0, 0.0)),
            DocumentNode::new("按钮", NodeType::Component).with_fill(Rgba::rgb(0.0, 0.0, 1.0)),
        ]);
        let tokens = tokenforge_extract::extract(&root);

        let files = CodeGenerator::new(CodeGenerationOptions::new())
            .unwrap()
            .generate_from_tokens(&tokens)
            .unwrap();
        assert_eq!(
            names(&files),
            [
                "styles/global.css",
                "components/按钮/按钮.tsx",
                "styles/components/按钮.css",
                "index.ts",
            ]
        );
        assert!(files[0].content.contains("--color-主色: rgba(255, 0, 0, 1);"));
        assert!(files[0].content.contains("--color-副色: rgba(0, 255, 0, 1);"));
        assert!(files[1].content.contains("export const 按钮: React.FC<按钮Props>"));
        assert!(files[2].content.starts_with(".按钮 {\n"));
        assert_eq!(files[3].content, "export { 按钮 } from './components/按钮';\n");
    }

    #[test]
    fn test_extracted_document_end_to_end() {
        let root = DocumentNode::new("Page", NodeType::Canvas).with_child(
            DocumentNode::new("Button", NodeType::Component)
                .with_fill(Rgba::rgb(0.0, 0.5, 1.0))
                .with_layout(LayoutMode::Horizontal)
                .with_padding(Padding::uniform(8.0)),
        );
        let tokens = tokenforge_extract::extract(&root);

        let react = CodeGenerator::new(CodeGenerationOptions::new())
            .unwrap()
            .generate_from_tokens(&tokens)
            .unwrap();
        assert_eq!(react[1].file_name, "Button.tsx");
        assert!(react[1].content.contains("'flex flex-row p-2'"));
        assert!(react[0].content.contains("--color-button: rgba(0, 127.5, 255, 1);"));

        let angular = CodeGenerator::new(CodeGenerationOptions::new().with_framework(Framework::Angular))
            .unwrap()
            .generate_from_tokens(&tokens)
            .unwrap();
        assert_eq!(
            names(&angular),
            [
                "styles/global.css",
                "components/Button/button.component.ts",
                "styles/components/Button.css",
                "components.module.ts",
            ]
        );
        assert!(angular[3].content.contains("ButtonComponent"));
    }

    #[test]
    fn test_tidy() {
        assert_eq!(tidy("\n\na  \n\n\n\nb\t\n\n"), "a\n\nb\n");
        assert_eq!(tidy("x"), "x\n");
        assert_eq!(tidy("\n\n"), "");
    }

    fn arb_tokens() -> impl Strategy<Value = Vec<Token>> {
        let token = prop_oneof![
            ("[A-Z][a-z]{0,6}", 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0)
                .prop_map(|(name, r, g, b)| Token::color(name, Rgba::rgb(r, g, b))),
            ("[A-Z][a-z]{0,6}", 8.0f64..64.0).prop_map(|(name, size)| {
                Token::new(
                    format!("typography:{}", name),
                    name,
                    Vec::new(),
                    TokenValue::Typography(TypographyValue {
                        font_size: size,
                        ..Default::default()
                    }),
                )
            }),
            "[A-Z][a-z]{0,6}".prop_map(|name| Token::component(ComponentValue::new(name))),
        ];
        prop::collection::vec(token, 0..12)
    }

    proptest! {
        #[test]
        fn test_generation_is_idempotent(tokens in arb_tokens(), scss in any::<bool>()) {
            let format = if scss { StyleFormat::Scss } else { StyleFormat::Css };
            let generator = CodeGenerator::new(CodeGenerationOptions::new().with_style_format(format)).unwrap();
            let first = generator.generate_from_tokens(&tokens).unwrap();
            let second = generator.generate_from_tokens(&tokens).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
