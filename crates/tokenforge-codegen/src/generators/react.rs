//! React function-component generator.

use serde::Serialize;
use tokenforge_core::naming::{class_name, pascal_case};
use tokenforge_core::ComponentValue;

use super::layout::{layout_classes, TAILWIND};
use super::templates::TemplateEngine;
use super::{FileKind, FrameworkGenerator, GeneratedFile};
use crate::error::Result;
use crate::options::{CodeGenerationOptions, Framework};

const COMPONENT_TEMPLATE: &str = r#"import React from 'react';
{{props_interface}}
export const {{component}}{{annotation}} = ({ {{params}} }) => {
  return (
    <div className={[{{classes}}, className].filter(Boolean).join(' ')} {...props}>
      {{body}}
    </div>
  );
};

export default {{component}};
"#;

#[derive(Serialize)]
struct ComponentContext {
    component: String,
    props_interface: String,
    annotation: String,
    params: String,
    classes: String,
    body: String,
}

/// React code generator.
pub struct ReactGenerator {
    engine: TemplateEngine,
    use_typescript: bool,
}

impl ReactGenerator {
    pub fn new(options: &CodeGenerationOptions) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("component", COMPONENT_TEMPLATE)?;
        Ok(Self {
            engine,
            use_typescript: options.typescript,
        })
    }

    fn ext(&self) -> &'static str {
        if self.use_typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    fn props_interface(&self, component: &str, has_text: bool) -> String {
        if !self.use_typescript {
            return String::new();
        }
        let mut lines = vec![
            String::new(),
            format!(
                "export interface {}Props extends React.HTMLAttributes<HTMLDivElement> {{",
                component
            ),
            "  children?: React.ReactNode;".to_string(),
        ];
        if has_text {
            lines.push("  text?: string;".to_string());
        }
        lines.push("}".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

impl FrameworkGenerator for ReactGenerator {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn generate_component(&self, value: &ComponentValue) -> Result<GeneratedFile> {
        let component = pascal_case(&value.name);
        let has_text = value.styles.typography.is_some();

        let mut classes = vec![format!("'{}'", class_name(&value.name))];
        let layout = layout_classes(&value.styles.layout, &TAILWIND);
        if !layout.is_empty() {
            classes.push(format!("'{}'", layout));
        }

        let context = ComponentContext {
            props_interface: self.props_interface(&component, has_text),
            annotation: if self.use_typescript {
                format!(": React.FC<{}Props>", component)
            } else {
                String::new()
            },
            params: if has_text {
                "text, className, children, ...props".to_string()
            } else {
                "className, children, ...props".to_string()
            },
            classes: classes.join(", "),
            body: if has_text {
                "{children ?? text}".to_string()
            } else {
                "{children}".to_string()
            },
            component: component.clone(),
        };

        let content = self.engine.render("component", &context)?;
        Ok(GeneratedFile::new(
            format!("{}.{}", component, self.ext()),
            content,
            FileKind::Component,
            ["components".to_string(), component],
        ))
    }
}
