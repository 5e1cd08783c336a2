//! Vue single-file-component generator.

use serde::Serialize;
use tokenforge_core::naming::{class_name, pascal_case};
use tokenforge_core::ComponentValue;

use super::layout::{layout_classes, TAILWIND};
use super::templates::TemplateEngine;
use super::{component_style_import, FileKind, FrameworkGenerator, GeneratedFile};
use crate::error::Result;
use crate::options::{CodeGenerationOptions, Framework, StyleFormat};

const COMPONENT_TEMPLATE: &str = r#"<template>
  <div :class="[{{classes}}]" v-bind="$attrs">
    {{slot}}
  </div>
</template>

<script{{script_lang}}>
{{script}}
</script>

<style{{style_lang}} scoped>
@import '{{style_import}}';
</style>
"#;

#[derive(Serialize)]
struct ComponentContext {
    classes: String,
    slot: String,
    script_lang: &'static str,
    script: String,
    style_lang: &'static str,
    style_import: String,
}

/// Vue code generator.
pub struct VueGenerator {
    engine: TemplateEngine,
    use_typescript: bool,
    style_format: StyleFormat,
}

impl VueGenerator {
    pub fn new(options: &CodeGenerationOptions) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("component", COMPONENT_TEMPLATE)?;
        Ok(Self {
            engine,
            use_typescript: options.typescript,
            style_format: options.style_format,
        })
    }

    fn script(&self, name: &str, has_text: bool) -> String {
        let mut lines = Vec::new();
        if self.use_typescript {
            lines.push("import { defineComponent } from 'vue';".to_string());
            lines.push(String::new());
            lines.push("export default defineComponent({".to_string());
        } else {
            lines.push("export default {".to_string());
        }

        lines.push(format!("  name: '{}',", name));
        if has_text {
            lines.push("  props: {".to_string());
            lines.push("    text: { type: String },".to_string());
            lines.push("  },".to_string());
        }

        lines.push(if self.use_typescript { "});" } else { "};" }.to_string());
        lines.join("\n")
    }
}

impl FrameworkGenerator for VueGenerator {
    fn framework(&self) -> Framework {
        Framework::Vue
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
            classes: classes.join(", "),
            slot: if has_text {
                "<slot>{{ text }}</slot>".to_string()
            } else {
                "<slot></slot>".to_string()
            },
            script_lang: if self.use_typescript { " lang=\"ts\"" } else { "" },
            script: self.script(&component, has_text),
            style_lang: if self.style_format == StyleFormat::Scss {
                " lang=\"scss\""
            } else {
                ""
            },
            style_import: component_style_import(&component, self.style_format.extension()),
        };

        let content = self.engine.render("component", &context)?;
        Ok(GeneratedFile::new(
            format!("{}.vue", component),
            content,
            FileKind::Component,
            ["components".to_string(), component],
        ))
    }
}
