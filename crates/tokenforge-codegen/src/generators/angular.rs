//! Angular component and module generator.

use serde::Serialize;
use tokenforge_core::naming::{class_name, kebab_case, pascal_case, selector_name};
use tokenforge_core::ComponentValue;

use super::layout::{layout_classes, BOOTSTRAP};
use super::templates::TemplateEngine;
use super::{component_style_import, FileKind, FrameworkGenerator, GeneratedFile};
use crate::error::Result;
use crate::options::{CodeGenerationOptions, Framework, StyleFormat};

const SELECTOR_PREFIX: &str = "app";
const MODULE_NAME: &str = "ComponentsModule";

const COMPONENT_TEMPLATE: &str = r#"import { {{core_imports}} } from '@angular/core';

@Component({
  selector: '{{selector}}',
  template: `
    <div class="{{classes}}">
      <ng-content></ng-content>
    </div>
  `,
  {{styles}}
})
{{class_decl}}
"#;

const MODULE_TEMPLATE: &str = r#"import { NgModule } from '@angular/core';
import { CommonModule } from '@angular/common';
{{imports}}

@NgModule({
  declarations: [{{declarations}}],
  imports: [CommonModule],
  exports: [{{declarations}}],
})
export class {{module_name}} {}
"#;

#[derive(Serialize)]
struct ComponentContext {
    core_imports: &'static str,
    selector: String,
    classes: String,
    styles: String,
    class_decl: String,
}

#[derive(Serialize)]
struct ModuleContext {
    imports: String,
    declarations: String,
    module_name: &'static str,
}

/// Angular code generator.
pub struct AngularGenerator {
    engine: TemplateEngine,
    style_format: StyleFormat,
}

impl AngularGenerator {
    pub fn new(options: &CodeGenerationOptions) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("component", COMPONENT_TEMPLATE)?;
        engine.register_template("module", MODULE_TEMPLATE)?;
        Ok(Self {
            engine,
            style_format: options.style_format,
        })
    }

    fn class_ident(component: &str) -> String {
        format!("{}Component", component)
    }

    fn file_stem(name: &str) -> String {
        format!("{}.component", kebab_case(name))
    }

    fn inputs(value: &ComponentValue) -> Vec<&'static str> {
        let mut inputs = Vec::new();
        if value.styles.typography.is_some() {
            inputs.push("@Input() text?: string;");
        }
        if value.styles.layout.item_spacing.is_some() {
            inputs.push("@Input() spacing?: number;");
        }
        inputs
    }
}

impl FrameworkGenerator for AngularGenerator {
    fn framework(&self) -> Framework {
        Framework::Angular
    }

    fn generate_component(&self, value: &ComponentValue) -> Result<GeneratedFile> {
        let component = pascal_case(&value.name);
        let inputs = Self::inputs(value);

        let mut classes = class_name(&value.name);
        let layout = layout_classes(&value.styles.layout, &BOOTSTRAP);
        if !layout.is_empty() {
            classes.push(' ');
            classes.push_str(&layout);
        }

        let class_decl = if inputs.is_empty() {
            format!("export class {} {{}}", Self::class_ident(&component))
        } else {
            let mut lines = vec![format!("export class {} {{", Self::class_ident(&component))];
            lines.extend(inputs.iter().map(|input| format!("  {}", input)));
            lines.push("}".to_string());
            lines.join("\n")
        };

        let styles = match self.style_format {
            StyleFormat::Scss => format!(
                "styleUrls: ['{}'],",
                component_style_import(&component, self.style_format.extension())
            ),
            StyleFormat::Css | StyleFormat::Tailwind => "styles: [],".to_string(),
        };

        let context = ComponentContext {
            core_imports: if inputs.is_empty() {
                "Component"
            } else {
                "Component, Input"
            },
            selector: selector_name(SELECTOR_PREFIX, &value.name),
            classes,
            styles,
            class_decl,
        };

        let content = self.engine.render("component", &context)?;
        Ok(GeneratedFile::new(
            format!("{}.ts", Self::file_stem(&value.name)),
            content,
            FileKind::Component,
            ["components".to_string(), component],
        ))
    }

    fn generate_module(&self, components: &[&ComponentValue]) -> Result<Option<GeneratedFile>> {
        let imports = components
            .iter()
            .map(|value| {
                let component = pascal_case(&value.name);
                format!(
                    "import {{ {} }} from './components/{}/{}';",
                    Self::class_ident(&component),
                    component,
                    Self::file_stem(&value.name)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let declarations = components
            .iter()
            .map(|value| Self::class_ident(&pascal_case(&value.name)))
            .collect::<Vec<_>>()
            .join(", ");

        let context = ModuleContext {
            imports,
            declarations,
            module_name: MODULE_NAME,
        };

        let content = self.engine.render("module", &context)?;
        Ok(Some(GeneratedFile::new(
            "components.module.ts",
            content,
            FileKind::Module,
            Vec::<String>::new(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokenforge_core::{LayoutMode, LayoutValue, Padding, TypographyValue};

    fn options(style_format: StyleFormat) -> CodeGenerationOptions {
        CodeGenerationOptions::new()
            .with_framework(Framework::Angular)
            .with_style_format(style_format)
    }

    fn button() -> ComponentValue {
        ComponentValue::new("Button").with_layout(LayoutValue {
            layout_mode: LayoutMode::Horizontal,
            padding: Some(Padding::uniform(8.0)),
            ..Default::default()
        })
    }

    #[test]
    fn test_component_file() {
        let generator = AngularGenerator::new(&options(StyleFormat::Css)).unwrap();
        let file = generator.generate_component(&button()).unwrap();

        assert_eq!(file.file_name, "button.component.ts");
        assert_eq!(
            file.content,
            r#"import { Component } from '@angular/core';

@Component({
  selector: 'app-button',
  template: `
    <div class="button d-flex flex-row p-2">
      <ng-content></ng-content>
    </div>
  `,
  styles: [],
})
export class ButtonComponent {}
"#
        );
    }

    #[test]
    fn test_inputs_and_style_urls() {
        let generator = AngularGenerator::new(&options(StyleFormat::Scss)).unwrap();
        let mut value = ComponentValue::new("IconButton").with_layout(LayoutValue {
            item_spacing: Some(8.0),
            ..Default::default()
        });
        value.styles.typography = Some(TypographyValue::default());

        let file = generator.generate_component(&value).unwrap();
        assert_eq!(file.file_name, "icon-button.component.ts");
        assert!(file.content.contains("import { Component, Input } from '@angular/core';"));
        assert!(file.content.contains("selector: 'app-icon-button',"));
        assert!(file
            .content
            .contains("styleUrls: ['../../styles/components/IconButton.scss'],"));
        assert!(file.content.contains(
            "export class IconButtonComponent {\n  @Input() text?: string;\n  @Input() spacing?: number;\n}"
        ));
    }

    #[test]
    fn test_module_lists_components() {
        let generator = AngularGenerator::new(&options(StyleFormat::Css)).unwrap();
        let button = button();
        let card = ComponentValue::new("Card");

        let module = generator
            .generate_module(&[&button, &card])
            .unwrap()
            .unwrap();

        assert_eq!(module.file_name, "components.module.ts");
        assert_eq!(module.kind, FileKind::Module);
        assert!(module.path.is_empty());
        assert_eq!(
            module.content,
            r#"import { NgModule } from '@angular/core';
import { CommonModule } from '@angular/common';
import { ButtonComponent } from './components/Button/button.component';
import { CardComponent } from './components/Card/card.component';

@NgModule({
  declarations: [ButtonComponent, CardComponent],
  imports: [CommonModule],
  exports: [ButtonComponent, CardComponent],
})
export class ComponentsModule {}
"#
        );
    }
}
