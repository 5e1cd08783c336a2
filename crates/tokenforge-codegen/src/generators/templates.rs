//! Template engine for code generation.

use crate::error::Result;
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde::Serialize;
use tokenforge_core::naming;

handlebars_helper!(pascal_case: |s: str| naming::pascal_case(s));
handlebars_helper!(camel_case: |s: str| naming::camel_case(s));
handlebars_helper!(kebab_case: |s: str| naming::kebab_case(s));

/// Template engine using Handlebars.
///
/// Output is never HTML-escaped, and strict mode is on: a template that
/// references a field missing from its context fails to render.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);

        handlebars.register_helper("pascal_case", Box::new(pascal_case));
        handlebars.register_helper("camel_case", Box::new(camel_case));
        handlebars.register_helper("kebab_case", Box::new(kebab_case));

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars.register_template_string(name, template)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render(name, data)?)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
