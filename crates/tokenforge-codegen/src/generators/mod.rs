//! Framework generators.
//!
//! Each generator turns one component token into one framework source file.
//! Generators are built once per options value and hold no state between calls.

#[cfg(feature = "angular")]
mod angular;
#[cfg(feature = "react")]
mod react;
#[cfg(feature = "vue")]
mod vue;

mod layout;
mod templates;

#[cfg(feature = "angular")]
pub use angular::AngularGenerator;
#[cfg(feature = "react")]
pub use react::ReactGenerator;
#[cfg(feature = "vue")]
pub use vue::VueGenerator;

pub use layout::{layout_classes, UtilityScheme, BOOTSTRAP, TAILWIND};
pub use templates::TemplateEngine;

use serde::{Deserialize, Serialize};
use tokenforge_core::ComponentValue;

use crate::error::Result;
use crate::options::Framework;

/// Common trait for framework generators.
pub trait FrameworkGenerator: Send + Sync {
    /// Target framework.
    fn framework(&self) -> Framework;

    /// Generate the source file for one component.
    fn generate_component(&self, component: &ComponentValue) -> Result<GeneratedFile>;

    /// Generate a module file registering every component, for frameworks that
    /// aggregate components that way. Others get an index file from the
    /// orchestrator instead.
    fn generate_module(&self, _components: &[&ComponentValue]) -> Result<Option<GeneratedFile>> {
        Ok(None)
    }
}

/// Kind of generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Style,
    Index,
    Module,
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    /// File name, including extension.
    pub file_name: String,
    /// File content.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Destination directory segments relative to the output root.
    pub path: Vec<String>,
}

impl GeneratedFile {
    pub fn new(
        file_name: impl Into<String>,
        content: impl Into<String>,
        kind: FileKind,
        path: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            kind,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// `path/segments/file_name`.
    pub fn relative_path(&self) -> String {
        let mut parts: Vec<&str> = self.path.iter().map(String::as_str).collect();
        parts.push(&self.file_name);
        parts.join("/")
    }
}

/// Relative import of a component stylesheet from a component file, which
/// lives two levels deep under `components/<Name>/`.
pub(crate) fn component_style_import(component: &str, extension: &str) -> String {
    format!("../../styles/components/{}.{}", component, extension)
}
