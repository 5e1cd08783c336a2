//! Generator registry.

use indexmap::IndexMap;

use crate::error::{CodegenError, Result};
use crate::generators::FrameworkGenerator;
use crate::options::{CodeGenerationOptions, Framework};

/// Builds a framework generator for a set of options.
pub type GeneratorFactory = fn(&CodeGenerationOptions) -> Result<Box<dyn FrameworkGenerator>>;

/// Registry of framework generator factories.
///
/// The orchestrator resolves its generator here once, when options are set,
/// and never re-dispatches per component.
#[derive(Clone)]
pub struct GeneratorRegistry {
    factories: IndexMap<Framework, GeneratorFactory>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Create a registry with every generator enabled by cargo features.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        #[cfg(feature = "react")]
        registry.register(Framework::React, |options| {
            Ok(Box::new(crate::generators::ReactGenerator::new(options)?))
        });

        #[cfg(feature = "vue")]
        registry.register(Framework::Vue, |options| {
            Ok(Box::new(crate::generators::VueGenerator::new(options)?))
        });

        #[cfg(feature = "angular")]
        registry.register(Framework::Angular, |options| {
            Ok(Box::new(crate::generators::AngularGenerator::new(options)?))
        });

        registry
    }

    /// Register a factory, replacing any previous one for the framework.
    pub fn register(&mut self, framework: Framework, factory: GeneratorFactory) {
        self.factories.insert(framework, factory);
    }

    pub fn supports(&self, framework: Framework) -> bool {
        self.factories.contains_key(&framework)
    }

    /// Registered frameworks, in registration order.
    pub fn frameworks(&self) -> impl Iterator<Item = Framework> + '_ {
        self.factories.keys().copied()
    }

    /// Build the generator selected by `options.framework`.
    pub fn create(&self, options: &CodeGenerationOptions) -> Result<Box<dyn FrameworkGenerator>> {
        let factory = self
            .factories
            .get(&options.framework)
            .ok_or_else(|| CodegenError::UnsupportedFramework(options.framework.to_string()))?;
        factory(options)
    }
}
