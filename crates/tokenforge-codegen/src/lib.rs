//! Code generation from design tokens.
//!
//! This crate turns an extracted token sequence into stylesheets and UI
//! component sources for one of several target frameworks.
//!
//! # Features
//!
//! - `react` - React function components (`.tsx` / `.jsx`) with Tailwind utilities
//! - `vue` - Vue single-file components with Tailwind utilities
//! - `angular` - Angular components with Bootstrap utilities, plus an `NgModule`
//!
//! # Example
//!
//! ```ignore
//! use tokenforge_codegen::{CodeGenerator, CodeGenerationOptions, Framework};
//!
//! let options = CodeGenerationOptions::new().with_framework(Framework::Vue);
//! let generator = CodeGenerator::new(options)?;
//! for file in generator.generate_from_tokens(&tokens)? {
//!     println!("{}", file.relative_path());
//! }
//! ```

pub mod error;
pub mod generators;
pub mod options;
pub mod orchestrator;
pub mod registry;
pub mod styles;

pub use error::{CodegenError, Result};
pub use generators::{FileKind, FrameworkGenerator, GeneratedFile, TemplateEngine};
pub use options::{CodeGenerationOptions, Framework, StyleFormat};
pub use orchestrator::{tidy, CodeGenerator, GenerationRequest, GenerationResponse};
pub use registry::{GeneratorFactory, GeneratorRegistry};
pub use styles::{StyleBackend, StyleSheet};

// Re-export framework-specific generators
#[cfg(feature = "angular")]
pub use generators::AngularGenerator;

#[cfg(feature = "react")]
pub use generators::ReactGenerator;

#[cfg(feature = "vue")]
pub use generators::VueGenerator;
