//! Token extraction from design documents.
//!
//! The extractor walks a validated [`DocumentNode`](tokenforge_core::DocumentNode)
//! tree once, depth-first, and emits a flat, ordered sequence of typed tokens.
//! It observes; it does not transform. Grouping into a
//! [`TokenSet`](tokenforge_core::TokenSet) happens downstream.
//!
//! # Example
//!
//! ```ignore
//! use tokenforge_extract::{Extractor, ExtractOptions};
//!
//! let tokens = Extractor::new(ExtractOptions::deep()).extract_str(&json)?;
//! for token in &tokens {
//!     println!("{} {}", token.kind(), token.id);
//! }
//! ```

pub mod error;
mod extractor;
mod options;

pub use error::{ExtractError, Result};
pub use extractor::{extract, Extractor};
pub use options::ExtractOptions;
