//! Core types for the tokenforge pipeline.
//!
//! This crate provides the foundational types shared by every other tokenforge crate:
//! - The design-document node schema and its ingestion boundary
//! - Paint, effect, layout and typography value types
//! - The typed token model produced by extraction
//! - The four-bucket `TokenSet` used by export and history
//! - Naming rules (kebab/camel/Pascal casing) shared by all emitters
//! - Error types

pub mod error;
pub mod naming;
pub mod node;
pub mod token_set;
pub mod tokens;
pub mod types;

pub use error::{CoreError, Result};
pub use node::{parse_document, parse_document_str, DocumentNode, NodeType, NODE_SCHEMA_VERSION};
pub use token_set::{TokenSet, TypographyEntry};
pub use tokens::{
    ColorValue, ComponentValue, EffectValue, LayoutValue, PaintRole, StyleBundle, Token,
    TokenKind, TokenMetadata, TokenPath, TokenValue, TypographyValue,
};
pub use types::*;
