//! Recursive document walker.
//!
//! The walk is depth-first and pre-order. For each node it emits, in order:
//! color tokens for solid fills, color tokens for solid strokes, a typography
//! token for text nodes, one effect token per shadow (and per blur when deep
//! extraction is on), a layout token when a layout mode is declared, and a
//! component token for component definitions and instances. Children are then
//! visited in document order.
//!
//! Token ids have the form `{kind}:{segments}[:{context}][:{index}]`, where
//! `segments` is the `/`-joined chain of node names from the root. A node whose
//! name repeats an earlier sibling's gets a `#n` suffix, so ids stay unique even
//! when display names collide.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, trace};

use tokenforge_core::{
    parse_document, parse_document_str, ColorValue, ComponentValue, DocumentNode, EffectValue,
    LayoutValue, Paint, PaintRole, StyleBundle, Token, TokenKind, TokenMetadata, TokenValue,
    TypographyValue,
};

use crate::error::Result;
use crate::options::ExtractOptions;

/// Walks design documents and emits tokens.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract tokens from an already-validated document tree.
    pub fn extract(&self, root: &DocumentNode) -> Vec<Token> {
        debug!(
            root = %root.name,
            nodes = root.node_count(),
            include_blur = self.options.include_blur,
            "extracting tokens"
        );

        let mut walk = Walk::new(&self.options);
        walk.visit(root, escape_segment(&root.name), true);
        let tokens = walk.finish();

        info!(
            tokens = tokens.len(),
            components = tokens
                .iter()
                .filter(|t| t.kind() == TokenKind::Component)
                .count(),
            "extraction complete"
        );
        tokens
    }

    /// Validate raw JSON at the ingestion boundary, then extract.
    pub fn extract_value(&self, value: Value) -> Result<Vec<Token>> {
        let root = parse_document(value)?;
        Ok(self.extract(&root))
    }

    /// Parse JSON text, validate it, then extract.
    pub fn extract_str(&self, json: &str) -> Result<Vec<Token>> {
        let root = parse_document_str(json)?;
        Ok(self.extract(&root))
    }
}

/// Shallow extraction with default options.
pub fn extract(root: &DocumentNode) -> Vec<Token> {
    Extractor::default().extract(root)
}

/// A component token whose subtree is still being walked.
struct OpenComponent {
    token_index: usize,
    children: Vec<ComponentValue>,
    first_text: Option<TypographyValue>,
}

struct Walk<'a> {
    options: &'a ExtractOptions,
    tokens: Vec<Token>,
    /// Parallel to `tokens`: whether the originating node is component-like.
    from_component: Vec<bool>,
    path: Vec<String>,
    id_path: Vec<String>,
    counts: HashMap<String, u32>,
    open: Vec<OpenComponent>,
}

impl<'a> Walk<'a> {
    fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            tokens: Vec::new(),
            from_component: Vec::new(),
            path: Vec::new(),
            id_path: Vec::new(),
            counts: HashMap::new(),
            open: Vec::new(),
        }
    }

    fn visit(&mut self, node: &DocumentNode, segment: String, is_root: bool) {
        // The root's own name never appears in token paths.
        if !is_root {
            self.path.push(node.name.clone());
        }
        self.id_path.push(segment);
        *self.counts.entry(node.name.clone()).or_insert(0) += 1;

        let base = self.id_path.join("/");
        let component_like = node.node_type.is_component_like();

        self.emit_colors(node, &node.fills, PaintRole::Fill, &base, component_like);
        self.emit_colors(node, &node.strokes, PaintRole::Stroke, &base, component_like);

        if node.node_type.is_text() {
            let typography = node
                .style
                .as_ref()
                .map(TypographyValue::from_style)
                .unwrap_or_default();
            for frame in self.open.iter_mut() {
                if frame.first_text.is_none() {
                    frame.first_text = Some(typography.clone());
                }
            }
            self.push(
                format!("typography:{}", base),
                node,
                TokenValue::Typography(typography),
                component_like,
            );
        }

        for (index, effect) in node.effects.iter().enumerate() {
            let kind = effect.effect_type;
            if kind.is_shadow() || (self.options.include_blur && kind.is_blur()) {
                self.push(
                    format!("shadow:{}:{}", base, index),
                    node,
                    TokenValue::Shadow(EffectValue::from(effect)),
                    component_like,
                );
            } else {
                trace!(node = %node.name, effect = kind.as_str(), "effect not recorded");
            }
        }

        let layout = node.layout_mode.map(|layout_mode| LayoutValue {
            layout_mode,
            layout_constraint: node.constraints.unwrap_or_default(),
            padding: node.padding(),
            item_spacing: node.item_spacing,
            counter_axis_spacing: node.counter_axis_spacing,
        });
        if let Some(layout) = layout {
            self.push(
                format!("layout:{}", base),
                node,
                TokenValue::Spacing(layout),
                component_like,
            );
        }

        if component_like {
            let value = ComponentValue {
                id: node.id.clone(),
                name: node.name.clone(),
                key: node.id.clone(),
                remote: false,
                styles: StyleBundle {
                    fills: node.fills.clone(),
                    strokes: node.strokes.clone(),
                    effects: node.effects.clone(),
                    layout: layout.unwrap_or_else(|| LayoutValue {
                        layout_constraint: node.constraints.unwrap_or_default(),
                        ..Default::default()
                    }),
                    typography: node.style.as_ref().map(TypographyValue::from_style),
                },
                children: Vec::new(),
            };
            let token_index = self.tokens.len();
            self.push(
                format!("component:{}", base),
                node,
                TokenValue::Component(value),
                true,
            );
            self.open.push(OpenComponent {
                token_index,
                children: Vec::new(),
                first_text: None,
            });
        }

        let mut siblings: HashMap<&str, u32> = HashMap::new();
        for child in &node.children {
            let seen = siblings.entry(child.name.as_str()).or_insert(0);
            let segment = if *seen == 0 {
                escape_segment(&child.name)
            } else {
                format!("{}#{}", escape_segment(&child.name), seen)
            };
            *seen += 1;
            self.visit(child, segment, false);
        }

        if component_like {
            self.close_component();
        }

        self.id_path.pop();
        if !is_root {
            self.path.pop();
        }
    }

    fn emit_colors(
        &mut self,
        node: &DocumentNode,
        paints: &[Paint],
        role: PaintRole,
        base: &str,
        component_like: bool,
    ) {
        for (index, paint) in paints.iter().enumerate() {
            match paint.solid_color() {
                Some(color) => self.push(
                    format!("color:{}:{}:{}", base, role.as_str(), index),
                    node,
                    TokenValue::Color(ColorValue { color, role, index }),
                    component_like,
                ),
                None => trace!(
                    node = %node.name,
                    paint = ?paint.paint_type,
                    "non-solid paint skipped"
                ),
            }
        }
    }

    fn push(&mut self, id: String, node: &DocumentNode, value: TokenValue, from_component: bool) {
        let token = Token::new(id, node.name.clone(), self.path.iter().cloned(), value);
        self.tokens.push(token);
        self.from_component.push(from_component);
    }

    /// Finalize the innermost open component: attach its nested components and
    /// fall back to the first text style in its subtree, then hand a copy to the
    /// enclosing component.
    fn close_component(&mut self) {
        let Some(frame) = self.open.pop() else {
            return;
        };

        let finished = match &mut self.tokens[frame.token_index].value {
            TokenValue::Component(value) => {
                if value.styles.typography.is_none() {
                    value.styles.typography = frame.first_text;
                }
                value.children = frame.children;
                Some(value.clone())
            }
            _ => None,
        };

        if let (Some(value), Some(parent)) = (finished, self.open.last_mut()) {
            parent.children.push(value);
        }
    }

    fn finish(self) -> Vec<Token> {
        let Walk {
            options,
            mut tokens,
            from_component,
            counts,
            ..
        } = self;

        if options.usage_metadata {
            for (token, component_like) in tokens.iter_mut().zip(from_component) {
                let frequency = counts.get(&token.name).copied().unwrap_or(0);
                token.metadata = Some(TokenMetadata {
                    is_component: component_like || token.kind() == TokenKind::Component,
                    is_reused: frequency > 1,
                    frequency,
                });
            }
        }

        tokens
    }
}

/// Escape the characters that carry meaning inside an id segment.
fn escape_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '#' => out.push_str("%23"),
            c => out.push(c),
        }
    }
    out
}
