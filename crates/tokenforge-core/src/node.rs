//! Design-document node schema and the ingestion boundary.
//!
//! Raw documents arrive as untyped JSON from an external fetcher. Every node is
//! checked for the two required fields (`name`, `type`) before the tree is
//! deserialized into [`DocumentNode`], so nothing downstream ever sees an
//! untrusted shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::types::{Effect, LayoutConstraint, LayoutMode, Padding, Paint, Rgba, TextStyle};

/// Version of the node schema accepted by [`parse_document`].
pub const NODE_SCHEMA_VERSION: u32 = 1;

/// A node in a design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<LayoutConstraint>,
}

/// Type of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    Component,
    ComponentSet,
    Instance,
    #[serde(other)]
    Other,
}

impl NodeType {
    /// A reusable component definition or an instance of one.
    pub fn is_component_like(&self) -> bool {
        matches!(self, Self::Component | Self::Instance)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }
}

impl DocumentNode {
    /// Create a bare node with no attributes.
    pub fn new(name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            node_type,
            children: Vec::new(),
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            style: None,
            characters: None,
            layout_mode: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            item_spacing: None,
            counter_axis_spacing: None,
            constraints: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_child(mut self, child: DocumentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DocumentNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_fill(mut self, color: Rgba) -> Self {
        self.fills.push(Paint::solid(color));
        self
    }

    pub fn with_stroke(mut self, color: Rgba) -> Self {
        self.strokes.push(Paint::solid(color));
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_layout(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = Some(mode);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding_top = Some(padding.top);
        self.padding_right = Some(padding.right);
        self.padding_bottom = Some(padding.bottom);
        self.padding_left = Some(padding.left);
        self
    }

    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = Some(spacing);
        self
    }

    /// Padding, if any side is declared. Undeclared sides are zero.
    pub fn padding(&self) -> Option<Padding> {
        let sides = [
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
            self.padding_left,
        ];
        if sides.iter().all(Option::is_none) {
            return None;
        }
        Some(Padding {
            top: self.padding_top.unwrap_or(0.0),
            right: self.padding_right.unwrap_or(0.0),
            bottom: self.padding_bottom.unwrap_or(0.0),
            left: self.padding_left.unwrap_or(0.0),
        })
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DocumentNode::node_count).sum::<usize>()
    }
}

/// Parse a document from JSON text. See [`parse_document`].
pub fn parse_document_str(json: &str) -> Result<DocumentNode> {
    let value: Value = serde_json::from_str(json)?;
    parse_document(value)
}

/// Validate and deserialize a design document.
///
/// Accepts either a bare node or a file response carrying the root node under
/// `document`. Every node in the tree must be an object with string `name` and
/// `type` fields.
pub fn parse_document(value: Value) -> Result<DocumentNode> {
    let root = match value {
        Value::Object(mut obj) if !obj.contains_key("type") && obj.contains_key("document") => obj
            .remove("document")
            .unwrap_or(Value::Null),
        other => other,
    };

    let mut path = Vec::new();
    validate_node(&root, &mut path)?;
    Ok(serde_json::from_value(root)?)
}

fn validate_node(value: &Value, path: &mut Vec<String>) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| CoreError::malformed(path.as_slice(), "node is not an object"))?;

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::malformed(path.as_slice(), "missing string field `name`"))?;

    if !obj.get("type").map(Value::is_string).unwrap_or(false) {
        path.push(name.to_string());
        let err = CoreError::malformed(path.as_slice(), "missing string field `type`");
        path.pop();
        return Err(err);
    }

    match obj.get("children") {
        None | Some(Value::Null) => {}
        Some(Value::Array(children)) => {
            path.push(name.to_string());
            for child in children {
                validate_node(child, path)?;
            }
            path.pop();
        }
        Some(_) => {
            path.push(name.to_string());
            let err = CoreError::malformed(path.as_slice(), "`children` is not an array");
            path.pop();
            return Err(err);
        }
    }

    Ok(())
}
