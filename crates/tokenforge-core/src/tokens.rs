//! Token model produced by extraction.
//!
//! A [`Token`] is one typed fact observed on a design-document node. On the wire
//! it keeps the flat `{id, name, type, path, value, metadata?}` record shape so
//! that token sequences can be persisted and exchanged as plain JSON.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::naming::kebab_case;
use crate::types::{
    Effect, EffectType, LayoutConstraint, LayoutMode, LineHeight, Offset, Padding, Paint, Rgba,
    TextCase, TextDecoration, TextStyle,
};

/// Ancestor names from the document root (excluded) to the originating node.
pub type TokenPath = SmallVec<[String; 4]>;

/// Discriminant of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Color,
    Typography,
    #[serde(alias = "layout")]
    Spacing,
    #[serde(alias = "effect")]
    Shadow,
    Component,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Shadow => "shadow",
            Self::Component => "component",
        }
    }

    /// Whether tokens of this kind feed global stylesheets.
    pub fn is_style(&self) -> bool {
        !matches!(self, Self::Component)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" => Ok(Self::Color),
            "typography" => Ok(Self::Typography),
            "spacing" | "layout" => Ok(Self::Spacing),
            "shadow" | "effect" => Ok(Self::Shadow),
            "component" => Ok(Self::Component),
            _ => Err(CoreError::UnsupportedValue {
                kind: "token kind",
                value: s.to_string(),
            }),
        }
    }
}

/// Usage statistics computed over a whole extraction walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub is_component: bool,
    pub is_reused: bool,
    pub frequency: u32,
}

/// Whether a color came from a fill or a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintRole {
    #[default]
    Fill,
    Stroke,
}

impl PaintRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }
}

/// Color token payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    #[serde(flatten)]
    pub color: Rgba,
    #[serde(default)]
    pub role: PaintRole,
    /// Position in the node's fill or stroke list.
    #[serde(default)]
    pub index: usize,
}

/// Typography token payload. Missing style fields take fixed defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyValue {
    pub font_family: String,
    pub font_weight: f64,
    pub font_size: f64,
    pub letter_spacing: f64,
    pub line_height: LineHeight,
    pub text_decoration: TextDecoration,
    pub text_case: TextCase,
}

impl Default for TypographyValue {
    fn default() -> Self {
        Self {
            font_family: String::new(),
            font_weight: 400.0,
            font_size: 16.0,
            letter_spacing: 0.0,
            line_height: LineHeight::default(),
            text_decoration: TextDecoration::None,
            text_case: TextCase::Original,
        }
    }
}

impl TypographyValue {
    pub fn from_style(style: &TextStyle) -> Self {
        let defaults = Self::default();
        Self {
            font_family: style.font_family.clone().unwrap_or(defaults.font_family),
            font_weight: style.font_weight.unwrap_or(defaults.font_weight),
            font_size: style.font_size.unwrap_or(defaults.font_size),
            letter_spacing: style.letter_spacing.unwrap_or(defaults.letter_spacing),
            line_height: style.line_height.unwrap_or(defaults.line_height),
            text_decoration: style.text_decoration.unwrap_or(defaults.text_decoration),
            text_case: style.text_case.unwrap_or(defaults.text_case),
        }
    }
}

/// Layout token payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutValue {
    pub layout_mode: LayoutMode,
    pub layout_constraint: LayoutConstraint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,
}

/// Effect token payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectValue {
    #[serde(rename = "type")]
    pub kind: EffectType,
    #[serde(default)]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
}

impl From<&Effect> for EffectValue {
    fn from(effect: &Effect) -> Self {
        Self {
            kind: effect.effect_type,
            radius: effect.radius,
            spread: effect.spread,
            offset: effect.offset,
            color: effect.color,
        }
    }
}

/// Style bundle nested in a component token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleBundle {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    pub layout: LayoutValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyValue>,
}

/// Component token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentValue {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub styles: StyleBundle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentValue>,
}

impl ComponentValue {
    /// A component with an empty style bundle.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: String::new(),
            key: String::new(),
            name,
            remote: false,
            styles: StyleBundle::default(),
            children: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutValue) -> Self {
        self.styles.layout = layout;
        self
    }
}

/// Kind-specific token payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Color(ColorValue),
    Typography(TypographyValue),
    Spacing(LayoutValue),
    Shadow(EffectValue),
    Component(ComponentValue),
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Color(_) => TokenKind::Color,
            Self::Typography(_) => TokenKind::Typography,
            Self::Spacing(_) => TokenKind::Spacing,
            Self::Shadow(_) => TokenKind::Shadow,
            Self::Component(_) => TokenKind::Component,
        }
    }
}

/// One extracted design fact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "TokenRecord")]
pub struct Token {
    pub id: String,
    pub name: String,
    pub path: TokenPath,
    pub value: TokenValue,
    pub metadata: Option<TokenMetadata>,
}

impl Token {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl IntoIterator<Item = String>,
        value: TokenValue,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into_iter().collect(),
            value,
            metadata: None,
        }
    }

    /// A color token outside any document, keyed by its name.
    pub fn color(name: impl Into<String>, color: Rgba) -> Self {
        let name = name.into();
        Self::new(
            format!("color:{}", name),
            name,
            std::iter::empty(),
            TokenValue::Color(ColorValue {
                color,
                role: PaintRole::Fill,
                index: 0,
            }),
        )
    }

    /// A component token outside any document, keyed by its name.
    pub fn component(value: ComponentValue) -> Self {
        let name = value.name.clone();
        Self::new(
            format!("component:{}", name),
            name,
            std::iter::empty(),
            TokenValue::Component(value),
        )
    }

    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// Bucket and custom-property key: the kebab-cased name.
    ///
    /// Colors other than a node's first fill are qualified by role and
    /// position, so one `Card` node yields `card`, `card-2` and `card-stroke`.
    pub fn slug(&self) -> String {
        let mut slug = kebab_case(&self.name);
        if let TokenValue::Color(color) = &self.value {
            if color.role == PaintRole::Stroke {
                slug.push_str("-stroke");
            }
            if color.index > 0 {
                slug.push_str(&format!("-{}", color.index + 1));
            }
        }
        slug
    }

    pub fn as_color(&self) -> Option<&ColorValue> {
        match &self.value {
            TokenValue::Color(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_typography(&self) -> Option<&TypographyValue> {
        match &self.value {
            TokenValue::Typography(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_layout(&self) -> Option<&LayoutValue> {
        match &self.value {
            TokenValue::Spacing(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_effect(&self) -> Option<&EffectValue> {
        match &self.value {
            TokenValue::Shadow(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&ComponentValue> {
        match &self.value {
            TokenValue::Component(v) => Some(v),
            _ => None,
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", &self.kind())?;
        state.serialize_field("path", &self.path)?;
        match &self.value {
            TokenValue::Color(v) => state.serialize_field("value", v)?,
            TokenValue::Typography(v) => state.serialize_field("value", v)?,
            TokenValue::Spacing(v) => state.serialize_field("value", v)?,
            TokenValue::Shadow(v) => state.serialize_field("value", v)?,
            TokenValue::Component(v) => state.serialize_field("value", v)?,
        }
        match &self.metadata {
            Some(metadata) => state.serialize_field("metadata", metadata)?,
            None => state.skip_field("metadata")?,
        }
        state.end()
    }
}

/// Wire shape of a token before its payload is typed by `type`.
#[derive(Deserialize)]
struct TokenRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: TokenKind,
    #[serde(default)]
    path: TokenPath,
    value: serde_json::Value,
    #[serde(default)]
    metadata: Option<TokenMetadata>,
}

impl TryFrom<TokenRecord> for Token {
    type Error = serde_json::Error;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        let value = match record.kind {
            TokenKind::Color => TokenValue::Color(serde_json::from_value(record.value)?),
            TokenKind::Typography => TokenValue::Typography(serde_json::from_value(record.value)?),
            TokenKind::Spacing => TokenValue::Spacing(serde_json::from_value(record.value)?),
            TokenKind::Shadow => TokenValue::Shadow(serde_json::from_value(record.value)?),
            TokenKind::Component => TokenValue::Component(serde_json::from_value(record.value)?),
        };
        Ok(Self {
            id: record.id,
            name: record.name,
            path: record.path,
            value,
            metadata: record.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_wire_shape() {
        let token = Token::color("Primary", Rgba::rgba(0.1, 0.2, 0.3, 1.0));
        let value = serde_json::to_value(&token).unwrap();

        assert_eq!(value["type"], "color");
        assert_eq!(value["name"], "Primary");
        assert_eq!(value["value"]["r"], 0.1);
        assert_eq!(value["value"]["role"], "fill");
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_color_slug_carries_role_and_position() {
        let color = |role, index| {
            Token::new(
                format!("color:Card:{}:{}", role, index),
                "Card",
                std::iter::empty(),
                TokenValue::Color(ColorValue {
                    color: Rgba::rgb(1.0, 0.0, 0.0),
                    role: if role == "fill" { PaintRole::Fill } else { PaintRole::Stroke },
                    index,
                }),
            )
        };

        assert_eq!(color("fill", 0).slug(), "card");
        assert_eq!(color("fill", 1).slug(), "card-2");
        assert_eq!(color("stroke", 0).slug(), "card-stroke");
        assert_eq!(color("stroke", 2).slug(), "card-stroke-3");
        assert_eq!(Token::component(ComponentValue::new("Card")).slug(), "card");
    }

    #[test]
    fn test_token_deserializes_by_type() {
        let token: Token = serde_json::from_value(json!({
            "id": "button-1",
            "name": "Button",
            "type": "component",
            "path": ["components"],
            "value": {
                "id": "1",
                "name": "Button",
                "key": "btn-1",
                "remote": false,
                "styles": {
                    "layout": {
                        "layoutMode": "HORIZONTAL",
                        "layoutConstraint": {"vertical": "TOP", "horizontal": "LEFT"}
                    }
                }
            }
        }))
        .unwrap();

        let component = token.as_component().unwrap();
        assert_eq!(component.key, "btn-1");
        assert_eq!(component.styles.layout.layout_mode, LayoutMode::Horizontal);
        assert!(component.styles.fills.is_empty());
    }

    #[test]
    fn test_layout_alias() {
        let token: Token = serde_json::from_value(json!({
            "id": "layout-card",
            "name": "Card",
            "type": "layout",
            "value": {"layoutMode": "VERTICAL", "itemSpacing": 12}
        }))
        .unwrap();
        assert_eq!(token.kind(), TokenKind::Spacing);
        assert_eq!(token.as_layout().unwrap().item_spacing, Some(12.0));
    }

    #[test]
    fn test_token_json_round_trip() {
        let mut token = Token::color("Accent", Rgba::rgb(1.0, 0.5, 0.0));
        token.metadata = Some(TokenMetadata {
            is_component: false,
            is_reused: true,
            frequency: 3,
        });
        let text = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&text).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn test_typography_defaults() {
        let typography = TypographyValue::from_style(&TextStyle {
            font_size: Some(24.0),
            ..Default::default()
        });
        assert_eq!(typography.font_family, "");
        assert_eq!(typography.font_weight, 400.0);
        assert_eq!(typography.font_size, 24.0);
        assert_eq!(typography.line_height, LineHeight::Number(1.2));
        assert_eq!(typography.text_case, TextCase::Original);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("layout".parse::<TokenKind>().unwrap(), TokenKind::Spacing);
        assert!("gradient".parse::<TokenKind>().is_err());
    }
}
