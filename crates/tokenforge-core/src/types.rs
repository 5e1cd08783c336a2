//! Value types carried by design-document nodes and tokens.

use serde::{Deserialize, Serialize};

/// A color with normalized (0..1) channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Channels scaled to 0..255 without rounding.
    pub fn to_rgb255(&self) -> [f64; 3] {
        [self.r * 255.0, self.g * 255.0, self.b * 255.0]
    }

    /// Channels scaled to 0..255 and rounded half away from zero.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// `rgba(...)` with unrounded `channel*255` values. Alpha is kept verbatim.
    pub fn to_css_exact(&self) -> String {
        let [r, g, b] = self.to_rgb255();
        format!("rgba({}, {}, {}, {})", r, g, b, self.a)
    }

    /// `rgba(...)` with integer channels. Alpha is kept verbatim.
    pub fn to_css_rounded(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgba({}, {}, {}, {})", r, g, b, self.a)
    }
}

/// A paint entry from a node's `fills` or `strokes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Paint {
    /// A visible solid paint.
    pub fn solid(color: Rgba) -> Self {
        Self {
            paint_type: PaintType::Solid,
            color: Some(color),
            opacity: None,
            visible: None,
        }
    }

    /// The color of a solid paint, if this is one.
    pub fn solid_color(&self) -> Option<Rgba> {
        match self.paint_type {
            PaintType::Solid => self.color,
            _ => None,
        }
    }
}

/// Kind of paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    Video,
    #[serde(other)]
    Other,
}

/// A visual effect declared on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default)]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Effect {
    pub fn drop_shadow(x: f64, y: f64, radius: f64, color: Rgba) -> Self {
        Self {
            effect_type: EffectType::DropShadow,
            radius,
            spread: None,
            offset: Some(Offset { x, y }),
            color: Some(color),
            visible: None,
        }
    }

    pub fn inner_shadow(x: f64, y: f64, radius: f64, color: Rgba) -> Self {
        Self {
            effect_type: EffectType::InnerShadow,
            ..Self::drop_shadow(x, y, radius, color)
        }
    }

    pub fn blur(effect_type: EffectType, radius: f64) -> Self {
        Self {
            effect_type,
            radius,
            spread: None,
            offset: None,
            color: None,
            visible: None,
        }
    }
}

/// Kind of effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Other,
}

impl EffectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DropShadow => "DROP_SHADOW",
            Self::InnerShadow => "INNER_SHADOW",
            Self::LayerBlur => "LAYER_BLUR",
            Self::BackgroundBlur => "BACKGROUND_BLUR",
            Self::Other => "OTHER",
        }
    }

    /// Whether the kind name contains `SHADOW`.
    pub fn is_shadow(&self) -> bool {
        self.as_str().contains("SHADOW")
    }

    pub fn is_blur(&self) -> bool {
        matches!(self, Self::LayerBlur | Self::BackgroundBlur)
    }
}

/// Effect offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Auto-layout mode of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    Grid,
    #[serde(other)]
    Other,
}

/// Alignment constraint pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutConstraint {
    pub vertical: VerticalConstraint,
    pub horizontal: HorizontalConstraint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalConstraint {
    #[default]
    Top,
    Bottom,
    Center,
    Scale,
    TopBottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalConstraint {
    #[default]
    Left,
    Right,
    Center,
    Scale,
    LeftRight,
}

/// Padding on four sides, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    /// CSS shorthand, `top right bottom left`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Line height: either a bare multiplier or a measured value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineHeight {
    Number(f64),
    Measured { value: f64, unit: LineHeightUnit },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeightUnit {
    Pixels,
    Percent,
}

impl Default for LineHeight {
    fn default() -> Self {
        Self::Number(1.2)
    }
}

impl LineHeight {
    /// The numeric part, ignoring unit.
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Measured { value, .. } => *value,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Measured {
                value,
                unit: LineHeightUnit::Pixels,
            } => format!("{}px", value),
            Self::Measured {
                value,
                unit: LineHeightUnit::Percent,
            } => format!("{}%", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
    #[serde(other)]
    Other,
}

impl TextDecoration {
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::None | Self::Other => "none",
            Self::Underline => "underline",
            Self::Strikethrough => "line-through",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    #[serde(other)]
    Other,
}

impl TextCase {
    /// CSS `text-transform` value.
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Original | Self::Other => "none",
            Self::Upper => "uppercase",
            Self::Lower => "lowercase",
            Self::Title => "capitalize",
        }
    }
}

/// Text style block of a text node. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LineHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
}
