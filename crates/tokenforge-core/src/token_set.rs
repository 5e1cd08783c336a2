//! Four-bucket grouped view of a token sequence.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::naming::number;
use crate::tokens::{EffectValue, Token, TokenValue, TypographyValue};
use crate::types::EffectType;

/// Tokens regrouped by kind, each bucket keyed by a kebab slug of the token name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSet {
    pub colors: IndexMap<String, String>,
    pub typography: IndexMap<String, TypographyEntry>,
    pub spacing: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
}

/// Flattened typography record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyEntry {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: u16,
    pub line_height: f64,
    pub letter_spacing: String,
}

impl From<&TypographyValue> for TypographyEntry {
    fn from(value: &TypographyValue) -> Self {
        Self {
            font_family: value.font_family.clone(),
            font_size: format!("{}px", number(value.font_size)),
            font_weight: value.font_weight.round().clamp(0.0, u16::MAX as f64) as u16,
            line_height: value.line_height.value(),
            letter_spacing: format!("{}px", number(value.letter_spacing)),
        }
    }
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce an extraction result into buckets.
    ///
    /// Later tokens with the same slug overwrite earlier ones, except shadows,
    /// which stack. Blur effects and component tokens have no bucket.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut set = Self::new();

        for token in tokens {
            let slug = token.slug();
            match &token.value {
                TokenValue::Color(color) => {
                    set.colors.insert(slug, color.color.to_css_rounded());
                }
                TokenValue::Typography(typography) => {
                    set.typography.insert(slug, typography.into());
                }
                TokenValue::Spacing(layout) => {
                    if let Some(spacing) = layout.item_spacing {
                        set.spacing
                            .insert(slug.clone(), format!("{}px", number(spacing)));
                    }
                    if let Some(padding) = layout.padding {
                        set.spacing
                            .insert(format!("{}-padding", slug), padding.to_css());
                    }
                }
                TokenValue::Shadow(effect) => {
                    if let Some(shadow) = shadow_shorthand(effect) {
                        set.shadows
                            .entry(slug)
                            .and_modify(|existing| {
                                existing.push_str(", ");
                                existing.push_str(&shadow);
                            })
                            .or_insert(shadow);
                    }
                }
                TokenValue::Component(_) => {}
            }
        }

        set
    }

    pub fn len(&self) -> usize {
        self.colors.len() + self.typography.len() + self.spacing.len() + self.shadows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `[inset ]Xpx Ypx Rpx Spx rgba(...)` with rounded channels, or `None` for blurs.
pub fn shadow_shorthand(effect: &EffectValue) -> Option<String> {
    if !effect.kind.is_shadow() {
        return None;
    }
    let offset = effect.offset.unwrap_or_default();
    let color = effect
        .color
        .map(|c| c.to_css_rounded())
        .unwrap_or_else(|| "rgba(0, 0, 0, 0.1)".to_string());
    let inset = if effect.kind == EffectType::InnerShadow {
        "inset "
    } else {
        ""
    };
    Some(format!(
        "{}{}px {}px {}px {}px {}",
        inset,
        number(offset.x),
        number(offset.y),
        number(effect.radius),
        number(effect.spread.unwrap_or(0.0)),
        color
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{ColorValue, LayoutValue, PaintRole};
    use crate::types::{Offset, Padding, Rgba};
    use pretty_assertions::assert_eq;

    fn token(name: &str, value: TokenValue) -> Token {
        Token::new(format!("t-{}", name), name, vec![name.to_string()], value)
    }

    #[test]
    fn test_reduce_colors_and_typography() {
        let tokens = vec![
            token(
                "Primary Button",
                TokenValue::Color(ColorValue {
                    color: Rgba::rgba(0.1, 0.2, 0.3, 1.0),
                    role: PaintRole::Fill,
                    index: 0,
                }),
            ),
            token("Heading", TokenValue::Typography(TypographyValue::default())),
        ];

        let set = TokenSet::from_tokens(&tokens);
        assert_eq!(set.colors["primary-button"], "rgba(26, 51, 77, 1)");

        let heading = &set.typography["heading"];
        assert_eq!(heading.font_size, "16px");
        assert_eq!(heading.font_weight, 400);
        assert_eq!(heading.line_height, 1.2);
        assert_eq!(heading.letter_spacing, "0px");
    }

    #[test]
    fn test_fill_and_stroke_on_one_node_both_survive() {
        let color = |role, index, rgba| {
            token(
                "Card",
                TokenValue::Color(ColorValue {
                    color: rgba,
                    role,
                    index,
                }),
            )
        };
        let tokens = vec![
            color(PaintRole::Fill, 0, Rgba::rgb(1.0, 0.0, 0.0)),
            color(PaintRole::Fill, 1, Rgba::rgb(0.0, 1.0, 0.0)),
            color(PaintRole::Stroke, 0, Rgba::rgb(0.0, 0.0, 1.0)),
        ];

        let set = TokenSet::from_tokens(&tokens);
        assert_eq!(set.colors.len(), 3);
        assert_eq!(set.colors["card"], "rgba(255, 0, 0, 1)");
        assert_eq!(set.colors["card-2"], "rgba(0, 255, 0, 1)");
        assert_eq!(set.colors["card-stroke"], "rgba(0, 0, 255, 1)");
    }

    #[test]
    fn test_reduce_spacing_from_layout() {
        let tokens = vec![token(
            "Card",
            TokenValue::Spacing(LayoutValue {
                padding: Some(Padding::uniform(16.0)),
                item_spacing: Some(8.0),
                ..Default::default()
            }),
        )];

        let set = TokenSet::from_tokens(&tokens);
        assert_eq!(set.spacing["card"], "8px");
        assert_eq!(set.spacing["card-padding"], "16px 16px 16px 16px");
    }

    #[test]
    fn test_reduce_stacks_shadows_and_skips_blur() {
        let shadow = |kind, y| EffectValue {
            kind,
            radius: 4.0,
            spread: None,
            offset: Some(Offset { x: 0.0, y }),
            color: Some(Rgba::rgba(0.0, 0.0, 0.0, 0.25)),
        };
        let tokens = vec![
            token("Card", TokenValue::Shadow(shadow(EffectType::DropShadow, 2.0))),
            token("Card", TokenValue::Shadow(shadow(EffectType::InnerShadow, 1.0))),
            token("Card", TokenValue::Shadow(shadow(EffectType::LayerBlur, 0.0))),
        ];

        let set = TokenSet::from_tokens(&tokens);
        assert_eq!(
            set.shadows["card"],
            "0px 2px 4px 0px rgba(0, 0, 0, 0.25), inset 0px 1px 4px 0px rgba(0, 0, 0, 0.25)"
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty() {
        assert!(TokenSet::from_tokens(&[]).is_empty());
    }
}
