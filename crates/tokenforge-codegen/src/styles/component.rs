//! Per-component stylesheet rules.

use indexmap::IndexMap;
use tokenforge_core::naming::number;
use tokenforge_core::{ComponentValue, EffectType, Paint};

const DEFAULT_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.1)";

/// Flat property map for one component: fill and stroke colors, then
/// typography, then stacked shadows.
pub fn component_declarations(component: &ComponentValue) -> IndexMap<&'static str, String> {
    let styles = &component.styles;
    let mut declarations = IndexMap::new();

    if let Some(color) = styles.fills.iter().find_map(Paint::solid_color) {
        declarations.insert("background-color", color.to_css_exact());
    }
    if let Some(color) = styles.strokes.iter().find_map(Paint::solid_color) {
        declarations.insert("border-color", color.to_css_exact());
    }

    if let Some(typography) = &styles.typography {
        if !typography.font_family.is_empty() {
            declarations.insert("font-family", typography.font_family.clone());
        }
        declarations.insert("font-size", format!("{}px", number(typography.font_size)));
        declarations.insert("font-weight", number(typography.font_weight));
        declarations.insert(
            "letter-spacing",
            format!("{}px", number(typography.letter_spacing)),
        );
        declarations.insert("line-height", typography.line_height.to_css());
        declarations.insert(
            "text-decoration",
            typography.text_decoration.to_css().to_string(),
        );
        declarations.insert("text-transform", typography.text_case.to_css().to_string());
    }

    let shadows: Vec<String> = styles
        .effects
        .iter()
        .filter(|effect| effect.effect_type.is_shadow())
        .map(|effect| {
            let offset = effect.offset.unwrap_or_default();
            let color = effect
                .color
                .map(|c| c.to_css_exact())
                .unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_string());
            let inset = if effect.effect_type == EffectType::InnerShadow {
                "inset "
            } else {
                ""
            };
            format!(
                "{}{}px {}px {}px {}",
                inset,
                number(offset.x),
                number(offset.y),
                number(effect.radius),
                color
            )
        })
        .collect();
    if !shadows.is_empty() {
        declarations.insert("box-shadow", shadows.join(", "));
    }

    declarations
}

/// A plain rule block. Valid as both CSS and SCSS.
pub(super) fn to_rule(class: &str, declarations: &IndexMap<&'static str, String>) -> String {
    let mut lines = vec![format!(".{} {{", class)];
    for (property, value) in declarations {
        lines.push(format!("  {}: {};", property, value));
    }
    lines.push("}".to_string());
    super::finish(lines)
}

/// A rule applying Tailwind arbitrary-property utilities.
pub(super) fn to_apply_rule(class: &str, declarations: &IndexMap<&'static str, String>) -> String {
    let mut lines = vec![format!(".{} {{", class)];
    if !declarations.is_empty() {
        let utilities: Vec<String> = declarations
            .iter()
            .map(|(property, value)| format!("[{}:{}]", property, value.replace(' ', "_")))
            .collect();
        lines.push(format!("  @apply {};", utilities.join(" ")));
    }
    lines.push("}".to_string());
    super::finish(lines)
}
