//! Plain stylesheet export: one `:root` block of custom properties.

use tokenforge_core::naming::{kebab_case, number};
use tokenforge_core::TokenSet;

/// Export a token set as CSS custom properties.
pub fn export(tokens: &TokenSet) -> String {
    let mut css = String::from(":root {\n");

    for (name, value) in &tokens.colors {
        css.push_str(&format!("  --color-{}: {};\n", kebab_case(name), value));
    }

    for (name, value) in &tokens.typography {
        let prefix = format!("--typography-{}", kebab_case(name));
        css.push_str(&format!("  {}-font-family: {};\n", prefix, value.font_family));
        css.push_str(&format!("  {}-font-size: {};\n", prefix, value.font_size));
        css.push_str(&format!("  {}-font-weight: {};\n", prefix, value.font_weight));
        css.push_str(&format!("  {}-line-height: {};\n", prefix, number(value.line_height)));
        css.push_str(&format!("  {}-letter-spacing: {};\n", prefix, value.letter_spacing));
    }

    for (name, value) in &tokens.spacing {
        css.push_str(&format!("  --spacing-{}: {};\n", kebab_case(name), value));
    }

    for (name, value) in &tokens.shadows {
        css.push_str(&format!("  --shadow-{}: {};\n", kebab_case(name), value));
    }

    css.push_str("}\n");
    css
}
