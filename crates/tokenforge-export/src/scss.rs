//! Nested stylesheet export: SCSS variables, with typography as maps.

use tokenforge_core::naming::{kebab_case, number};
use tokenforge_core::TokenSet;

/// Export a token set as SCSS variables.
///
/// Every section header is written even when its bucket is empty.
pub fn export(tokens: &TokenSet) -> String {
    let mut scss = String::from("// Design Tokens\n\n");

    scss.push_str("// Colors\n");
    for (name, value) in &tokens.colors {
        scss.push_str(&format!("$color-{}: {};\n", kebab_case(name), value));
    }

    scss.push_str("\n// Typography\n");
    for (name, value) in &tokens.typography {
        scss.push_str(&format!("$typography-{}: (\n", kebab_case(name)));
        scss.push_str(&format!("  font-family: {},\n", value.font_family));
        scss.push_str(&format!("  font-size: {},\n", value.font_size));
        scss.push_str(&format!("  font-weight: {},\n", value.font_weight));
        scss.push_str(&format!("  line-height: {},\n", number(value.line_height)));
        scss.push_str(&format!("  letter-spacing: {}\n", value.letter_spacing));
        scss.push_str(");\n");
    }

    scss.push_str("\n// Spacing\n");
    for (name, value) in &tokens.spacing {
        scss.push_str(&format!("$spacing-{}: {};\n", kebab_case(name), value));
    }

    scss.push_str("\n// Shadows\n");
    for (name, value) in &tokens.shadows {
        scss.push_str(&format!("$shadow-{}: {};\n", kebab_case(name), value));
    }

    scss
}
