//! Typed-data export: one `as const` object literal plus a derived type alias.

use indexmap::IndexMap;
use tokenforge_core::naming::{camel_case, number};
use tokenforge_core::{TokenSet, TypographyEntry};

/// Export a token set as a TypeScript module.
///
/// Empty buckets are left out of the literal.
pub fn export(tokens: &TokenSet) -> String {
    let mut buckets = Vec::new();

    if !tokens.colors.is_empty() {
        buckets.push(string_bucket("colors", &tokens.colors));
    }
    if !tokens.typography.is_empty() {
        buckets.push(typography_bucket(&tokens.typography));
    }
    if !tokens.spacing.is_empty() {
        buckets.push(string_bucket("spacing", &tokens.spacing));
    }
    if !tokens.shadows.is_empty() {
        buckets.push(string_bucket("shadows", &tokens.shadows));
    }

    let mut ts = String::from("export const tokens = {\n");
    ts.push_str(&buckets.join("\n"));
    ts.push_str("} as const;\n\n");
    ts.push_str("export type DesignTokens = typeof tokens;\n");
    ts
}

fn string_bucket(bucket: &str, entries: &IndexMap<String, String>) -> String {
    let mut block = format!("  {}: {{\n", bucket);
    for (name, value) in entries {
        block.push_str(&format!("    {}: {},\n", camel_case(name), quote(value)));
    }
    block.push_str("  },\n");
    block
}

fn typography_bucket(entries: &IndexMap<String, TypographyEntry>) -> String {
    let mut block = String::from("  typography: {\n");
    for (name, value) in entries {
        block.push_str(&format!("    {}: {{\n", camel_case(name)));
        block.push_str(&format!("      fontFamily: {},\n", quote(&value.font_family)));
        block.push_str(&format!("      fontSize: {},\n", quote(&value.font_size)));
        block.push_str(&format!("      fontWeight: {},\n", value.font_weight));
        block.push_str(&format!("      lineHeight: {},\n", number(value.line_height)));
        block.push_str(&format!("      letterSpacing: {},\n", quote(&value.letter_spacing)));
        block.push_str("    },\n");
    }
    block.push_str("  },\n");
    block
}

/// Single-quoted string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
