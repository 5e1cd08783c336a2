//! Naming rules shared by every emitter.
//!
//! All stylesheet keys, class names and identifiers are derived from token and
//! component display names through these functions, so the same name always maps
//! to the same slug across the style backend, the framework generators and the
//! exporter.

use convert_case::{Case, Casing};
use regex::Regex;
use std::sync::OnceLock;

fn case_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([\p{Ll}\p{Nd}])(\p{Lu})").expect("valid regex"))
}

/// Anything that cannot continue an identifier.
fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}]+").expect("valid regex"))
}

fn identifier_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{L}\p{Nl}]").expect("valid regex"))
}

/// Lower-cased, hyphenated form of a display name.
///
/// `"Primary Button"` and `"PrimaryButton"` both become `"primary-button"`.
/// Letters and digits of any script are kept. A name with none of them is
/// spelled out by code point (`"🔥"` becomes `"u1f525"`), and a blank name
/// becomes `"unnamed"`.
pub fn kebab_case(name: &str) -> String {
    let split = case_boundary().replace_all(name, "$1-$2");
    let hyphenated = separators().replace_all(&split, "-");
    let slug = hyphenated.trim_matches('-').to_lowercase();
    if !slug.is_empty() {
        return slug;
    }

    let spelled: Vec<String> = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| format!("u{:x}", c as u32))
        .collect();
    if spelled.is_empty() {
        "unnamed".to_string()
    } else {
        spelled.join("-")
    }
}

/// Markup class name for a component. Same rule as [`kebab_case`].
pub fn class_name(name: &str) -> String {
    kebab_case(name)
}

/// Framework tag/selector name: the kebab-cased name behind a fixed prefix.
pub fn selector_name(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, kebab_case(name))
}

/// camelCase identifier. Guarded with an underscore unless it starts with a letter.
pub fn camel_case(name: &str) -> String {
    guard_identifier(kebab_case(name).from_case(Case::Kebab).to_case(Case::Camel))
}

/// PascalCase identifier. Guarded with an underscore unless it starts with a letter.
pub fn pascal_case(name: &str) -> String {
    guard_identifier(kebab_case(name).from_case(Case::Kebab).to_case(Case::Pascal))
}

fn guard_identifier(ident: String) -> String {
    if identifier_start().is_match(&ident) {
        ident
    } else {
        format!("_{}", ident)
    }
}

/// Format a number the way stylesheet values expect: shortest form, no
/// trailing `.0` on integral values.
pub fn number(value: f64) -> String {
    if value == 0.0 {
        // Avoids printing `-0`.
        return "0".to_string();
    }
    value.to_string()
}
