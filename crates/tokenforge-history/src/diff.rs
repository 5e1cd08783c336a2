//! Recursive structural diff over serialized token sets.

use serde_json::{Map, Value};
use tokenforge_core::TokenSet;

use crate::error::Result;
use crate::version::TokenChange;

/// Compare two token sets key by key.
///
/// Objects present on both sides are descended into. Anything else present on
/// both sides (strings, numbers, arrays) is compared by value and reported as
/// modified when it differs.
pub fn diff_token_sets(old: &TokenSet, new: &TokenSet) -> Result<Vec<TokenChange>> {
    let old = serde_json::to_value(old)?;
    let new = serde_json::to_value(new)?;
    Ok(diff_values(&old, &new))
}

/// Diff two JSON values. Non-object roots compare as a single modified entry
/// with an empty path.
pub fn diff_values(old: &Value, new: &Value) -> Vec<TokenChange> {
    let mut changes = Vec::new();
    match (old, new) {
        (Value::Object(old), Value::Object(new)) => {
            diff_objects(old, new, &mut Vec::new(), &mut changes);
        }
        _ if old != new => changes.push(TokenChange::modified(Vec::new(), old.clone(), new.clone())),
        _ => {}
    }
    changes
}

fn diff_objects(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    path: &mut Vec<String>,
    changes: &mut Vec<TokenChange>,
) {
    for (key, old_value) in old {
        path.push(key.clone());
        match (old_value, new.get(key)) {
            (_, None) => changes.push(TokenChange::removed(path.clone(), old_value.clone())),
            (Value::Object(old_object), Some(Value::Object(new_object))) => {
                diff_objects(old_object, new_object, path, changes);
            }
            (_, Some(new_value)) if new_value != old_value => changes.push(TokenChange::modified(
                path.clone(),
                old_value.clone(),
                new_value.clone(),
            )),
            _ => {}
        }
        path.pop();
    }

    for (key, new_value) in new {
        if !old.contains_key(key) {
            path.push(key.clone());
            changes.push(TokenChange::added(path.clone(), new_value.clone()));
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::ChangeType;
    use proptest::prelude::*;
    use serde_json::json;
    use tokenforge_core::TypographyEntry;

    fn heading(size: &str) -> TypographyEntry {
        TypographyEntry {
            font_family: "Inter".into(),
            font_size: size.into(),
            font_weight: 700,
            line_height: 1.2,
            letter_spacing: "0px".into(),
        }
    }

    #[test]
    fn test_added_removed_modified() {
        let mut old = TokenSet::new();
        old.colors.insert("primary".into(), "rgba(0, 0, 255, 1)".into());
        old.colors.insert("legacy".into(), "rgba(1, 1, 1, 1)".into());
        let mut new = TokenSet::new();
        new.colors.insert("primary".into(), "rgba(255, 0, 0, 1)".into());
        new.spacing.insert("stack".into(), "8px".into());

        let changes = diff_token_sets(&old, &new).unwrap();
        assert_eq!(changes.len(), 3);

        let find = |kind: ChangeType| changes.iter().find(|c| c.change_type == kind).unwrap();
        assert_eq!(find(ChangeType::Modified).path, ["colors", "primary"]);
        assert_eq!(
            find(ChangeType::Modified).new_value,
            Some(json!("rgba(255, 0, 0, 1)"))
        );
        assert_eq!(find(ChangeType::Removed).path, ["colors", "legacy"]);
        assert_eq!(find(ChangeType::Added).path, ["spacing", "stack"]);
        assert_eq!(find(ChangeType::Added).old_value, None);
    }

    #[test]
    fn test_nested_typography_fields() {
        let mut old = TokenSet::new();
        old.typography.insert("heading".into(), heading("24px"));
        let mut new = TokenSet::new();
        new.typography.insert("heading".into(), heading("32px"));

        let changes = diff_token_sets(&old, &new).unwrap();
        assert_eq!(
            changes,
            vec![TokenChange::modified(
                vec!["typography".into(), "heading".into(), "fontSize".into()],
                json!("24px"),
                json!("32px"),
            )]
        );
    }

    #[test]
    fn test_arrays_compare_by_value() {
        let changes = diff_values(&json!({ "a": [1, 2] }), &json!({ "a": [1, 3] }));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Modified);
        assert_eq!(changes[0].path, ["a"]);

        assert!(diff_values(&json!({ "a": [1, 2] }), &json!({ "a": [1, 2] })).is_empty());
    }

    #[test]
    fn test_object_replaced_by_scalar() {
        let changes = diff_values(&json!({ "a": { "b": 1 } }), &json!({ "a": 2 }));
        assert_eq!(
            changes,
            vec![TokenChange::modified(vec!["a".into()], json!({ "b": 1 }), json!(2))]
        );
    }

    proptest! {
        #[test]
        fn test_self_diff_is_empty(
            colors in prop::collection::hash_map("[a-z]{1,6}", "[a-z0-9 ]{0,12}", 0..8),
            spacing in prop::collection::hash_map("[a-z]{1,6}", "[0-9]{1,3}px", 0..8),
        ) {
            let mut set = TokenSet::new();
            set.colors.extend(colors);
            set.spacing.extend(spacing);
            set.typography.insert("body".into(), heading("16px"));

            prop_assert!(diff_token_sets(&set, &set).unwrap().is_empty());
        }
    }
}
