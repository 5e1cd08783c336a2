//! Version snapshots and change records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokenforge_core::TokenSet;

/// An immutable token set snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub tokens: TokenSet,
    #[serde(default)]
    pub description: String,
    pub file_id: String,
}

impl Version {
    /// Snapshot `tokens` now, under a fresh random id.
    pub fn new(tokens: TokenSet, file_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            tokens,
            description: description.into(),
            file_id: file_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Modified,
    Removed,
}

/// One structural difference between two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenChange {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    /// Key chain from the bucket root, e.g. `["colors", "primary"]`.
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl TokenChange {
    pub fn added(path: Vec<String>, value: Value) -> Self {
        Self {
            change_type: ChangeType::Added,
            path,
            old_value: None,
            new_value: Some(value),
        }
    }

    pub fn removed(path: Vec<String>, value: Value) -> Self {
        Self {
            change_type: ChangeType::Removed,
            path,
            old_value: Some(value),
            new_value: None,
        }
    }

    pub fn modified(path: Vec<String>, old: Value, new: Value) -> Self {
        Self {
            change_type: ChangeType::Modified,
            path,
            old_value: Some(old),
            new_value: Some(new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ids_are_unique() {
        let a = Version::new(TokenSet::new(), "file", "");
        let b = Version::new(TokenSet::new(), "file", "");
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 32);
    }

    #[test]
    fn test_change_wire_shape() {
        let change = TokenChange::added(vec!["colors".into(), "primary".into()], "red".into());
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "added", "path": ["colors", "primary"], "newValue": "red" })
        );
    }
}
