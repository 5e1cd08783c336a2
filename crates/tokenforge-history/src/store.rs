//! Snapshot persistence.
//!
//! History and the live token set are each stored as one serialized blob under
//! a well-known key.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Key of the serialized version list.
pub const HISTORY_KEY: &str = "token-history";

/// Key of the live token set.
pub const CURRENT_KEY: &str = "extracted-tokens";

/// Key/value blob storage for snapshots.
pub trait SnapshotStore {
    /// Read a blob, or `None` if nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a blob, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for_key(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.path_for_key(key), value)?;
        Ok(())
    }
}
