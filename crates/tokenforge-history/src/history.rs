//! Bounded, most-recent-first version history.

use tokenforge_core::TokenSet;
use tracing::{debug, info};

use crate::diff::diff_token_sets;
use crate::error::{HistoryError, Result};
use crate::store::{SnapshotStore, CURRENT_KEY, HISTORY_KEY};
use crate::version::{TokenChange, Version};

/// Number of versions retained. Saving past the cap evicts the oldest.
pub const MAX_VERSIONS: usize = 10;

/// Version history and live token set over a snapshot store.
///
/// Every operation reads the store afresh, so several handles over the same
/// store see each other's writes. There is a single writer at a time.
pub struct TokenHistory<S> {
    store: S,
}

impl<S: SnapshotStore> TokenHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// All retained versions, most recent first.
    pub fn history(&self) -> Result<Vec<Version>> {
        match self.store.load(HISTORY_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Snapshot `tokens` as the newest version and return it.
    pub fn save_version(
        &mut self,
        tokens: TokenSet,
        file_id: &str,
        description: &str,
    ) -> Result<Version> {
        let mut history = self.history()?;
        let version = Version::new(tokens, file_id, description);
        history.insert(0, version.clone());
        history.truncate(MAX_VERSIONS);

        self.store.save(HISTORY_KEY, &serde_json::to_string(&history)?)?;
        debug!(id = %version.id, retained = history.len(), "saved token version");
        Ok(version)
    }

    pub fn get_version(&self, id: &str) -> Result<Version> {
        self.history()?
            .into_iter()
            .find(|version| version.id == id)
            .ok_or_else(|| HistoryError::VersionNotFound { id: id.to_string() })
    }

    pub fn latest_version(&self) -> Result<Option<Version>> {
        Ok(self.history()?.into_iter().next())
    }

    /// Structural changes going from version `from` to version `to`.
    pub fn compare_versions(&self, from: &str, to: &str) -> Result<Vec<TokenChange>> {
        let history = self.history()?;
        let find = |id: &str| {
            history
                .iter()
                .find(|version| version.id == id)
                .ok_or_else(|| HistoryError::VersionNotFound { id: id.to_string() })
        };
        let (old, new) = (find(from)?, find(to)?);
        diff_token_sets(&old.tokens, &new.tokens)
    }

    /// Make version `id` the live token set.
    ///
    /// The previous live set, if any, is first saved as a new version so the
    /// revert can itself be undone.
    pub fn revert_to_version(&mut self, id: &str) -> Result<TokenSet> {
        let target = self.get_version(id)?;

        if let Some(current) = self.current()? {
            let description = format!("Auto-saved before reverting to version {}", id);
            self.save_version(current, &target.file_id, &description)?;
        }

        self.set_current(&target.tokens)?;
        info!(id = %id, "reverted to token version");
        Ok(target.tokens)
    }

    /// The live token set, if one has been stored.
    pub fn current(&self) -> Result<Option<TokenSet>> {
        match self.store.load(CURRENT_KEY)? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    pub fn set_current(&mut self, tokens: &TokenSet) -> Result<()> {
        self.store.save(CURRENT_KEY, &serde_json::to_string(tokens)?)
    }
}
