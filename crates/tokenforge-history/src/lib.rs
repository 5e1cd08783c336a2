//! Token set version history.
//!
//! Keeps a bounded, most-recent-first list of [`Version`] snapshots plus the
//! live token set in a [`SnapshotStore`], and computes structural diffs between
//! any two versions.

mod diff;
pub mod error;
mod history;
pub mod store;
mod version;

pub use diff::{diff_token_sets, diff_values};
pub use error::{HistoryError, Result};
pub use history::{TokenHistory, MAX_VERSIONS};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, CURRENT_KEY, HISTORY_KEY};
pub use version::{ChangeType, TokenChange, Version};
