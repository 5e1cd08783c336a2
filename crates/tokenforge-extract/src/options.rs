//! Extraction options.

use serde::{Deserialize, Serialize};

/// Options controlling what an extraction walk records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    /// Record LAYER_BLUR and BACKGROUND_BLUR effects as effect tokens.
    pub include_blur: bool,
    /// Fill each token's usage metadata from name-occurrence counts.
    pub usage_metadata: bool,
}

impl ExtractOptions {
    /// Shallow extraction: shadows only, no metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep extraction: blur effects and usage metadata included.
    pub fn deep() -> Self {
        Self {
            include_blur: true,
            usage_metadata: true,
        }
    }

    pub fn with_blur(mut self, include: bool) -> Self {
        self.include_blur = include;
        self
    }

    pub fn with_usage_metadata(mut self, enabled: bool) -> Self {
        self.usage_metadata = enabled;
        self
    }
}
