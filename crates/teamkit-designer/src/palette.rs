//! Recent-colors history.
//!
//! A bounded most-recently-used list of hex colors. Capacity is seven,
//! duplicates are collapsed, and applying a color that is already present
//! moves it to the front without growing the list. The list seeds three
//! defaults on first use; users may also manually add a swatch (kept in
//! place if already present) or remove an entry.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use teamkit_core::color;

/// Maximum number of remembered colors.
pub const CAPACITY: usize = 7;

/// Most-recently-used color list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentColors {
    colors: SmallVec<[String; CAPACITY]>,
}

impl Default for RecentColors {
    /// Seeds the three default swatches.
    fn default() -> Self {
        let mut colors = SmallVec::new();
        colors.push(color::WHITE.to_string());
        colors.push(color::INK.to_string());
        colors.push(color::ACCENT.to_string());
        Self { colors }
    }
}

impl RecentColors {
    /// An empty list, with no seeded defaults.
    pub fn empty() -> Self {
        Self {
            colors: SmallVec::new(),
        }
    }

    /// Records an applied color: any existing occurrence is removed, the
    /// color is prepended, and the list is truncated to capacity.
    pub fn record(&mut self, hex: &str) {
        self.colors.retain(|c| c != hex);
        self.colors.insert(0, hex.to_string());
        self.colors.truncate(CAPACITY);
    }

    /// Manually adds a swatch. Ignored when already present - a manual add
    /// does not reshuffle the recency order the way [`record`](Self::record)
    /// does.
    pub fn add(&mut self, hex: &str) {
        if self.colors.iter().any(|c| c == hex) {
            return;
        }
        self.colors.insert(0, hex.to_string());
        self.colors.truncate(CAPACITY);
    }

    /// Manually removes a swatch. Unknown values are ignored.
    pub fn remove(&mut self, hex: &str) {
        self.colors.retain(|c| c != hex);
    }

    /// The colors, most recent first.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
