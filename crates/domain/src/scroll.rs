//! Scroll-to-top visibility rule.

use serde::{Deserialize, Serialize};

/// Vertical offset, in CSS pixels, past which the scroll-to-top control shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrollThreshold(pub f64);

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self(300.0)
    }
}

impl ScrollThreshold {
    /// Whether the control is visible at `offset`. The boundary itself is hidden.
    #[must_use]
    pub fn is_visible(self, offset: f64) -> bool {
        offset > self.0
    }
}
