//! One-shot fade-in bookkeeping.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

use crate::config::SiteConfig;

/// `IntersectionObserver` options for the fade-in effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// Shrinks the root's bottom edge, so elements reveal slightly later.
    pub bottom_margin_px: i32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.1, bottom_margin_px: 50 }
    }
}

impl RevealOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self { threshold: config.reveal_threshold, bottom_margin_px: config.reveal_bottom_margin_px }
    }

    /// CSS margin string in `top right bottom left` order.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// Tracks which observed elements have already been revealed.
///
/// Elements are keyed by their observation index.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    /// Record an intersection report. Returns `true` the first time an
    /// intersecting report arrives for `index`; the caller then adds the
    /// reveal class and stops observing.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
