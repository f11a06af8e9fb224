//! One-shot "reveal when scrolled into view" latches.
//!
//! Every animated block on the page plays its entrance exactly once. The
//! browser reports intersection changes; the latch turns the first positive
//! one into a `Pending -> Shown` transition and ignores everything after.

use serde::{Deserialize, Serialize};

/// Observer settings for a revealed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Pixels to shrink the viewport by before an element counts as visible.
    /// `100` means the element must be 100px inside the viewport edge.
    pub margin_px: u32,
}

impl RevealOptions {
    /// Section headers and whole sections.
    pub const SECTION: Self = Self { margin_px: 100 };
    /// Cards and the footer.
    pub const CARD: Self = Self { margin_px: 50 };
    /// Counters and small inline blocks; any overlap counts.
    pub const IMMEDIATE: Self = Self { margin_px: 0 };

    /// Value for `IntersectionObserverInit.rootMargin`.
    pub fn root_margin(&self) -> String {
        if self.margin_px == 0 {
            "0px".to_string()
        } else {
            format!("-{}px", self.margin_px)
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::SECTION
    }
}

/// Latch state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet scrolled into view
    #[default]
    Pending,
    /// Has been seen; stays here forever
    Shown,
}

/// A latch that fires on the first intersecting observation and never re-arms.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    /// Fresh, un-fired latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one observation. Returns `true` only on the transition to [`RevealState::Shown`].
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (self.state, intersecting) {
            (RevealState::Pending, true) => {
                self.state = RevealState::Shown;
                true
            }
            _ => false,
        }
    }

    /// Whether the latch has fired.
    pub fn is_shown(&self) -> bool {
        self.state == RevealState::Shown
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_intersection() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_shown());

        assert!(latch.observe(true));
        assert!(latch.is_shown());

        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert_eq!(latch.state(), RevealState::Shown);
    }

    #[test]
    fn leaving_viewport_does_not_rearm() {
        let mut latch = RevealLatch::new();
        latch.observe(true);
        latch.observe(false);
        assert!(latch.is_shown());
        assert!(!latch.observe(true));
    }

    #[test]
    fn root_margin_is_negative_inset() {
        assert_eq!(RevealOptions::SECTION.root_margin(), "-100px");
        assert_eq!(RevealOptions::CARD.root_margin(), "-50px");
        assert_eq!(RevealOptions::IMMEDIATE.root_margin(), "0px");
    }
}
