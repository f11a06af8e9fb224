//! Autoplay policy for the carousel.
//!
//! [`AutoplayConfig`] is shared by every host: the browser page arms a
//! `setInterval` from it, the `runtime` feature provides [`Autoplay`], a
//! tokio task that owns a [`RotationController`](crate::RotationController)
//! and drives it on the same schedule.
//!
//! # Manual navigation
//!
//! The timer fires on a fixed cadence. Whether a manual next/previous/jump
//! pushes the next automatic tick back is a policy choice, see
//! [`ManualNavigation`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[cfg(feature = "runtime")]
mod driver;

#[cfg(feature = "runtime")]
pub use driver::{Autoplay, AutoplayError, AutoplayStatus};

/// How a manual carousel action interacts with the autoplay timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualNavigation {
    /// Manual and automatic moves compose additively; the timer keeps its cadence.
    #[default]
    Independent,
    /// A manual move re-arms the timer, so the next automatic tick is a full interval away.
    Restart,
}

impl ManualNavigation {
    /// Whether a manual move should re-arm the timer.
    pub fn restarts_timer(self) -> bool {
        matches!(self, ManualNavigation::Restart)
    }
}

/// Timer settings for automatic rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    /// Milliseconds between automatic advances
    pub interval_ms: u64,
    /// Interaction between manual moves and the timer
    pub manual_navigation: ManualNavigation,
}

impl AutoplayConfig {
    /// Interval used by the published site.
    pub const DEFAULT_INTERVAL_MS: u64 = 6000;

    /// Smallest interval a host will arm; zero would spin.
    pub const MIN_INTERVAL_MS: u64 = 100;

    /// Largest delay a browser timer accepts (a signed 32-bit millisecond count).
    pub const MAX_INTERVAL_MS: u64 = i32::MAX as u64;

    /// Timer period, clamped to
    /// [`Self::MIN_INTERVAL_MS`]..=[`Self::MAX_INTERVAL_MS`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.clamp(Self::MIN_INTERVAL_MS, Self::MAX_INTERVAL_MS))
    }

    /// Number of automatic advances due after `elapsed` with no manual action.
    pub fn ticks_within(&self, elapsed: Duration) -> u64 {
        (elapsed.as_millis() / self.interval().as_millis()) as u64
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            manual_navigation: ManualNavigation::default(),
        }
    }
}

/// The interval a host currently has armed.
///
/// Hosts with handle-based timers (`setInterval`) keep the handle here. Every
/// handle that leaves the slot, through [`arm`](Self::arm) replacing it or
/// [`disarm`](Self::disarm) taking it, is handed back exactly once for the
/// host to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> TimerSlot<H> {
    /// Empty slot.
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Store a freshly armed timer, returning the one it replaces.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.handle.replace(handle)
    }

    /// Take the armed timer out. Later calls return `None`.
    pub fn disarm(&mut self) -> Option<H> {
        self.handle.take()
    }

    /// Whether a timer is armed.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Browser-style host: numbered interval handles, a log of cleared ones.
    struct IntervalHost {
        config: AutoplayConfig,
        slot: TimerSlot<u32>,
        next_handle: u32,
        cleared: Vec<u32>,
    }

    impl IntervalHost {
        fn mount(config: AutoplayConfig) -> Self {
            let mut host = Self {
                config,
                slot: TimerSlot::new(),
                next_handle: 1,
                cleared: Vec::new(),
            };
            host.arm();
            host
        }

        fn arm(&mut self) {
            let handle = self.next_handle;
            self.next_handle += 1;
            if let Some(previous) = self.slot.arm(handle) {
                self.cleared.push(previous);
            }
        }

        fn manual_move(&mut self) {
            if self.config.manual_navigation.restarts_timer() {
                self.arm();
            }
        }

        fn unmount(&mut self) {
            if let Some(handle) = self.slot.disarm() {
                self.cleared.push(handle);
            }
        }
    }

    #[test]
    fn independent_manual_moves_keep_the_interval() {
        let mut host = IntervalHost::mount(AutoplayConfig::default());
        host.manual_move();
        host.manual_move();

        assert_eq!(host.next_handle, 2);
        assert!(host.cleared.is_empty());
        assert!(host.slot.is_armed());
    }

    #[test]
    fn restart_manual_moves_replace_the_interval() {
        let mut host = IntervalHost::mount(AutoplayConfig {
            manual_navigation: ManualNavigation::Restart,
            ..Default::default()
        });
        host.manual_move();
        host.manual_move();

        assert_eq!(host.cleared, vec![1, 2]);
        assert!(host.slot.is_armed());
    }

    #[test]
    fn unmount_clears_the_interval_exactly_once() {
        let mut host = IntervalHost::mount(AutoplayConfig {
            manual_navigation: ManualNavigation::Restart,
            ..Default::default()
        });
        host.manual_move();
        host.unmount();
        host.unmount();

        assert_eq!(host.cleared, vec![1, 2]);
        assert!(!host.slot.is_armed());
    }

    #[test]
    fn default_matches_published_site() {
        let config = AutoplayConfig::default();
        assert_eq!(config.interval(), Duration::from_millis(6000));
        assert!(!config.manual_navigation.restarts_timer());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = AutoplayConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.interval(), Duration::from_millis(100));
    }

    #[test]
    fn oversized_interval_fits_a_browser_timer() {
        let config = AutoplayConfig {
            interval_ms: 3_000_000_000,
            ..Default::default()
        };
        let millis = config.interval().as_millis();
        assert_eq!(millis, i32::MAX as u128);
        assert!(i32::try_from(millis).is_ok());
    }

    #[test]
    fn ticks_within_floors() {
        let config = AutoplayConfig::default();
        assert_eq!(config.ticks_within(Duration::from_millis(5_999)), 0);
        assert_eq!(config.ticks_within(Duration::from_millis(6_000)), 1);
        assert_eq!(config.ticks_within(Duration::from_millis(24_000)), 4);
        assert_eq!(config.ticks_within(Duration::from_millis(29_999)), 4);
    }
}
