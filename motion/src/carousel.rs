//! Rotation controller for the testimonial carousel.
//!
//! A finite cyclic state machine over `0..N`. Every index is reachable from
//! every other one in a single [`RotationController::jump_to`], and the
//! wrap-around arithmetic is defined for every state, so once a controller
//! exists none of its transitions can fail except a jump outside the list.
//!
//! The controller does not know about timers or rendering. Hosts call
//! [`advance`](RotationController::advance) from their interval and read back
//! a [`Slide`] to decide what to show and which way to animate it.

use thiserror::Error;
use tracing::debug;

/// Errors raised by [`RotationController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A carousel needs at least one item to rotate through.
    #[error("carousel requires at least one item")]
    Empty,
    /// `jump_to` was asked for an index the list does not have.
    #[error("index {index} is out of range for a carousel of {len} items")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of items in the carousel
        len: usize,
    },
}

/// Which way the carousel last moved.
///
/// Only affects the visual vector of the transition, never index arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices (next / autoplay)
    #[default]
    Forward,
    /// Towards lower indices (previous)
    Backward,
}

impl Direction {
    /// `1.0` for forward, `-1.0` for backward. Multiplies pose offsets.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// What the rendering layer needs to know: which item is current and how it arrived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slide {
    /// Index of the current item
    pub index: usize,
    /// Direction of the move that made it current
    pub direction: Direction,
}

/// Result of a single carousel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index before the operation
    pub from: usize,
    /// Index after the operation
    pub to: usize,
    /// Direction recorded by the operation
    pub direction: Direction,
}

impl Transition {
    /// True when the index did not change (single-item carousel, or a jump to
    /// the current item). Hosts keyed by index skip the entry animation.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// The slide that is current after this transition.
    pub fn incoming(&self) -> Slide {
        Slide {
            index: self.to,
            direction: self.direction,
        }
    }
}

/// Cycles through a fixed, non-empty, ordered list of items.
#[derive(Debug, Clone)]
pub struct RotationController<T> {
    items: Vec<T>,
    index: usize,
    direction: Direction,
}

impl<T> RotationController<T> {
    /// Build a controller positioned on the first item.
    ///
    /// Rejects an empty list up front so the modulo arithmetic below can
    /// never divide by zero.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            index: 0,
            direction: Direction::default(),
        })
    }

    /// Number of items. Always at least one.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Index of the current item, always in `0..count()`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Direction of the most recent operation.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Snapshot for the rendering layer.
    pub fn slide(&self) -> Slide {
        Slide {
            index: self.index,
            direction: self.direction,
        }
    }

    /// The current item.
    pub fn current(&self) -> &T {
        // index < items.len() is maintained by every mutator
        &self.items[self.index]
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All items in rotation order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Move to the next item, wrapping after the last one.
    pub fn advance(&mut self) -> Transition {
        let to = (self.index + 1) % self.items.len();
        self.move_to(to, Direction::Forward)
    }

    /// Move to the previous item, wrapping before the first one.
    pub fn retreat(&mut self) -> Transition {
        let len = self.items.len();
        let to = (self.index + len - 1) % len;
        self.move_to(to, Direction::Backward)
    }

    /// Jump straight to `target`.
    ///
    /// Direction is forward when `target` is past the current index and
    /// backward otherwise (including a jump to the current index). An
    /// out-of-range target leaves the controller untouched.
    pub fn jump_to(&mut self, target: usize) -> Result<Transition, CarouselError> {
        let len = self.items.len();
        if target >= len {
            return Err(CarouselError::IndexOutOfRange { index: target, len });
        }
        let direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.move_to(target, direction))
    }

    fn move_to(&mut self, to: usize, direction: Direction) -> Transition {
        let transition = Transition {
            from: self.index,
            to,
            direction,
        };
        self.index = to;
        self.direction = direction;
        debug!(from = transition.from, to, ?direction, "carousel moved");
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn four() -> RotationController<u32> {
        RotationController::new(vec![1, 2, 3, 4]).expect("non-empty")
    }

    #[test]
    fn rejects_empty_list() {
        let err = RotationController::<u32>::new(vec![]).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn starts_on_first_item_moving_forward() {
        let carousel = four();
        assert_eq!(carousel.index(), 0);
        assert_eq!(*carousel.current(), 1);
        assert_eq!(carousel.slide(), Slide::default());
    }

    #[test]
    fn advance_wraps_and_retreat_wraps_back() {
        let mut carousel = four();
        carousel.advance();
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 3);

        carousel.advance();
        assert_eq!(carousel.index(), 0);

        carousel.retreat();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn advance_and_retreat_are_inverses() {
        let mut carousel = four();
        carousel.jump_to(2).unwrap();

        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), Direction::Backward);

        carousel.retreat();
        carousel.advance();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        for len in 1..=6usize {
            let mut carousel = RotationController::new((0..len).collect::<Vec<_>>()).unwrap();
            // deterministic pseudo-random walk
            let mut seed = 0x2545_f491_u32.wrapping_add(len as u32);
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    carousel.advance();
                } else {
                    carousel.retreat();
                }
                assert!(carousel.index() < len);
                assert_eq!(*carousel.current(), carousel.index());
            }
        }
    }

    #[test]
    fn jump_to_sets_exact_index_from_anywhere() {
        let mut carousel = four();
        for start in 0..4 {
            for target in 0..4 {
                carousel.jump_to(start).unwrap();
                carousel.jump_to(target).unwrap();
                assert_eq!(carousel.index(), target);
            }
        }
    }

    #[test]
    fn jump_direction_follows_target_position() {
        let mut carousel = four();
        let t = carousel.jump_to(2).unwrap();
        assert_eq!(t.direction, Direction::Forward);
        assert_eq!(carousel.direction(), Direction::Forward);

        let t = carousel.jump_to(0).unwrap();
        assert_eq!(t.direction, Direction::Backward);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn jump_to_current_index_is_a_noop_transition() {
        let mut carousel = four();
        carousel.jump_to(1).unwrap();
        let t = carousel.jump_to(1).unwrap();
        assert!(t.is_noop());
        assert_eq!(t.direction, Direction::Backward);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn out_of_range_jump_leaves_state_untouched() {
        let mut carousel = four();
        carousel.advance();
        let err = carousel.jump_to(4).unwrap_err();
        assert_eq!(err, CarouselError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(carousel.slide(), Slide { index: 1, direction: Direction::Forward });
    }

    #[test]
    fn single_item_carousel_never_moves() {
        let mut carousel = RotationController::new(vec!["only"]).unwrap();
        assert!(carousel.advance().is_noop());
        assert!(carousel.retreat().is_noop());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn transition_reports_incoming_slide() {
        let mut carousel = four();
        let t = carousel.retreat();
        assert_eq!(t.from, 0);
        assert_eq!(t.incoming(), Slide { index: 3, direction: Direction::Backward });
        assert!(!t.is_noop());
    }

    #[test]
    fn direction_helpers() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
    }
}
