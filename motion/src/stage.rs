//! Slides mounted while the carousel animates.
//!
//! The current slide is always on stage. After a move, the slide that left
//! stays mounted for one [`SLIDE_DURATION`] so its exit can play, and the host
//! hands it back to [`Stage::retire`] once that time is up.

use crate::carousel::{Slide, Transition};
use crate::variants::{SLIDE_DURATION, SlidePose, luxury_ease_css};

/// Whether a mounted slide is arriving or leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Plays from [`SlidePose::enter`] to the center
    Enter,
    /// Plays from the center to [`SlidePose::exit`]
    Exit,
}

impl Phase {
    /// Inline `style` that animates `slide` through this phase.
    ///
    /// Carries the far pose as `--slide-from` / `--slide-to` together with the
    /// shared duration and easing, so the stylesheet only names the keyframes.
    pub fn style(self, slide: Slide) -> String {
        let (var, pose) = match self {
            Phase::Enter => ("--slide-from", SlidePose::enter(slide.direction)),
            Phase::Exit => ("--slide-to", SlidePose::exit(slide.direction)),
        };
        format!(
            "{var}: {}; animation-duration: {}ms; animation-timing-function: {};",
            pose.transform_css(),
            SLIDE_DURATION.as_millis(),
            luxury_ease_css()
        )
    }
}

/// The slide still playing its exit, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stage {
    outgoing: Option<Slide>,
}

impl Stage {
    /// Empty stage.
    pub const fn new() -> Self {
        Self { outgoing: None }
    }

    /// Record a carousel move.
    ///
    /// Returns the slide that left, which the host passes to [`Self::retire`]
    /// after [`SLIDE_DURATION`]. A no-op move leaves nothing to retire.
    pub fn settle(&mut self, transition: Transition) -> Option<Slide> {
        if transition.is_noop() {
            return None;
        }
        let leaving = Slide {
            index: transition.from,
            direction: transition.direction,
        };
        self.outgoing = Some(leaving);
        Some(leaving)
    }

    /// Unmount `leaving` once its exit has played.
    ///
    /// A slide that has since been replaced by a newer exit is left alone.
    /// Returns whether anything was removed.
    pub fn retire(&mut self, leaving: Slide) -> bool {
        if self.outgoing == Some(leaving) {
            self.outgoing = None;
            true
        } else {
            false
        }
    }

    /// The slide still leaving.
    pub fn outgoing(&self) -> Option<Slide> {
        self.outgoing
    }

    /// Everything to mount, the incoming `current` slide first.
    pub fn slides(&self, current: Slide) -> Vec<(Slide, Phase)> {
        let mut slides = vec![(current, Phase::Enter)];
        slides.extend(self.outgoing.map(|leaving| (leaving, Phase::Exit)));
        slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Direction, RotationController};
    use pretty_assertions::assert_eq;

    fn four() -> RotationController<u8> {
        RotationController::new(vec![0, 1, 2, 3]).expect("non-empty")
    }

    #[test]
    fn advance_keeps_previous_slide_for_its_exit() {
        let mut carousel = four();
        let mut stage = Stage::new();

        let leaving = stage.settle(carousel.advance());
        let expected = Slide {
            index: 0,
            direction: Direction::Forward,
        };
        assert_eq!(leaving, Some(expected));
        assert_eq!(
            stage.slides(carousel.slide()),
            vec![(carousel.slide(), Phase::Enter), (expected, Phase::Exit)]
        );

        assert!(stage.retire(expected));
        assert_eq!(stage.slides(carousel.slide()), vec![(carousel.slide(), Phase::Enter)]);
    }

    #[test]
    fn stale_retire_keeps_newer_exit() {
        let mut carousel = four();
        let mut stage = Stage::new();

        let first = stage.settle(carousel.advance()).expect("moved");
        let second = stage.settle(carousel.retreat()).expect("moved");

        assert!(!stage.retire(first));
        assert_eq!(stage.outgoing(), Some(second));
        assert!(stage.retire(second));
        assert_eq!(stage.outgoing(), None);
    }

    #[test]
    fn noop_jump_leaves_nothing_to_retire() {
        let mut carousel = four();
        let mut stage = Stage::new();

        let transition = carousel.jump_to(0).expect("in range");
        assert_eq!(stage.settle(transition), None);
        assert_eq!(stage.outgoing(), None);
    }

    #[test]
    fn styles_carry_shared_timing() {
        let slide = Slide {
            index: 1,
            direction: Direction::Forward,
        };
        assert_eq!(
            Phase::Enter.style(slide),
            "--slide-from: translateX(300px) rotateY(15deg); animation-duration: 600ms; \
             animation-timing-function: cubic-bezier(0.77, 0, 0.175, 1);"
        );
        assert_eq!(
            Phase::Exit.style(slide),
            "--slide-to: translateX(-300px) rotateY(-15deg); animation-duration: 600ms; \
             animation-timing-function: cubic-bezier(0.77, 0, 0.175, 1);"
        );
    }
}
