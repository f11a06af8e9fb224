//! # curv-motion
//!
//! State machines and motion math behind the CURV Tiles & Artificial landing page.
//!
//! Nothing in this crate touches the DOM. The landing crate feeds it browser
//! signals (timer ticks, intersection events, bounding rects, frame times) and
//! renders whatever it answers, which keeps every behaviour testable on the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use curv_motion::carousel::{Direction, RotationController};
//!
//! let mut carousel = RotationController::new(vec!["a", "b", "c", "d"]).unwrap();
//!
//! carousel.advance();
//! carousel.advance();
//! assert_eq!(carousel.index(), 2);
//!
//! carousel.retreat();
//! assert_eq!(carousel.index(), 1);
//! assert_eq!(carousel.direction(), Direction::Backward);
//! ```
//!
//! ## Architecture
//!
//! - [`carousel`] - the testimonial rotation controller
//! - [`autoplay`] - timer policy, plus a tokio-hosted driver behind the `runtime` feature
//! - [`reveal`] - "show once when scrolled into view" latches
//! - [`scroll`] - scroll progress and linear value transforms (parallax)
//! - [`stage`] - which slides stay mounted while a transition plays
//! - [`tween`] - count-up and typewriter animations
//! - [`variants`] - slide poses and easing for carousel transitions

#![warn(missing_docs)]

pub mod autoplay;
pub mod carousel;
pub mod reveal;
pub mod scroll;
pub mod stage;
pub mod tween;
pub mod variants;

pub use autoplay::{AutoplayConfig, ManualNavigation, TimerSlot};
pub use carousel::{CarouselError, Direction, RotationController, Slide, Transition};
pub use reveal::{RevealLatch, RevealOptions};
pub use stage::{Phase, Stage};
