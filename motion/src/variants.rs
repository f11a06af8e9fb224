//! Slide poses for carousel transitions.
//!
//! An incoming slide starts at [`SlidePose::enter`] and settles at
//! [`SlidePose::CENTER`]; the outgoing one leaves towards
//! [`SlidePose::exit`]. Both are mirrored by [`Direction`], so moving forward
//! pushes content left and moving backward pushes it right.

use std::time::Duration;

use crate::carousel::Direction;

/// Horizontal travel of a slide, in pixels.
pub const SLIDE_OFFSET_PX: f64 = 300.0;

/// Y-axis tilt of a slide at either end of its travel, in degrees.
pub const SLIDE_TILT_DEG: f64 = 15.0;

/// Length of one slide transition.
pub const SLIDE_DURATION: Duration = Duration::from_millis(600);

/// Control points of the site-wide easing curve.
pub const LUXURY_EASE: [f64; 4] = [0.77, 0.0, 0.175, 1.0];

/// `cubic-bezier(...)` for [`LUXURY_EASE`].
pub fn luxury_ease_css() -> String {
    let [x1, y1, x2, y2] = LUXURY_EASE;
    format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
}

/// Position, tilt and opacity of a slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePose {
    /// Horizontal offset in px
    pub x_px: f64,
    /// Y-axis rotation in degrees
    pub rotate_y_deg: f64,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
}

impl SlidePose {
    /// Resting pose.
    pub const CENTER: Self = Self {
        x_px: 0.0,
        rotate_y_deg: 0.0,
        opacity: 1.0,
    };

    /// Where an incoming slide starts.
    pub fn enter(direction: Direction) -> Self {
        Self {
            x_px: SLIDE_OFFSET_PX * direction.sign(),
            rotate_y_deg: SLIDE_TILT_DEG * direction.sign(),
            opacity: 0.0,
        }
    }

    /// Where an outgoing slide ends.
    pub fn exit(direction: Direction) -> Self {
        Self::enter(direction.reversed())
    }

    /// CSS `transform` value.
    pub fn transform_css(&self) -> String {
        format!(
            "translateX({}px) rotateY({}deg)",
            self.x_px, self.rotate_y_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn forward_enters_from_right_and_exits_left() {
        let enter = SlidePose::enter(Direction::Forward);
        assert_eq!(enter.x_px, 300.0);
        assert_eq!(enter.rotate_y_deg, 15.0);
        assert_eq!(enter.opacity, 0.0);

        let exit = SlidePose::exit(Direction::Forward);
        assert_eq!(exit.x_px, -300.0);
        assert_eq!(exit.rotate_y_deg, -15.0);
    }

    #[test]
    fn backward_mirrors_forward() {
        assert_eq!(SlidePose::enter(Direction::Backward).x_px, -300.0);
        assert_eq!(SlidePose::exit(Direction::Backward).x_px, 300.0);
    }

    #[test]
    fn renders_css() {
        assert_eq!(
            SlidePose::enter(Direction::Forward).transform_css(),
            "translateX(300px) rotateY(15deg)"
        );
        assert_eq!(
            SlidePose::CENTER.transform_css(),
            "translateX(0px) rotateY(0deg)"
        );
        assert_eq!(luxury_ease_css(), "cubic-bezier(0.77, 0, 0.175, 1)");
    }
}
