//! Scroll progress and linear value transforms.
//!
//! Parallax on the page is two steps: turn an element's position into a
//! progress in `[0, 1]` with a [`ScrollRange`], then map that progress onto a
//! CSS value with a [`Transform`].
//!
//! ```rust
//! use curv_motion::scroll::{ElementRect, ScrollRange, Transform};
//!
//! // Hero is 800px tall and scrolled 200px past the top of the viewport
//! let rect = ElementRect { top: -200.0, height: 800.0 };
//! let progress = ScrollRange::StartStartToEndStart.progress(rect, 900.0);
//! assert_eq!(progress, 0.25);
//!
//! let fade = Transform::new([0.0, 0.5], [1.0, 0.0]);
//! assert_eq!(fade.apply(progress), 0.5);
//! ```

/// The part of a bounding client rect the scroll math needs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementRect {
    /// Distance from the viewport top to the element top (negative once scrolled past)
    pub top: f64,
    /// Element height
    pub height: f64,
}

/// Which scroll span maps to progress `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRange {
    /// From element top at viewport top, to element bottom at viewport top.
    StartStartToEndStart,
    /// From element top at viewport bottom, to element bottom at viewport top.
    StartEndToEndStart,
}

impl ScrollRange {
    /// Progress of `rect` through this range, clamped to `[0, 1]`.
    pub fn progress(self, rect: ElementRect, viewport_height: f64) -> f64 {
        let (travelled, span) = match self {
            ScrollRange::StartStartToEndStart => (-rect.top, rect.height),
            ScrollRange::StartEndToEndStart => {
                (viewport_height - rect.top, viewport_height + rect.height)
            }
        };
        if span <= 0.0 || !span.is_finite() || !travelled.is_finite() {
            return 0.0;
        }
        (travelled / span).clamp(0.0, 1.0)
    }
}

/// Clamped linear map from an input range onto an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    input: [f64; 2],
    output: [f64; 2],
}

impl Transform {
    /// Map `input[0]..input[1]` onto `output[0]..output[1]`.
    pub const fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self { input, output }
    }

    /// Mapped value. Inputs outside the range pin to the nearest output end.
    pub fn apply(&self, value: f64) -> f64 {
        let [in_start, in_end] = self.input;
        let [out_start, out_end] = self.output;
        let span = in_end - in_start;
        if span == 0.0 || !value.is_finite() {
            return out_start;
        }
        let t = ((value - in_start) / span).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, height: f64) -> ElementRect {
        ElementRect { top, height }
    }

    #[test]
    fn start_start_range() {
        let range = ScrollRange::StartStartToEndStart;
        assert_eq!(range.progress(rect(0.0, 1000.0), 800.0), 0.0);
        assert_eq!(range.progress(rect(-500.0, 1000.0), 800.0), 0.5);
        assert_eq!(range.progress(rect(-1000.0, 1000.0), 800.0), 1.0);
        // not yet reached / long gone
        assert_eq!(range.progress(rect(300.0, 1000.0), 800.0), 0.0);
        assert_eq!(range.progress(rect(-5000.0, 1000.0), 800.0), 1.0);
    }

    #[test]
    fn start_end_range() {
        let range = ScrollRange::StartEndToEndStart;
        assert_eq!(range.progress(rect(800.0, 400.0), 800.0), 0.0);
        assert_eq!(range.progress(rect(200.0, 400.0), 800.0), 0.5);
        assert_eq!(range.progress(rect(-400.0, 400.0), 800.0), 1.0);
    }

    #[test]
    fn zero_height_element_reports_no_progress() {
        assert_eq!(
            ScrollRange::StartStartToEndStart.progress(rect(-10.0, 0.0), 800.0),
            0.0
        );
    }

    #[test]
    fn transform_clamps_both_ends() {
        let fade = Transform::new([0.0, 0.5], [1.0, 0.0]);
        assert_eq!(fade.apply(-1.0), 1.0);
        assert_eq!(fade.apply(0.25), 0.5);
        assert_eq!(fade.apply(0.5), 0.0);
        assert_eq!(fade.apply(0.9), 0.0);
    }

    #[test]
    fn transform_with_negative_output() {
        let image_y = Transform::new([0.0, 1.0], [20.0, -20.0]);
        assert_eq!(image_y.apply(0.0), 20.0);
        assert_eq!(image_y.apply(0.5), 0.0);
        assert_eq!(image_y.apply(1.0), -20.0);
    }

    #[test]
    fn degenerate_input_range_yields_output_start() {
        let t = Transform::new([0.3, 0.3], [4.0, 8.0]);
        assert_eq!(t.apply(0.3), 4.0);
        assert_eq!(t.apply(f64::NAN), 4.0);
    }
}
