//! Small time-driven animations: an eased number counter and a digit typewriter.

use std::time::Duration;

/// Cubic ease-out on `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Counts from one integer to another with a cubic ease-out.
///
/// Used for the "Serving since" year badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    /// Value shown at the start
    pub from: i64,
    /// Value shown once finished
    pub to: i64,
    /// Length of the animation
    pub duration: Duration,
}

impl CountUp {
    /// New counter.
    pub const fn new(from: i64, to: i64, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Fraction of the animation elapsed, in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value after `elapsed`.
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        let eased = ease_out_cubic(self.progress(elapsed));
        let span = (self.to - self.from) as f64;
        (self.from as f64 + span * eased).floor() as i64
    }

    /// Whether the counter has reached its final value.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Reveals a phone number one character at a time over a field of zeros.
///
/// Frame `i` shows the first `i + 1` characters of the target; every digit
/// after that reads `0`. Separators keep their place so the layout never jumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    target: Vec<char>,
    step: Duration,
}

impl Typewriter {
    /// Delay between characters on the published site.
    pub const DEFAULT_STEP: Duration = Duration::from_millis(100);

    /// Typewriter for `target`, one character per `step`.
    pub fn new(target: &str, step: Duration) -> Self {
        Self {
            target: target.chars().collect(),
            step,
        }
    }

    /// Number of frames; one per character.
    pub fn frame_count(&self) -> usize {
        self.target.len()
    }

    /// What is shown before the first frame: every digit zeroed.
    pub fn initial(&self) -> String {
        self.render(0)
    }

    /// Text of frame `index`. Indices past the end show the full target.
    pub fn frame(&self, index: usize) -> String {
        self.render(index.saturating_add(1))
    }

    /// When frame `index` is due, relative to the reveal starting.
    pub fn due_at(&self, index: usize) -> Duration {
        self.step.saturating_mul(index as u32)
    }

    /// Every frame paired with its due time, in order.
    pub fn schedule(&self) -> Vec<(Duration, String)> {
        (0..self.frame_count())
            .map(|i| (self.due_at(i), self.frame(i)))
            .collect()
    }

    fn render(&self, revealed: usize) -> String {
        self.target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < revealed || !c.is_ascii_digit() {
                    c
                } else {
                    '0'
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(7.0), 1.0);
    }

    #[test]
    fn year_counter_runs_2020_to_2023() {
        let counter = CountUp::new(2020, 2023, Duration::from_millis(2000));
        assert_eq!(counter.value_at(Duration::ZERO), 2020);
        // halfway: 2020 + 3 * 0.875 = 2022.625
        assert_eq!(counter.value_at(Duration::from_millis(1000)), 2022);
        assert_eq!(counter.value_at(Duration::from_millis(2000)), 2023);
        assert_eq!(counter.value_at(Duration::from_millis(9000)), 2023);
        assert!(counter.is_finished(Duration::from_millis(2000)));
        assert!(!counter.is_finished(Duration::from_millis(1999)));
    }

    #[test]
    fn counter_is_monotonic() {
        let counter = CountUp::new(0, 500, Duration::from_millis(1000));
        let mut last = counter.value_at(Duration::ZERO);
        for ms in (0..=1000).step_by(16) {
            let value = counter.value_at(Duration::from_millis(ms));
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn zero_duration_counter_is_done_immediately() {
        let counter = CountUp::new(1, 9, Duration::ZERO);
        assert_eq!(counter.value_at(Duration::ZERO), 9);
    }

    #[test]
    fn typewriter_reveals_digit_by_digit() {
        let tw = Typewriter::new("963 796 9705", Typewriter::DEFAULT_STEP);
        assert_eq!(tw.frame_count(), 12);
        assert_eq!(tw.initial(), "000 000 0000");
        assert_eq!(tw.frame(0), "900 000 0000");
        assert_eq!(tw.frame(4), "963 700 0000");
        assert_eq!(tw.frame(11), "963 796 9705");
        assert_eq!(tw.frame(40), "963 796 9705");
    }

    #[test]
    fn typewriter_schedule_is_evenly_spaced() {
        let tw = Typewriter::new("12 3", Duration::from_millis(100));
        let schedule = tw.schedule();
        assert_eq!(
            schedule,
            vec![
                (Duration::from_millis(0), "10 0".to_string()),
                (Duration::from_millis(100), "12 0".to_string()),
                (Duration::from_millis(200), "12 0".to_string()),
                (Duration::from_millis(300), "12 3".to_string()),
            ]
        );
    }
}
