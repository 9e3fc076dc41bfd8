//! Per-window animation progress.

use std::time::Duration;

use super::easing::apply_easing;
use crate::config::EasingType;

/// Shortest duration a timeline accepts.
const MIN_DURATION: Duration = Duration::from_millis(1);

/// Converts a signed frame delta in milliseconds into a `Duration`.
///
/// Hosts occasionally report negative deltas after clock adjustments; those
/// are treated as no time having passed.
#[must_use]
pub fn frame_delta(ms: i64) -> Duration {
    u64::try_from(ms).map_or(Duration::ZERO, Duration::from_millis)
}

/// Maps elapsed time onto an eased progress value.
///
/// Elapsed time only ever grows, so once a timeline is [`done`](Self::done)
/// it stays done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    duration: Duration,
    elapsed: Duration,
    easing: EasingType,
}

impl Default for Timeline {
    fn default() -> Self { Self::new(MIN_DURATION, EasingType::Linear) }
}

impl Timeline {
    /// Creates a timeline at its start.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            duration: duration.max(MIN_DURATION),
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Sets the total duration.
    pub fn set_duration(&mut self, duration: Duration) { self.duration = duration.max(MIN_DURATION); }

    /// Selects the easing curve.
    pub const fn set_easing_curve(&mut self, easing: EasingType) { self.easing = easing; }

    /// Advances the timeline by `delta`.
    pub fn update(&mut self, delta: Duration) { self.elapsed = self.elapsed.saturating_add(delta); }

    /// Returns the linear fraction of the duration that has passed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Returns the eased progress, in `[0, 1]`.
    #[must_use]
    pub fn value(&self) -> f64 { apply_easing(self.progress(), self.easing) }

    /// Returns whether the full duration has elapsed.
    #[must_use]
    pub fn done(&self) -> bool { self.elapsed >= self.duration }

    /// Total duration.
    #[must_use]
    pub const fn duration(&self) -> Duration { self.duration }

    /// Time advanced so far.
    #[must_use]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Easing curve in use.
    #[must_use]
    pub const fn easing(&self) -> EasingType { self.easing }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    #[test]
    fn test_new_timeline_starts_at_zero() {
        let t = Timeline::new(Duration::from_millis(160), EasingType::EaseOut);
        assert!(t.value().abs() < f64::EPSILON);
        assert!(!t.done());
        assert_eq!(t.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_zero_duration_is_raised() {
        let t = Timeline::new(Duration::ZERO, EasingType::Linear);
        assert_eq!(t.duration(), MIN_DURATION);
    }

    #[test]
    fn test_done_exactly_at_duration() {
        let mut t = Timeline::new(Duration::from_millis(160), EasingType::Linear);
        for _ in 0..9 {
            t.update(MS_16);
            assert!(!t.done());
        }
        t.update(MS_16);
        assert!(t.done());
        assert!((t.value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_done_is_terminal() {
        let mut t = Timeline::new(Duration::from_millis(50), EasingType::EaseOut);
        t.update(Duration::from_millis(80));
        assert!(t.done());
        t.update(Duration::ZERO);
        t.update(MS_16);
        assert!(t.done());
        assert!((t.value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_is_monotonic_and_bounded() {
        for easing in [EasingType::Linear, EasingType::EaseOut, EasingType::EaseInOut] {
            let mut t = Timeline::new(Duration::from_millis(97), easing);
            let mut previous = t.value();
            for step in [3_u64, 0, 17, 5, 40, 1, 60] {
                t.update(Duration::from_millis(step));
                let value = t.value();
                assert!((0.0..=1.0).contains(&value));
                assert!(value >= previous);
                previous = value;
            }
            assert!(t.done());
        }
    }

    #[test]
    fn test_ease_out_runs_ahead_of_linear() {
        let mut t = Timeline::new(Duration::from_millis(100), EasingType::EaseOut);
        t.update(Duration::from_millis(30));
        assert!((t.progress() - 0.3).abs() < 1e-9);
        assert!(t.value() > t.progress());
    }

    #[test]
    fn test_set_duration_and_curve() {
        let mut t = Timeline::default();
        t.set_duration(Duration::from_millis(200));
        t.set_easing_curve(EasingType::EaseOut);
        assert_eq!(t.duration(), Duration::from_millis(200));
        assert_eq!(t.easing(), EasingType::EaseOut);
    }

    #[test]
    fn test_frame_delta_clamps_negative() {
        assert_eq!(frame_delta(-5), Duration::ZERO);
        assert_eq!(frame_delta(0), Duration::ZERO);
        assert_eq!(frame_delta(16), MS_16);
    }
}
