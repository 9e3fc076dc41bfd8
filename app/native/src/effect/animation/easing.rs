//! Easing functions for time-based animations.
//!
//! Every curve maps a linear fraction in `[0, 1]` onto `[0, 1]`, starts at 0,
//! ends at 1 and never decreases in between.

use crate::config::EasingType;

// ============================================================================
// Easing Functions
// ============================================================================

/// Linear interpolation between two values.
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 { (end - start).mul_add(t, start) }

/// Linear easing (no acceleration).
#[inline]
#[must_use]
pub const fn ease_linear(t: f64) -> f64 { t }

/// Ease-in (slow start, accelerates).
#[inline]
#[must_use]
pub fn ease_in(t: f64) -> f64 { t * t * t }

/// Ease-out (fast start, decelerates).
#[inline]
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t1 = t - 1.0;
    (t1 * t1).mul_add(t1, 1.0)
}

/// Ease-in-out (slow start and end).
#[inline]
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t1 = 2.0f64.mul_add(t, -2.0);
        (0.5 * t1 * t1).mul_add(t1, 1.0)
    }
}

/// Exponential ease-out (very fast start, long tail).
#[inline]
#[must_use]
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 { 1.0 } else { 1.0 - 2.0f64.powf(-10.0 * t) }
}

/// Applies an easing function based on the easing type.
///
/// The input is clamped to `[0, 1]` first.
#[inline]
#[must_use]
pub fn apply_easing(t: f64, easing: EasingType) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        EasingType::Linear => ease_linear(t),
        EasingType::EaseIn => ease_in(t),
        EasingType::EaseOut => ease_out(t),
        EasingType::EaseInOut => ease_in_out(t),
        EasingType::EaseOutExpo => ease_out_expo(t),
    }
}

// ============================================================================
// Tests
// ============================================================================
