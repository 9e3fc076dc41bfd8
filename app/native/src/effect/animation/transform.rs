//! Paint-time transform of a disappearing window.
//!
//! Transforms are pure functions of the eased progress, the window size and
//! the effect settings. The result is handed to the compositor's paint call;
//! nothing here touches pixels.

use serde::Serialize;

use super::easing::lerp;
use crate::config::TransformConfig;
use crate::constants::HALF_FIELD_OF_VIEW_DEG;
use crate::host::Size;

/// Linear interpolation from `from` to `to` at progress `t`.
#[inline]
#[must_use]
pub fn interpolate(from: f64, to: f64, t: f64) -> f64 { lerp(from, to, t) }

/// Converts a distance away from the viewer into an on-screen scale factor.
///
/// A window whose largest dimension is `size` shrinks linearly with distance
/// and vanishes (scale 0) once it is far enough away.
#[must_use]
pub fn distance_to_scale(distance: f64, size: f64) -> f64 {
    if size <= 0.0 {
        return if distance > 0.0 { 0.0 } else { 1.0 };
    }
    let fov = HALF_FIELD_OF_VIEW_DEG.to_radians().tan();
    1.0 - (2.0 * distance * fov / size).min(1.0)
}

/// Transform variant, resolved from [`TransformConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TransformKind {
    /// Move away from the viewer while drifting vertically.
    Recede { distance: f64, shift: f64 },
    /// Scale down towards the bottom edge.
    Shrink { scale: f64 },
}

impl TransformKind {
    /// Resolves the configured transform, clamping out-of-range parameters.
    #[must_use]
    pub fn from_config(config: &TransformConfig) -> Self {
        match *config {
            TransformConfig::Recede { distance, shift } => {
                if distance < 0.0 {
                    tracing::warn!(distance, "negative recede distance, using 0");
                }
                Self::Recede {
                    distance: distance.max(0.0),
                    shift,
                }
            }
            TransformConfig::Shrink { scale } => {
                if scale < 0.0 {
                    tracing::warn!(scale, "negative shrink scale, using 0");
                }
                Self::Shrink { scale: scale.max(0.0) }
            }
        }
    }

    /// Computes the transform at eased progress `t`.
    #[must_use]
    pub fn compute(&self, t: f64, size: Size, target_opacity: f64) -> WindowTransform {
        let opacity = interpolate(1.0, target_opacity, t);

        match *self {
            Self::Recede { distance, shift } => {
                let scale = distance_to_scale(interpolate(0.0, distance, t), size.max_dimension());
                WindowTransform {
                    x_scale: scale,
                    y_scale: scale,
                    x_translation: 0.5 * (1.0 - scale) * size.width,
                    y_translation: (0.5 * (1.0 - scale)).mul_add(size.height, interpolate(0.0, shift, t)),
                    opacity,
                }
            }
            Self::Shrink { scale } => {
                let scale = interpolate(1.0, scale, t);
                WindowTransform {
                    x_scale: scale,
                    y_scale: scale,
                    x_translation: 0.5 * (1.0 - scale) * size.width,
                    y_translation: (1.0 - scale) * size.height,
                    opacity,
                }
            }
        }
    }
}

/// Transform descriptor passed to the compositor's paint call.
///
/// Translations are relative to the window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowTransform {
    pub x_scale: f64,
    pub y_scale: f64,
    pub x_translation: f64,
    pub y_translation: f64,
    /// Multiplier applied to the window's own opacity.
    pub opacity: f64,
}

impl WindowTransform {
    /// The transform that leaves a window untouched.
    pub const IDENTITY: Self = Self {
        x_scale: 1.0,
        y_scale: 1.0,
        x_translation: 0.0,
        y_translation: 0.0,
        opacity: 1.0,
    };

    /// Check if two transforms are approximately equal (within epsilon).
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x_scale - other.x_scale).abs() < epsilon
            && (self.y_scale - other.y_scale).abs() < epsilon
            && (self.x_translation - other.x_translation).abs() < epsilon
            && (self.y_translation - other.y_translation).abs() < epsilon
            && (self.opacity - other.opacity).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;
    const WINDOW: Size = Size::new(800.0, 600.0);

    #[test]
    fn test_interpolate_endpoints_and_midpoint() {
        assert!((interpolate(3.0, 9.0, 0.0) - 3.0).abs() < EPS);
        assert!((interpolate(3.0, 9.0, 1.0) - 9.0).abs() < EPS);
        assert!((interpolate(3.0, 9.0, 0.5) - 6.0).abs() < EPS);
        assert!((interpolate(1.0, 0.0, 0.25) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_distance_to_scale() {
        assert!((distance_to_scale(0.0, 800.0) - 1.0).abs() < EPS);

        let fov = 30.0_f64.to_radians().tan();
        let expected = 1.0 - 2.0 * 100.0 * fov / 800.0;
        assert!((distance_to_scale(100.0, 800.0) - expected).abs() < EPS);

        // Far enough away the window vanishes entirely
        assert!(distance_to_scale(10_000.0, 800.0).abs() < EPS);
    }

    #[test]
    fn test_distance_to_scale_degenerate_size() {
        assert!((distance_to_scale(0.0, 0.0) - 1.0).abs() < EPS);
        assert!(distance_to_scale(5.0, 0.0).abs() < EPS);
    }

    #[test]
    fn test_every_transform_starts_at_identity() {
        let kinds = [
            TransformKind::Recede { distance: 100.0, shift: 20.0 },
            TransformKind::Shrink { scale: 0.8 },
        ];
        for kind in kinds {
            assert!(kind.compute(0.0, WINDOW, 0.0).approx_eq(&WindowTransform::IDENTITY, EPS));
        }
    }

    #[test]
    fn test_recede_at_end() {
        let kind = TransformKind::Recede { distance: 100.0, shift: 20.0 };
        let transform = kind.compute(1.0, WINDOW, 0.0);

        let scale = distance_to_scale(100.0, 800.0);
        assert!((transform.x_scale - scale).abs() < EPS);
        assert!((transform.y_scale - scale).abs() < EPS);
        assert!((transform.x_translation - 0.5 * (1.0 - scale) * 800.0).abs() < EPS);
        assert!((transform.y_translation - (0.5 * (1.0 - scale) * 600.0 + 20.0)).abs() < EPS);
        assert!(transform.opacity.abs() < EPS);
    }

    #[test]
    fn test_recede_keeps_window_centered() {
        let kind = TransformKind::Recede { distance: 150.0, shift: 0.0 };
        let transform = kind.compute(0.6, WINDOW, 1.0);

        let center_x = transform.x_translation + transform.x_scale * WINDOW.width / 2.0;
        let center_y = transform.y_translation + transform.y_scale * WINDOW.height / 2.0;
        assert!((center_x - 400.0).abs() < EPS);
        assert!((center_y - 300.0).abs() < EPS);
    }

    #[test]
    fn test_shrink_is_bottom_anchored() {
        let kind = TransformKind::Shrink { scale: 0.5 };
        let transform = kind.compute(1.0, WINDOW, 0.25);

        assert!((transform.x_scale - 0.5).abs() < EPS);
        assert!((transform.x_translation - 200.0).abs() < EPS);
        assert!((transform.y_translation - 300.0).abs() < EPS);
        // Bottom edge stays put
        let bottom = transform.y_translation + transform.y_scale * WINDOW.height;
        assert!((bottom - 600.0).abs() < EPS);
        assert!((transform.opacity - 0.25).abs() < EPS);
    }

    #[test]
    fn test_opacity_follows_progress() {
        let kind = TransformKind::Shrink { scale: 1.0 };
        assert!((kind.compute(0.5, WINDOW, 0.0).opacity - 0.5).abs() < EPS);
        assert!((kind.compute(0.5, WINDOW, 0.6).opacity - 0.8).abs() < EPS);
    }

    #[test]
    fn test_from_config_clamps_negative_values() {
        let recede = TransformKind::from_config(&TransformConfig::Recede {
            distance: -5.0,
            shift: -3.0,
        });
        assert_eq!(recede, TransformKind::Recede { distance: 0.0, shift: -3.0 });

        let shrink = TransformKind::from_config(&TransformConfig::Shrink { scale: -1.0 });
        assert_eq!(shrink, TransformKind::Shrink { scale: 0.0 });
    }
}
