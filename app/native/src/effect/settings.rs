//! Effective effect settings.
//!
//! [`DisappearConfig`] is what the user wrote; [`EffectSettings`] is what the
//! effect runs with after defaults, the host's animation speed and range
//! checks have been applied.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::Serialize;

use super::animation::TransformKind;
use crate::config::{DisappearConfig, EasingType};
use crate::constants::DEFAULT_DURATION_MS;

/// Resolved configuration of the close animation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSettings {
    /// Window classes that never animate.
    pub blacklist: BTreeSet<String>,
    /// Duration of new animations, speed factor included.
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Target opacity, in `[0, 1]`.
    pub opacity: f64,
    /// Easing curve of new animations.
    pub easing: EasingType,
    /// Transform variant.
    pub transform: TransformKind,
}

impl Default for EffectSettings {
    fn default() -> Self { Self::from_config(&DisappearConfig::default(), 1.0) }
}

impl EffectSettings {
    /// Resolves settings from a configuration and the host's animation speed
    /// factor.
    #[must_use]
    pub fn from_config(config: &DisappearConfig, time_factor: f64) -> Self {
        let base_ms = if config.duration > 0 {
            config.duration
        } else {
            tracing::debug!(duration = config.duration, "non-positive duration, using default");
            DEFAULT_DURATION_MS
        };

        if !(0.0..=1.0).contains(&config.opacity) {
            tracing::warn!(opacity = config.opacity, "opacity out of range, clamping to [0, 1]");
        }

        Self {
            blacklist: config.blacklist.iter().cloned().collect(),
            duration: animation_time(base_ms, time_factor),
            opacity: config.opacity.clamp(0.0, 1.0),
            easing: config.easing,
            transform: TransformKind::from_config(&config.transform),
        }
    }

    /// Returns whether `class` is blacklisted.
    #[must_use]
    pub fn is_blacklisted(&self, class: &str) -> bool { self.blacklist.contains(class) }
}

/// Scales a duration by the host's animation speed factor.
///
/// The result is never shorter than one millisecond, so even "instant"
/// animations still run their cleanup through a frame.
#[must_use]
pub fn animation_time(duration_ms: i32, time_factor: f64) -> Duration {
    let factor = if time_factor.is_finite() && time_factor >= 0.0 {
        time_factor
    } else {
        tracing::warn!(time_factor, "invalid animation speed factor, using 1.0");
        1.0
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ms = (f64::from(duration_ms) * factor).round().max(1.0) as u64;
    Duration::from_millis(ms)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
