//! Animation primitives for the close effect.
//!
//! - `easing` - Time-based easing curves (linear, ease-in, ease-out, etc.)
//! - `timeline` - Per-window progress tracking
//! - `transform` - Paint-time transform math for each visual variant

mod easing;
mod timeline;
mod transform;

pub use easing::{apply_easing, lerp};
pub use timeline::{Timeline, frame_delta};
pub use transform::{TransformKind, WindowTransform, distance_to_scale, interpolate};
