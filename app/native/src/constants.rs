//! Application-wide constants.

use crate::host::EffectId;

/// Application name, used for config directories and CLI output.
pub const APP_NAME: &str = "disappear";

/// Close grab identity used by the effect unless the host assigns one.
pub const DEFAULT_EFFECT_ID: EffectId = EffectId(0x22A9_8300);

/// Animation duration (ms) used when the configured value is not positive.
pub const DEFAULT_DURATION_MS: i32 = 160;

/// Half the vertical field of view (degrees) of the virtual camera the
/// receding transform projects through.
pub const HALF_FIELD_OF_VIEW_DEG: f64 = 30.0;

/// URL of the published configuration schema.
pub const SCHEMA_ID: &str =
    "https://raw.githubusercontent.com/disappear-effect/disappear/main/disappear.schema.json";
