//! Compositor host interface.
//!
//! The effect never talks to a window manager directly. Everything it needs
//! from the compositor (window queries, the shared close grab, reference
//! counting and capability probes) goes through the [`EffectsHost`] trait.
//!
//! Relations:
//! - `WindowId` identifies a host window; the host owns its lifetime
//! - `WindowPin` keeps a closed window alive while it animates
//! - `EffectId` names the effect holding a window's close grab

mod pin;
pub mod sim;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use pin::WindowPin;

// ============================================================================
// Identity Types
// ============================================================================

/// Opaque identity of a host window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:#x}", self.0) }
}

/// Identity of an effect that can hold a window's close grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectId(pub u32);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "effect#{}", self.0) }
}

// ============================================================================
// Window Properties
// ============================================================================

/// Logical role of a window as reported by the window manager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowType {
    /// Regular application window.
    #[default]
    Normal,
    /// Dialog or transient window.
    Dialog,
    /// Desktop background surface.
    Desktop,
    /// Panel or dock.
    Dock,
    /// Menu, dropdown or popup menu.
    Menu,
    /// Tooltip.
    Tooltip,
    /// Notification bubble.
    Notification,
    /// Splash screen.
    Splash,
    /// Anything the host does not classify further.
    Other,
}

impl WindowType {
    /// Returns whether windows of this type close with an animation.
    #[must_use]
    pub const fn is_animatable(self) -> bool { matches!(self, Self::Normal | Self::Dialog) }
}

/// Window dimensions in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// Returns the larger of the two dimensions.
    #[must_use]
    pub fn max_dimension(&self) -> f64 { self.width.max(self.height) }
}

// ============================================================================
// Host Trait
// ============================================================================

/// Services the compositor provides to the effect.
///
/// All calls happen on the compositor thread, inside its signal handlers and
/// paint callbacks. Methods take `&self`; hosts that need to mutate their own
/// bookkeeping (close grabs, reference counts) use interior mutability.
pub trait EffectsHost {
    /// Returns whether a full-screen effect (overview, desktop grid, ...) is
    /// currently running.
    fn active_fullscreen_effect(&self) -> bool;

    /// Returns whether the compositor renders through an accelerated backend.
    fn is_compositing(&self) -> bool;

    /// Returns whether the compositor allows animations at all.
    fn animations_supported(&self) -> bool;

    /// Global animation speed multiplier applied to configured durations.
    fn animation_time_factor(&self) -> f64 { 1.0 }

    /// Returns the window class (`"resource-name resource-class"`).
    fn window_class(&self, window: WindowId) -> Option<String>;

    /// Returns the logical role of the window.
    fn window_type(&self, window: WindowId) -> WindowType;

    /// Returns whether the window is fully managed by the window manager.
    ///
    /// Override-redirect surfaces and windows already in their closing
    /// transition report `false`.
    fn is_managed(&self, window: WindowId) -> bool;

    /// Returns the current window size.
    fn window_size(&self, window: WindowId) -> Option<Size>;

    /// Returns the effect currently holding the window's close grab.
    fn close_grab(&self, window: WindowId) -> Option<EffectId>;

    /// Claims the window's close grab for `owner` (last writer wins).
    fn set_close_grab(&self, window: WindowId, owner: EffectId);

    /// Takes a reference on the window so the host keeps it alive.
    ///
    /// The reference is released when the returned pin is dropped.
    fn pin_window(&self, window: WindowId) -> WindowPin;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_type_animatable() {
        assert!(WindowType::Normal.is_animatable());
        assert!(WindowType::Dialog.is_animatable());
        assert!(!WindowType::Dock.is_animatable());
        assert!(!WindowType::Tooltip.is_animatable());
        assert!(!WindowType::Other.is_animatable());
    }

    #[test]
    fn test_size_max_dimension() {
        assert!((Size::new(800.0, 600.0).max_dimension() - 800.0).abs() < f64::EPSILON);
        assert!((Size::new(300.0, 900.0).max_dimension() - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_id_display_is_hex() {
        assert_eq!(WindowId(255).to_string(), "0xff");
    }

    #[test]
    fn test_window_type_serializes_kebab_case() {
        let json = serde_json::to_string(&WindowType::Notification).unwrap();
        assert_eq!(json, "\"notification\"");
    }
}
