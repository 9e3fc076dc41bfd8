//! Event and paint types exchanged with the compositor.
//!
//! - `EffectEvent` - window lifecycle signals and reconfiguration, sent to
//!   [`DisappearEffect::handle_event`](super::DisappearEffect::handle_event)
//! - `ScreenPrePaint`, `WindowPrePaint`, `ScreenPostPaint` - what the effect
//!   asks of the paint pipeline for the current frame

use crate::config::DisappearConfig;
use crate::host::WindowId;

// ============================================================================
// Effect Events
// ============================================================================

/// Signals delivered to the effect.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectEvent {
    /// The effect was loaded while these windows already existed.
    Activated { windows: Vec<WindowId> },

    /// A new window was mapped.
    WindowAdded(WindowId),

    /// A window started closing; its contents are still available.
    WindowClosed(WindowId),

    /// A window is gone for good.
    WindowDeleted(WindowId),

    /// A freshly loaded configuration.
    Reconfigure(DisappearConfig),
}

impl EffectEvent {
    /// Returns the event name for logging purposes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Activated { .. } => "Activated",
            Self::WindowAdded(_) => "WindowAdded",
            Self::WindowClosed(_) => "WindowClosed",
            Self::WindowDeleted(_) => "WindowDeleted",
            Self::Reconfigure(_) => "Reconfigure",
        }
    }
}

// ============================================================================
// Paint Requests
// ============================================================================

/// Screen-level requests made before a frame is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenPrePaint {
    /// Paint the screen through the transformed-windows path.
    pub transformed_windows: bool,
}

/// Window-level requests made before a window is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowPrePaint {
    /// Keep painting the window even though it has been closed.
    pub paint_deleted: bool,
    /// The window will be painted with a transform.
    pub transformed: bool,
}

/// Screen-level requests made after a frame has been painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenPostPaint {
    /// Schedule a repaint of the whole screen for the next frame.
    pub repaint_full: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(EffectEvent::WindowAdded(WindowId(1)).name(), "WindowAdded");
        assert_eq!(EffectEvent::WindowClosed(WindowId(1)).name(), "WindowClosed");
        assert_eq!(EffectEvent::WindowDeleted(WindowId(1)).name(), "WindowDeleted");
        assert_eq!(EffectEvent::Activated { windows: vec![] }.name(), "Activated");
        assert_eq!(EffectEvent::Reconfigure(DisappearConfig::default()).name(), "Reconfigure");
    }

    #[test]
    fn test_paint_requests_default_to_nothing() {
        assert!(!ScreenPrePaint::default().transformed_windows);
        assert_eq!(WindowPrePaint::default(), WindowPrePaint {
            paint_deleted: false,
            transformed: false
        });
        assert!(!ScreenPostPaint::default().repaint_full);
    }
}
