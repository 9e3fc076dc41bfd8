//! Close animation eligibility.
//!
//! Decides whether a window gets the close animation. The same check runs
//! twice in a window's life: when it appears (to record the eligibility
//! marker) and when it closes (to start the animation).
//!
//! # Rule Order
//!
//! 1. No full-screen effect may be running
//! 2. No other effect may hold the window's close grab
//! 3. The window class must not be blacklisted
//! 4. A marked window is accepted without further checks
//! 5. Otherwise the window must be managed
//! 6. And be a normal window or a dialog
//!
//! Step 4 exists because a closing window has already lost part of its
//! window-manager state, so the managed/type checks are only reliable while
//! the window is alive.

use std::fmt;

use super::settings::EffectSettings;
use crate::host::{EffectId, EffectsHost, WindowId, WindowType};

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// The window passes every check.
    Eligible,
    /// The window was marked eligible earlier.
    Marked,
    /// A full-screen effect is running.
    FullscreenEffectActive,
    /// Another effect owns the window's close transition.
    ClaimedBy(EffectId),
    /// The window class is blacklisted.
    Blacklisted,
    /// The window is not managed by the window manager.
    Unmanaged,
    /// The window type never animates.
    IgnoredType(WindowType),
}

impl Eligibility {
    /// Returns whether the window should animate.
    #[must_use]
    pub const fn is_eligible(self) -> bool { matches!(self, Self::Eligible | Self::Marked) }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eligible => write!(f, "eligible"),
            Self::Marked => write!(f, "eligible (marked)"),
            Self::FullscreenEffectActive => write!(f, "a full-screen effect is active"),
            Self::ClaimedBy(owner) => write!(f, "close grabbed by {owner}"),
            Self::Blacklisted => write!(f, "window class is blacklisted"),
            Self::Unmanaged => write!(f, "window is not managed"),
            Self::IgnoredType(window_type) => write!(f, "window type {window_type:?} is ignored"),
        }
    }
}

/// Runs the eligibility checks for `window`.
///
/// `marked` tells whether the window carries this effect's eligibility
/// marker; `effect` is this effect's close grab identity.
#[must_use]
pub fn should_animate(
    host: &dyn EffectsHost,
    settings: &EffectSettings,
    effect: EffectId,
    window: WindowId,
    marked: bool,
) -> Eligibility {
    let verdict = check(host, settings, effect, window, marked);
    tracing::trace!(%window, %verdict, "eligibility");
    verdict
}

fn check(
    host: &dyn EffectsHost,
    settings: &EffectSettings,
    effect: EffectId,
    window: WindowId,
    marked: bool,
) -> Eligibility {
    if host.active_fullscreen_effect() {
        return Eligibility::FullscreenEffectActive;
    }

    if let Some(owner) = host.close_grab(window).filter(|&owner| owner != effect) {
        return Eligibility::ClaimedBy(owner);
    }

    if host.window_class(window).is_some_and(|class| settings.is_blacklisted(&class)) {
        return Eligibility::Blacklisted;
    }

    if marked {
        return Eligibility::Marked;
    }

    if !host.is_managed(window) {
        return Eligibility::Unmanaged;
    }

    let window_type = host.window_type(window);
    if !window_type.is_animatable() {
        return Eligibility::IgnoredType(window_type);
    }

    Eligibility::Eligible
}
