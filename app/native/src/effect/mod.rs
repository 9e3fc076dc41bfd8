//! The window close effect.
//!
//! [`DisappearEffect`] plays a short shrink/fade animation when a window
//! closes instead of letting it vanish instantly.
//!
//! # Architecture
//!
//! - `animation` - Easing curves, timelines and transform math
//! - `eligibility` - Which windows get the animation
//! - `events` - Signals in, paint requests out
//! - `registry` - Windows currently animating, with their pins
//! - `settings` - Configuration resolved for the running effect
//!
//! # Frame Order
//!
//! The compositor drives the effect from its paint loop:
//! 1. `pre_paint_screen` advances every animation exactly once and drops
//!    finished ones
//! 2. `pre_paint_window` / `paint_window` read the advanced progress
//! 3. `post_paint_screen` asks for another frame while anything animates
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut effect = DisappearEffect::new(&host, &config);
//! effect.handle_event(&host, EffectEvent::WindowClosed(window));
//!
//! let screen = effect.pre_paint_screen(frame_delta(16));
//! if let Some(transform) = effect.paint_window(&host, window) {
//!     renderer.paint(window, transform);
//! }
//! let post = effect.post_paint_screen();
//! ```

pub mod animation;
mod eligibility;
mod events;
mod registry;
mod settings;

use std::collections::HashSet;
use std::time::Duration;

pub use animation::{Timeline, TransformKind, WindowTransform, frame_delta, interpolate};
pub use eligibility::{Eligibility, should_animate};
pub use events::{EffectEvent, ScreenPostPaint, ScreenPrePaint, WindowPrePaint};
pub use registry::{Animation, AnimationRegistry};
pub use settings::{EffectSettings, animation_time};

use crate::config::DisappearConfig;
use crate::constants::DEFAULT_EFFECT_ID;
use crate::host::{EffectId, EffectsHost, WindowId};

/// Window close animation controller.
#[derive(Debug)]
pub struct DisappearEffect {
    /// Identity used for the close grab.
    id: EffectId,
    /// Settings applied to animations started from now on.
    settings: EffectSettings,
    /// Windows currently animating.
    animations: AnimationRegistry,
    /// Windows found eligible while they were still alive.
    marked: HashSet<WindowId>,
}

impl DisappearEffect {
    /// Creates the effect with the default close grab identity.
    #[must_use]
    pub fn new(host: &dyn EffectsHost, config: &DisappearConfig) -> Self {
        Self::with_id(DEFAULT_EFFECT_ID, host, config)
    }

    /// Creates the effect with an explicit close grab identity.
    #[must_use]
    pub fn with_id(id: EffectId, host: &dyn EffectsHost, config: &DisappearConfig) -> Self {
        Self {
            id,
            settings: EffectSettings::from_config(config, host.animation_time_factor()),
            animations: AnimationRegistry::new(),
            marked: HashSet::new(),
        }
    }

    /// Returns whether the host can run this effect.
    #[must_use]
    pub fn supported(host: &dyn EffectsHost) -> bool {
        host.is_compositing() && host.animations_supported()
    }

    /// Returns the close grab identity.
    #[must_use]
    pub const fn id(&self) -> EffectId { self.id }

    /// Returns the settings new animations start with.
    #[must_use]
    pub const fn settings(&self) -> &EffectSettings { &self.settings }

    /// Returns the running animations.
    #[must_use]
    pub const fn animations(&self) -> &AnimationRegistry { &self.animations }

    /// Returns whether any window is animating.
    #[must_use]
    pub fn is_active(&self) -> bool { !self.animations.is_empty() }

    /// Returns whether `window` carries the eligibility marker.
    #[must_use]
    pub fn is_marked(&self, window: WindowId) -> bool { self.marked.contains(&window) }

    /// Checks whether `window` would animate if it closed now.
    #[must_use]
    pub fn eligibility(&self, host: &dyn EffectsHost, window: WindowId) -> Eligibility {
        should_animate(host, &self.settings, self.id, window, self.is_marked(window))
    }

    /// Dispatches a host signal.
    pub fn handle_event(&mut self, host: &dyn EffectsHost, event: EffectEvent) {
        tracing::trace!(event = event.name(), "disappear: handling event");
        match event {
            EffectEvent::Activated { windows } => {
                for window in windows {
                    self.mark_window(host, window);
                }
            }
            EffectEvent::WindowAdded(window) => self.mark_window(host, window),
            EffectEvent::WindowClosed(window) => self.start(host, window),
            EffectEvent::WindowDeleted(window) => self.stop(window),
            EffectEvent::Reconfigure(config) => self.reconfigure(host, &config),
        }
    }

    /// Applies a new configuration.
    ///
    /// Running animations keep the duration and curve they started with.
    pub fn reconfigure(&mut self, host: &dyn EffectsHost, config: &DisappearConfig) {
        self.settings = EffectSettings::from_config(config, host.animation_time_factor());
        tracing::debug!(
            duration_ms = self.settings.duration.as_millis(),
            easing = ?self.settings.easing,
            transform = ?self.settings.transform,
            "disappear: reconfigured"
        );
    }

    /// Records that `window` is eligible while its state is still reliable.
    fn mark_window(&mut self, host: &dyn EffectsHost, window: WindowId) {
        if self.eligibility(host, window).is_eligible() {
            self.marked.insert(window);
        }
    }

    /// Starts the close animation of `window` if it qualifies.
    fn start(&mut self, host: &dyn EffectsHost, window: WindowId) {
        if self.animations.contains(window) {
            tracing::debug!(%window, "disappear: window is already animating");
            return;
        }

        let verdict = self.eligibility(host, window);
        if !verdict.is_eligible() {
            tracing::debug!(%window, %verdict, "disappear: not animating window");
            return;
        }

        // Tell other close effects to leave this window alone
        host.set_close_grab(window, self.id);

        let timeline = Timeline::new(self.settings.duration, self.settings.easing);
        let started = self.animations.start(window, timeline, || host.pin_window(window));
        debug_assert!(started);

        tracing::debug!(
            %window,
            duration_ms = self.settings.duration.as_millis(),
            "disappear: animation started"
        );
    }

    /// Forgets `window` after the host deleted it.
    fn stop(&mut self, window: WindowId) {
        self.marked.remove(&window);
        if self.animations.remove(window) {
            tracing::debug!(%window, "disappear: window deleted mid-animation");
        }
    }

    // ========================================================================
    // Paint Callbacks
    // ========================================================================

    /// Advances all animations by the time since the previous frame.
    pub fn pre_paint_screen(&mut self, elapsed: Duration) -> ScreenPrePaint {
        for window in self.animations.advance(elapsed) {
            self.marked.remove(&window);
            tracing::debug!(%window, "disappear: animation finished");
        }

        ScreenPrePaint {
            transformed_windows: !self.animations.is_empty(),
        }
    }

    /// Returns the paint flags for `window`.
    #[must_use]
    pub fn pre_paint_window(&self, window: WindowId) -> WindowPrePaint {
        if self.animations.contains(window) {
            WindowPrePaint {
                paint_deleted: true,
                transformed: true,
            }
        } else {
            WindowPrePaint::default()
        }
    }

    /// Computes the transform of `window` for the current frame.
    ///
    /// Returns `None` for windows that are not animating; the host paints
    /// them untouched.
    #[must_use]
    pub fn paint_window(&self, host: &dyn EffectsHost, window: WindowId) -> Option<WindowTransform> {
        let t = self.animations.value(window)?;
        let Some(size) = host.window_size(window) else {
            tracing::warn!(%window, "disappear: animating window has no geometry");
            return None;
        };
        Some(self.settings.transform.compute(t, size, self.settings.opacity))
    }

    /// Returns the post-paint requests for the current frame.
    #[must_use]
    pub fn post_paint_screen(&self) -> ScreenPostPaint {
        ScreenPostPaint {
            repaint_full: !self.animations.is_empty(),
        }
    }
}
