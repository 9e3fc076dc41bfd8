//! Registry of windows that are currently animating.

use std::collections::HashMap;
use std::time::Duration;

use super::animation::Timeline;
use crate::host::{WindowId, WindowPin};

/// A running close animation.
///
/// The pin keeps the closed window alive; dropping the animation gives the
/// reference back to the host.
#[derive(Debug)]
pub struct Animation {
    timeline: Timeline,
    #[allow(dead_code)] // Held for its Drop
    pin: WindowPin,
}

impl Animation {
    /// Returns the animation's timeline.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline { &self.timeline }
}

/// Maps each animating window to its animation.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    animations: HashMap<WindowId, Animation>,
}

impl AnimationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers an animation for `window`.
    ///
    /// Returns `false` and leaves the existing entry untouched if the window
    /// is already animating. `pin` is only called for new entries, so a
    /// window never holds more than one reference.
    pub fn start(
        &mut self,
        window: WindowId,
        timeline: Timeline,
        pin: impl FnOnce() -> WindowPin,
    ) -> bool {
        if self.animations.contains_key(&window) {
            return false;
        }
        let pin = pin();
        debug_assert_eq!(pin.window(), window, "pin taken for the wrong window");
        self.animations.insert(window, Animation { timeline, pin });
        true
    }

    /// Advances every timeline by `delta` and drops the finished ones.
    ///
    /// Returns the windows whose animation finished during this call.
    pub fn advance(&mut self, delta: Duration) -> Vec<WindowId> {
        let mut finished = Vec::new();
        self.animations.retain(|window, animation| {
            animation.timeline.update(delta);
            if animation.timeline.done() {
                finished.push(*window);
                false
            } else {
                true
            }
        });
        finished
    }

    /// Removes the animation of `window`, releasing its pin.
    ///
    /// Returns whether the window was animating.
    pub fn remove(&mut self, window: WindowId) -> bool { self.animations.remove(&window).is_some() }

    /// Returns the animation of `window`, if any.
    #[must_use]
    pub fn get(&self, window: WindowId) -> Option<&Animation> { self.animations.get(&window) }

    /// Returns whether `window` is animating.
    #[must_use]
    pub fn contains(&self, window: WindowId) -> bool { self.animations.contains_key(&window) }

    /// Returns the eased progress of `window`'s animation.
    #[must_use]
    pub fn value(&self, window: WindowId) -> Option<f64> {
        self.animations.get(&window).map(|a| a.timeline.value())
    }

    /// Returns the animating windows in ascending id order.
    #[must_use]
    pub fn windows(&self) -> Vec<WindowId> {
        let mut windows: Vec<_> = self.animations.keys().copied().collect();
        windows.sort_unstable();
        windows
    }

    /// Number of running animations.
    #[must_use]
    pub fn len(&self) -> usize { self.animations.len() }

    /// Returns whether no animation is running.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.animations.is_empty() }
}
