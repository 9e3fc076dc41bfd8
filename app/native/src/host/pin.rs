//! Reference guard on a host window.

use std::fmt;

use super::WindowId;

/// Callback invoked once when a pin is dropped.
type Release = Box<dyn FnOnce(WindowId)>;

/// A held reference on a host window.
///
/// The host hands out a pin from [`EffectsHost::pin_window`](super::EffectsHost::pin_window)
/// and gets the reference back when the pin is dropped. Ownership makes the
/// acquire/release pair balanced: a pin cannot be cloned and its release
/// callback runs at most once.
pub struct WindowPin {
    window: WindowId,
    release: Option<Release>,
}

impl WindowPin {
    /// Creates a pin that calls `release` when dropped.
    #[must_use]
    pub fn new(window: WindowId, release: impl FnOnce(WindowId) + 'static) -> Self {
        Self {
            window,
            release: Some(Box::new(release)),
        }
    }

    /// Returns the pinned window.
    #[must_use]
    pub const fn window(&self) -> WindowId { self.window }
}

impl Drop for WindowPin {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(window = %self.window, "releasing window reference");
            release(self.window);
        }
    }
}

impl fmt::Debug for WindowPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowPin")
            .field("window", &self.window)
            .field("armed", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_pin_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);

        let pin = WindowPin::new(WindowId(7), move |window| {
            assert_eq!(window, WindowId(7));
            counter.set(counter.get() + 1);
        });
        assert_eq!(released.get(), 0);

        drop(pin);
        assert_eq!(released.get(), 1);
    }
}
