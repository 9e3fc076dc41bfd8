//! In-memory compositor host.
//!
//! Backs the `simulate` CLI command and the test suites. It keeps just enough
//! window state to answer [`EffectsHost`] queries and counts every reference
//! taken and released so callers can check that pins stay balanced.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::{EffectId, EffectsHost, Size, WindowId, WindowPin, WindowType};

/// A window tracked by the simulated host.
#[derive(Clone, Debug)]
pub struct SimWindow {
    /// Window class (`"resource-name resource-class"`).
    pub class: String,
    /// Logical role.
    pub window_type: WindowType,
    /// Whether the window manager manages the window.
    pub managed: bool,
    /// Current size.
    pub size: Size,
}

impl SimWindow {
    /// Creates a managed normal window with the given class and size.
    #[must_use]
    pub fn normal(class: &str, size: Size) -> Self {
        Self {
            class: class.to_string(),
            window_type: WindowType::Normal,
            managed: true,
            size,
        }
    }

    /// Returns a copy with a different window type.
    #[must_use]
    pub fn with_type(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    /// Returns a copy with a different managed flag.
    #[must_use]
    pub fn with_managed(mut self, managed: bool) -> Self {
        self.managed = managed;
        self
    }
}

/// Reference counters for one window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefCounts {
    /// References taken through `pin_window`.
    pub acquired: u32,
    /// References given back by dropped pins.
    pub released: u32,
}

impl RefCounts {
    /// Returns the number of references currently outstanding.
    #[must_use]
    pub const fn outstanding(&self) -> i64 { self.acquired as i64 - self.released as i64 }
}

#[derive(Debug)]
struct SimState {
    windows: BTreeMap<WindowId, SimWindow>,
    grabs: HashMap<WindowId, EffectId>,
    refs: HashMap<WindowId, RefCounts>,
    fullscreen_effect: bool,
    compositing: bool,
    animations: bool,
    time_factor: f64,
    next_id: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            windows: BTreeMap::new(),
            grabs: HashMap::new(),
            refs: HashMap::new(),
            fullscreen_effect: false,
            compositing: true,
            animations: true,
            time_factor: 1.0,
            next_id: 1,
        }
    }
}

/// In-memory [`EffectsHost`] implementation.
///
/// Cloning the host shares its state, the same way every effect in a
/// compositor talks to one window manager.
#[derive(Clone, Debug, Default)]
pub struct SimulatedHost {
    state: Rc<RefCell<SimState>>,
}

impl SimulatedHost {
    /// Creates an empty host with compositing and animations enabled.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Adds a window and returns its freshly allocated id.
    pub fn add_window(&self, window: SimWindow) -> WindowId {
        let mut state = self.state.borrow_mut();
        let id = WindowId(state.next_id);
        state.next_id += 1;
        state.windows.insert(id, window);
        id
    }

    /// Moves a window into its closing state.
    ///
    /// Like a real window manager, a closing window is no longer managed.
    pub fn close_window(&self, window: WindowId) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.managed = false;
        }
    }

    /// Forgets a window entirely.
    pub fn delete_window(&self, window: WindowId) {
        let mut state = self.state.borrow_mut();
        state.windows.remove(&window);
        state.grabs.remove(&window);
    }

    /// Returns the ids of all windows currently known, in creation order.
    #[must_use]
    pub fn window_ids(&self) -> Vec<WindowId> { self.state.borrow().windows.keys().copied().collect() }

    /// Sets whether a full-screen effect is running.
    pub fn set_fullscreen_effect(&self, active: bool) {
        self.state.borrow_mut().fullscreen_effect = active;
    }

    /// Sets the compositing and animation capability flags.
    pub fn set_capabilities(&self, compositing: bool, animations: bool) {
        let mut state = self.state.borrow_mut();
        state.compositing = compositing;
        state.animations = animations;
    }

    /// Sets the global animation speed multiplier.
    pub fn set_time_factor(&self, factor: f64) { self.state.borrow_mut().time_factor = factor; }

    /// Returns the reference counters recorded for a window.
    #[must_use]
    pub fn ref_counts(&self, window: WindowId) -> RefCounts {
        self.state.borrow().refs.get(&window).copied().unwrap_or_default()
    }
}

impl EffectsHost for SimulatedHost {
    fn active_fullscreen_effect(&self) -> bool { self.state.borrow().fullscreen_effect }

    fn is_compositing(&self) -> bool { self.state.borrow().compositing }

    fn animations_supported(&self) -> bool { self.state.borrow().animations }

    fn animation_time_factor(&self) -> f64 { self.state.borrow().time_factor }

    fn window_class(&self, window: WindowId) -> Option<String> {
        self.state.borrow().windows.get(&window).map(|w| w.class.clone())
    }

    fn window_type(&self, window: WindowId) -> WindowType {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map_or(WindowType::Other, |w| w.window_type)
    }

    fn is_managed(&self, window: WindowId) -> bool {
        self.state.borrow().windows.get(&window).is_some_and(|w| w.managed)
    }

    fn window_size(&self, window: WindowId) -> Option<Size> {
        self.state.borrow().windows.get(&window).map(|w| w.size)
    }

    fn close_grab(&self, window: WindowId) -> Option<EffectId> {
        self.state.borrow().grabs.get(&window).copied()
    }

    fn set_close_grab(&self, window: WindowId, owner: EffectId) {
        self.state.borrow_mut().grabs.insert(window, owner);
    }

    fn pin_window(&self, window: WindowId) -> WindowPin {
        self.state.borrow_mut().refs.entry(window).or_default().acquired += 1;

        let state = Rc::downgrade(&self.state);
        WindowPin::new(window, move |window| {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().refs.entry(window).or_default().released += 1;
            }
        })
    }
}
