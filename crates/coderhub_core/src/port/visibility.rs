//! Viewport visibility observation contract.

use serde::{Deserialize, Serialize};

/// Callback fired with `true` when the target enters the viewport and
/// `false` when it leaves.
pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// Intersection options applied by an observer to all of its targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityOptions {
    /// Visible fraction of the target required to count as visible.
    pub threshold: f64,
    /// CSS-style margin grown or shrunk around the viewport.
    pub root_margin: String,
}

impl VisibilityOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold,
            root_margin: root_margin.into(),
        }
    }
}

/// Passive observer of element visibility.
pub trait VisibilityObserver {
    /// Host element type being observed.
    type Target: Clone + 'static;

    /// Starts observing `target`. Replaces any callback already registered
    /// for the same target.
    fn observe(&self, target: &Self::Target, callback: VisibilityCallback);

    /// Stops observing `target`. Safe to call from inside its own callback.
    fn unobserve(&self, target: &Self::Target);
}
