//! Callback attachment for arbitrary gestures.

use core::{any::type_name, fmt};

use eddy_core::GestureError;

use super::{Callback, Gesture, GesturePhase};

/// A gesture decorated with a terminal callback and an optional continuous one.
///
/// `EndedGesture` never tracks an interaction itself. It resolves, through
/// [`Gesture::body`], into a copy of the wrapped gesture configured with its
/// callbacks; that copy is what receives phase events. Sending phases to the
/// decorator directly is reported as [`GestureError::ProxyDispatch`].
///
/// Decorators nest. Resolving an outer decorator configures the inner one
/// first, so the outermost callbacks replace inner ones.
pub struct EndedGesture<G: Gesture> {
    gesture: G,
    on_ended: Callback<G::Value>,
    on_changed: Option<Callback<G::Value>>,
}

impl<G: Gesture> EndedGesture<G> {
    /// Wraps `gesture` so `on_ended` runs when an interaction ends.
    pub fn new(gesture: G, on_ended: impl Into<Callback<G::Value>>) -> Self {
        Self {
            gesture,
            on_ended: on_ended.into(),
            on_changed: None,
        }
    }

    /// Returns a copy that also runs `action` on every reported change.
    #[must_use]
    pub fn on_changed(&self, action: impl Fn(G::Value) + 'static) -> Self {
        self.with_changed(Callback::new(action))
    }

    /// Returns the decorated gesture.
    #[must_use]
    pub const fn base(&self) -> &G {
        &self.gesture
    }
}

impl<G: Gesture> Clone for EndedGesture<G> {
    fn clone(&self) -> Self {
        Self {
            gesture: self.gesture.clone(),
            on_ended: self.on_ended.clone(),
            on_changed: self.on_changed.clone(),
        }
    }
}

impl<G: Gesture> fmt::Debug for EndedGesture<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndedGesture")
            .field("gesture", &self.gesture)
            .field("on_ended", &self.on_ended)
            .field("on_changed", &self.on_changed)
            .finish()
    }
}

impl<G: Gesture> Gesture for EndedGesture<G> {
    type Value = G::Value;
    type Body = G::Body;

    fn on_phase_change(&mut self, phase: GesturePhase) -> Result<(), GestureError> {
        let gesture = type_name::<Self>();
        tracing::error!(gesture, ?phase, "phase change sent to a proxy gesture");
        Err(GestureError::ProxyDispatch { gesture })
    }

    fn with_ended(&self, action: Callback<G::Value>) -> Self {
        let mut gesture = self.clone();
        gesture.on_ended = action;
        gesture
    }

    fn with_changed(&self, action: Callback<G::Value>) -> Self {
        let mut gesture = self.clone();
        gesture.on_changed = Some(action);
        gesture
    }

    fn body(&self) -> G::Body {
        let mut gesture = self.gesture.with_ended(self.on_ended.clone());
        if let Some(action) = &self.on_changed {
            gesture = gesture.with_changed(action.clone());
        }
        gesture.body()
    }
}
