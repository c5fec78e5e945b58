//! Live dispatch of phase events.

use eddy_core::GestureError;

use super::{Gesture, GesturePhase};

/// Owns the live recognizer for one attached gesture.
///
/// A session resolves a gesture chain once, through [`Gesture::body`], and
/// keeps the resulting recognizer so its tracking state survives between
/// phase events. The declarative gesture it was created from is left alone.
#[derive(Debug)]
pub struct GestureSession<B> {
    live: B,
}

impl<B: Gesture> GestureSession<B> {
    /// Resolves `gesture` and starts a session with its body.
    pub fn new<G>(gesture: &G) -> Self
    where
        G: Gesture<Body = B>,
    {
        Self {
            live: gesture.body(),
        }
    }

    /// Forwards one phase event to the live recognizer.
    ///
    /// # Errors
    ///
    /// Propagates errors from the recognizer.
    pub fn dispatch(&mut self, phase: GesturePhase) -> Result<(), GestureError> {
        tracing::trace!(?phase, "dispatching gesture phase");
        self.live.on_phase_change(phase)
    }

    /// Forwards a sequence of phase events, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error from the recognizer.
    pub fn dispatch_all(
        &mut self,
        phases: impl IntoIterator<Item = GesturePhase>,
    ) -> Result<(), GestureError> {
        phases.into_iter().try_for_each(|phase| self.dispatch(phase))
    }

    /// Returns the live recognizer.
    #[must_use]
    pub const fn gesture(&self) -> &B {
        &self.live
    }

    /// Ends the session and returns the live recognizer.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.live
    }
}
