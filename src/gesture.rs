//! Gesture recognizers and their composition.
//!
//! A recognizer consumes [`GesturePhase`] events and reports values to
//! callbacks. Callbacks are attached without mutating the recognizer:
//!
//! ```ignore
//! let drag = DragGesture::new()
//!     .on_ended(|value| println!("dropped after {:?}", value.translation))
//!     .on_changed(|value| println!("moved to {:?}", value.location));
//!
//! let mut session = GestureSession::new(&drag);
//! session.dispatch(GesturePhase::Began(Point::new(0.0, 0.0)))?;
//! ```
//!
//! [`EndedGesture`] is a proxy: it stores callbacks and resolves, through
//! [`Gesture::body`], into the configured base recognizer. Only that resolved
//! recognizer may receive phase events, which is what [`GestureSession`] does
//! for you.

pub mod drag;
pub mod ended;
pub mod session;

pub use drag::{DragConfig, DragGesture, DragValue};
pub use eddy_core::gesture::{Callback, Gesture, GesturePhase};
pub use ended::EndedGesture;
pub use session::GestureSession;

/// Callback attachment available on every [`Gesture`].
///
/// A continuous callback is attached through the decorator, so observing only
/// changes takes an empty terminal callback:
///
/// ```ignore
/// let drag = DragGesture::new()
///     .on_ended(|_| {})
///     .on_changed(|value| println!("moved by {:?}", value.translation));
/// ```
pub trait GestureExt: Gesture + Sized {
    /// Wraps this gesture so `action` runs when the interaction ends.
    ///
    /// Calling this on an already decorated gesture wraps it again; the
    /// outermost terminal callback wins when the chain is resolved.
    fn on_ended(self, action: impl Fn(Self::Value) + 'static) -> EndedGesture<Self> {
        EndedGesture::new(self, action)
    }
}

impl<G: Gesture> GestureExt for G {}
