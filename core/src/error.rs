//! Error types shared across Eddy crates.

use thiserror::Error;

/// Errors raised while configuring or driving a gesture recognizer.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GestureError {
    /// A phase event was sent to a decorator instead of its resolved body.
    ///
    /// Decorators only carry callbacks; the recognizer returned by
    /// [`Gesture::body`](crate::Gesture::body) is the one that tracks state.
    #[error("`{gesture}` is a proxy gesture, phase changes must be dispatched to its body")]
    ProxyDispatch {
        /// Fully qualified type name of the decorator that received the event.
        gesture: &'static str,
    },
    /// The minimum drag distance was negative or not finite.
    #[error("minimum distance must be a finite, non-negative number (got {0})")]
    InvalidMinimumDistance(f32),
    /// The prediction factor was negative or not finite.
    #[error("prediction factor must be a finite, non-negative number (got {0})")]
    InvalidPredictionFactor(f32),
}
