//! Gesture phase model and the recognizer capability.
//!
//! A physical interaction reaches a recognizer as a stream of
//! [`GesturePhase`] events, always in the order
//! `Began → Changed* → (Ended | Cancelled)`. The event source is responsible for
//! that ordering; recognizers neither buffer nor reorder.
//!
//! Recognizers implement [`Gesture`]. Attaching callbacks never mutates a
//! recognizer: [`Gesture::with_ended`] and [`Gesture::with_changed`] hand back a
//! configured copy, and [`Gesture::body`] yields the recognizer that actually
//! receives phase events.

use core::{any::type_name, fmt::Debug};
use std::rc::Rc;

use crate::{GestureError, Point};

/// One discrete lifecycle event of a pointer or touch interaction.
///
/// Locations are expressed in the recognizer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    /// The interaction started at the given location.
    Began(Point),
    /// The pointer moved to the given location.
    Changed(Point),
    /// The interaction finished at the given location.
    Ended(Point),
    /// The interaction was aborted by the system.
    Cancelled,
}

impl GesturePhase {
    /// Returns the location carried by this phase, if any.
    #[must_use]
    pub const fn location(&self) -> Option<Point> {
        match self {
            Self::Began(location) | Self::Changed(location) | Self::Ended(location) => {
                Some(*location)
            }
            Self::Cancelled => None,
        }
    }

    /// Returns true for the phases that finish an interaction.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended(_) | Self::Cancelled)
    }
}

/// A shareable callback slot receiving gesture values.
///
/// Cloning a callback shares the underlying closure, so copies of a
/// recognizer invoke the same action.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Callback<T> {
    /// Wraps a closure into a callback.
    pub fn new(action: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(action))
    }

    /// Invokes the callback with `value`.
    pub fn call(&self, value: T) {
        (self.0)(value);
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Debug for Callback<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Callback<{}>", type_name::<T>())
    }
}

impl<T, F> From<F> for Callback<T>
where
    F: Fn(T) + 'static,
{
    fn from(action: F) -> Self {
        Self::new(action)
    }
}

/// A recognizer that turns a phase stream into gesture values.
///
/// Concrete recognizers own their live state and mutate it only inside
/// [`on_phase_change`](Self::on_phase_change). Decorators wrap another gesture
/// and only contribute configuration; they resolve to a concrete recognizer
/// through [`body`](Self::body) and reject raw phase events.
pub trait Gesture: Clone + Debug {
    /// The value reported to callbacks.
    type Value;

    /// The configured recognizer that receives phase events.
    type Body: Gesture<Value = Self::Value>;

    /// Feeds one phase event to the recognizer.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::ProxyDispatch`] when called on a decorator.
    fn on_phase_change(&mut self, phase: GesturePhase) -> Result<(), GestureError>;

    /// Returns a copy whose terminal callback is replaced by `action`.
    #[must_use]
    fn with_ended(&self, action: Callback<Self::Value>) -> Self;

    /// Returns a copy whose continuous callback is replaced by `action`.
    #[must_use]
    fn with_changed(&self, action: Callback<Self::Value>) -> Self;

    /// Resolves this gesture into the recognizer that should receive phases.
    fn body(&self) -> Self::Body;
}
