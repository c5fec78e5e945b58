//! Time sources for recognizers.
//!
//! Recognizers that derive velocities need to know how much time passed
//! between events. They read it from a [`Clock`] instead of the system time
//! directly, so tests and replays can drive time by hand.

use core::{cell::Cell, fmt::Debug, time::Duration};
use std::{rc::Rc, time::Instant};

/// A monotonic time source.
pub trait Clock: Clone + Debug {
    /// Time elapsed since an arbitrary, fixed reference point.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`], measuring from its creation.
#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    epoch: Instant,
}

impl InstantClock {
    /// Creates a clock whose reference point is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and advance the
/// clock held by a recognizer.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Sets the clock to an absolute reading.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
