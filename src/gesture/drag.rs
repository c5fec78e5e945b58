//! Drag recognition.

use core::time::Duration;

use eddy_core::{Clock, GestureError, InstantClock, Point, Vector};

use super::{Callback, Gesture, GesturePhase};

/// Distance the pointer must travel from its start before a drag is reported.
pub const DEFAULT_MINIMUM_DISTANCE: f32 = 10.0;

/// Seconds of motion at the current velocity added to predicted end values.
///
/// A tuning constant, not a physical model of deceleration.
pub const DEFAULT_PREDICTION_FACTOR: f32 = 0.25;

/// Tunables of a [`DragGesture`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DragConfig {
    /// Translation length a change must exceed to count as a drag.
    pub minimum_distance: f32,
    /// Extrapolation applied to the velocity for predicted end values.
    pub prediction_factor: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            minimum_distance: DEFAULT_MINIMUM_DISTANCE,
            prediction_factor: DEFAULT_PREDICTION_FACTOR,
        }
    }
}

impl DragConfig {
    /// Checks that both tunables are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`GestureError`].
    pub fn validate(&self) -> Result<(), GestureError> {
        if !self.minimum_distance.is_finite() || self.minimum_distance < 0.0 {
            return Err(GestureError::InvalidMinimumDistance(self.minimum_distance));
        }
        if !self.prediction_factor.is_finite() || self.prediction_factor < 0.0 {
            return Err(GestureError::InvalidPredictionFactor(self.prediction_factor));
        }
        Ok(())
    }
}

/// Snapshot reported to drag callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragValue {
    /// The location of the drag gesture's first event.
    pub start_location: Point,
    /// The location of the drag gesture's current event.
    pub location: Point,
    /// A prediction, based on the current drag velocity, of where the final
    /// location will be if dragging stopped now.
    pub predicted_end_location: Point,
    /// The total translation from the start of the drag gesture to the current event.
    pub translation: Vector,
    /// A prediction, based on the current drag velocity, of what the final
    /// translation will be if dragging stopped now.
    pub predicted_end_translation: Vector,
}

/// Recognizes a pointer moving beyond a minimum distance.
///
/// The recognizer is idle until [`GesturePhase::Began`] records a start
/// location, and returns to idle on `Ended` or `Cancelled`. While tracking,
/// every `Changed` event that moves further than the minimum distance from
/// the start updates the velocity and reports a [`DragValue`] to the changed
/// callback. `Ended` reports the final value, with predictions equal to the
/// actual location, to the ended callback. Events that arrive while idle are
/// ignored.
#[derive(Debug, Clone)]
pub struct DragGesture<C: Clock = InstantClock> {
    config: DragConfig,
    clock: C,
    start_location: Option<Point>,
    previous_timestamp: Option<Duration>,
    last_translation: Vector,
    velocity: Vector,
    on_ended: Option<Callback<DragValue>>,
    on_changed: Option<Callback<DragValue>>,
}

impl DragGesture {
    /// Creates a drag gesture with the default minimum distance of 10 points.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(DragConfig::default(), InstantClock::new())
    }

    /// Creates a drag gesture that succeeds once the pointer travels more than
    /// `minimum_distance` points.
    ///
    /// Negative and non-finite distances are clamped to `0.0`, so any movement
    /// away from the start counts. Use [`try_from_config`](Self::try_from_config)
    /// to reject them instead.
    #[must_use]
    pub fn with_minimum_distance(minimum_distance: f32) -> Self {
        let minimum_distance = if minimum_distance.is_finite() && minimum_distance >= 0.0 {
            minimum_distance
        } else {
            tracing::trace!(minimum_distance, "clamping drag minimum distance to zero");
            0.0
        };

        Self::from_parts(
            DragConfig {
                minimum_distance,
                ..DragConfig::default()
            },
            InstantClock::new(),
        )
    }

    /// Creates a drag gesture from a validated configuration.
    ///
    /// # Errors
    ///
    /// Fails when [`DragConfig::validate`] rejects `config`.
    pub fn try_from_config(config: DragConfig) -> Result<Self, GestureError> {
        config.validate()?;
        Ok(Self::from_parts(config, InstantClock::new()))
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DragGesture<C> {
    fn from_parts(config: DragConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            start_location: None,
            previous_timestamp: None,
            last_translation: Vector::ZERO,
            velocity: Vector::ZERO,
            on_ended: None,
            on_changed: None,
        }
    }

    /// Replaces the time source used for velocity estimation.
    #[must_use]
    pub fn clock<D: Clock>(self, clock: D) -> DragGesture<D> {
        DragGesture {
            config: self.config,
            clock,
            start_location: self.start_location,
            previous_timestamp: self.previous_timestamp,
            last_translation: self.last_translation,
            velocity: self.velocity,
            on_ended: self.on_ended,
            on_changed: self.on_changed,
        }
    }

    /// Returns the recognizer's configuration.
    #[must_use]
    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Returns the configured minimum drag distance.
    #[must_use]
    pub const fn minimum_distance(&self) -> f32 {
        self.config.minimum_distance
    }

    /// Returns where the current interaction began, if one is in progress.
    #[must_use]
    pub const fn start_location(&self) -> Option<Point> {
        self.start_location
    }

    /// Returns true between `Began` and the matching `Ended` or `Cancelled`.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start_location.is_some()
    }

    /// Returns the velocity, in points per second, at the last reported change.
    #[must_use]
    pub const fn velocity(&self) -> Vector {
        self.velocity
    }

    fn began(&mut self, location: Point) {
        tracing::trace!(?location, "drag began");
        self.start_location = Some(location);
        self.previous_timestamp = None;
        self.last_translation = Vector::ZERO;
        self.velocity = Vector::ZERO;
    }

    fn changed(&mut self, start_location: Point, location: Point) {
        let translation = location - start_location;
        let distance = translation.length();

        if distance <= self.config.minimum_distance {
            tracing::trace!(distance, minimum = self.config.minimum_distance, "drag below threshold");
            return;
        }

        let now = self.clock.now();
        let elapsed = self
            .previous_timestamp
            .map_or(Duration::ZERO, |previous| now.saturating_sub(previous));
        let velocity = velocity_over(translation - self.last_translation, elapsed);

        self.previous_timestamp = Some(now);
        self.last_translation = translation;
        self.velocity = velocity;

        let offset = velocity * self.config.prediction_factor;
        let value = DragValue {
            start_location,
            location,
            predicted_end_location: location + offset,
            translation,
            predicted_end_translation: translation + offset,
        };

        tracing::trace!(?translation, ?velocity, "drag changed");
        if let Some(action) = &self.on_changed {
            action.call(value);
        }
    }

    fn ended(&self, location: Point) {
        if let Some(start_location) = self.start_location {
            let translation = location - start_location;
            tracing::trace!(?translation, "drag ended");
            if let Some(action) = &self.on_ended {
                action.call(DragValue {
                    start_location,
                    location,
                    predicted_end_location: location,
                    translation,
                    predicted_end_translation: translation,
                });
            }
        }
    }
}

/// Per-axis rate of change; zero when no time has passed.
fn velocity_over(delta: Vector, elapsed: Duration) -> Vector {
    let seconds = elapsed.as_secs_f32();
    if seconds > 0.0 {
        delta / seconds
    } else {
        Vector::ZERO
    }
}

impl<C: Clock> Gesture for DragGesture<C> {
    type Value = DragValue;
    type Body = Self;

    fn on_phase_change(&mut self, phase: GesturePhase) -> Result<(), GestureError> {
        match phase {
            GesturePhase::Began(location) => self.began(location),
            GesturePhase::Changed(location) => {
                if let Some(start_location) = self.start_location {
                    self.changed(start_location, location);
                }
            }
            GesturePhase::Ended(location) => self.ended(location),
            GesturePhase::Cancelled => {
                if self.start_location.is_some() {
                    tracing::trace!("drag cancelled");
                }
            }
        }
        if phase.is_terminal() {
            self.start_location = None;
        }
        Ok(())
    }

    fn with_ended(&self, action: Callback<DragValue>) -> Self {
        let mut gesture = self.clone();
        gesture.on_ended = Some(action);
        gesture
    }

    fn with_changed(&self, action: Callback<DragValue>) -> Self {
        let mut gesture = self.clone();
        gesture.on_changed = Some(action);
        gesture
    }

    fn body(&self) -> Self {
        self.clone()
    }
}
