/// Smallest smooth time a [`Damping`] will hold.
///
/// Smaller values, including zero, negative, and NaN inputs, are raised to
/// this floor so that `2 / smooth_time` stays finite.
pub const MIN_SMOOTH_TIME: f64 = 1e-4;

/// Upper bound on how fast a speed-clamped smoother may chase its target.
///
/// `Unlimited` is the "no limit" sentinel. It is kept separate from
/// `Limited(f64::INFINITY)` so clamping never has to compute with infinities;
/// [`MaxSpeed::from`] maps any non-finite positive speed to `Unlimited`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaxSpeed {
    #[default]
    Unlimited,
    Limited(f64),
}

impl MaxSpeed {
    /// Largest displacement a smoother may consider for the given smooth time.
    ///
    /// Returns `None` when unlimited, including a `Limited(f64::INFINITY)`
    /// built without going through [`MaxSpeed::from`].
    #[must_use]
    pub fn max_change(self, smooth_time: f64) -> Option<f64> {
        match self.normalized() {
            Self::Unlimited => None,
            Self::Limited(speed) => Some((speed * smooth_time).abs()),
        }
    }

    /// Clamps `change` to `±max_speed * smooth_time`.
    ///
    /// A no-op when unlimited.
    #[must_use]
    pub fn clamp_change(self, change: f64, smooth_time: f64) -> f64 {
        match self.max_change(smooth_time) {
            Some(limit) => change.min(limit).max(-limit),
            None => change,
        }
    }

    /// Returns `true` for the "no limit" sentinel, or a limit of `+∞`.
    #[must_use]
    pub fn is_unlimited(self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(speed) => speed.is_infinite() && speed > 0.0,
        }
    }

    /// Maps a `+∞` limit to [`MaxSpeed::Unlimited`].
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_unlimited() {
            Self::Unlimited
        } else {
            self
        }
    }
}

impl From<f64> for MaxSpeed {
    fn from(speed: f64) -> Self {
        if speed.is_infinite() && speed > 0.0 {
            Self::Unlimited
        } else {
            Self::Limited(speed)
        }
    }
}

/// Damping parameters shared by every smoothing function.
///
/// The smooth time is the characteristic time of the critically damped
/// response; a stationary target is reached to within about 1% after five
/// smooth times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damping {
    smooth_time: f64,
    pub max_speed: MaxSpeed,
    pub delta_time: f64,
}

impl Damping {
    /// Creates damping parameters.
    ///
    /// `smooth_time` is raised to [`MIN_SMOOTH_TIME`] if it is smaller. This
    /// is an implicit clamp, not a validation failure. A `+∞` speed limit is
    /// stored as [`MaxSpeed::Unlimited`].
    #[must_use]
    pub fn new(smooth_time: f64, max_speed: MaxSpeed, delta_time: f64) -> Self {
        Self {
            smooth_time: smooth_time.max(MIN_SMOOTH_TIME),
            max_speed: max_speed.normalized(),
            delta_time,
        }
    }

    /// Unclamped damping over `delta_time`.
    #[must_use]
    pub fn unlimited(smooth_time: f64, delta_time: f64) -> Self {
        Self::new(smooth_time, MaxSpeed::Unlimited, delta_time)
    }

    /// The floored smooth time.
    #[must_use]
    pub fn smooth_time(&self) -> f64 {
        self.smooth_time
    }
}
