use smoothcd_core::{Damping, MaxSpeed};
use smoothcd_smoothing::{DEFAULT_OVERSHOOT_CORRECTION, Smoothing, SmoothingEngine};
use thiserror::Error;

use crate::{Phase, Positioning, TargetTracker, Waveform};

/// Largest number of steps a single run may take.
pub const MAX_STEPS: usize = 10_000_000;

/// Configuration for a simulation run.
///
/// A run copies the configuration when it starts, so later edits never
/// affect a run in progress.
///
/// # Builder Pattern
/// ```
/// use smoothcd_simulation::{MaxSpeed, Positioning, SimulationConfig, Smoothing};
///
/// let config = SimulationConfig::new()
///     .with_positioning(Positioning::Absolute)
///     .with_smoothing(Smoothing::MovingTarget)
///     .with_smooth_time(0.5)
///     .with_max_speed(MaxSpeed::Unlimited)
///     .with_duration(4.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SimulationConfig {
    /// How input becomes a target position. Default: relative.
    pub positioning: Positioning,
    /// Smoothing function. Default: speed-clamped.
    pub smoothing: Smoothing,
    /// Characteristic damping time, floored at `1e-4`. Default: 1.
    pub smooth_time: f64,
    /// Speed limit for clamped variants. Default: 3.
    pub max_speed: MaxSpeed,
    /// Target gain applied to the input. Default: 1.
    pub speed: f64,
    /// Fixed step size. Default: 1/30.
    pub delta_time: f64,
    /// Length of the rising phase. Default: 1.
    pub positive: f64,
    /// Length of each decay-to-zero phase. Default: 1.
    pub neutral: f64,
    /// Length of the falling phase. Default: 1.
    pub negative: f64,
    /// Largest rate of change of the input. Default: 3.
    pub input_change_velocity: f64,
    /// Fraction of the predicted overshoot to correct, in `[0, 1]`. Default: 0.5.
    pub overshoot_correction: f64,
    /// Total simulated time. Default: 1.
    pub duration: f64,
    /// Position of the inspect step within the run, in `[0, 1]`. Default: 0.
    pub inspect_fraction: f64,
}

/// Errors that can occur when validating a simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delta_time must be finite and positive")]
    DeltaTime,

    #[error("duration must be finite and positive")]
    Duration,

    #[error("duration / delta_time exceeds {MAX_STEPS} steps")]
    TooManySteps,

    #[error("inspect_fraction must be in [0, 1]")]
    InspectFraction,

    #[error("max_speed must be positive")]
    MaxSpeed,

    #[error("speed must be finite")]
    Speed,

    #[error("{phase:?} duration must be finite and non-negative")]
    PhaseDuration { phase: Phase },

    #[error("input_change_velocity must be finite and positive")]
    InputChangeVelocity,

    #[error("overshoot_correction must be in [0, 1]")]
    OvershootCorrection,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            positioning: Positioning::Relative,
            smoothing: Smoothing::SpeedClamped,
            smooth_time: 1.0,
            max_speed: MaxSpeed::Limited(3.0),
            speed: 1.0,
            delta_time: 1.0 / 30.0,
            positive: 1.0,
            neutral: 1.0,
            negative: 1.0,
            input_change_velocity: 3.0,
            overshoot_correction: DEFAULT_OVERSHOOT_CORRECTION,
            duration: 1.0,
            inspect_fraction: 0.0,
        }
    }
}

impl SimulationConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every field that would make a run meaningless.
    ///
    /// A non-positive `smooth_time` is not an error; it is floored when the
    /// run starts.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delta_time.is_finite() || self.delta_time <= 0.0 {
            return Err(ConfigError::DeltaTime);
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ConfigError::Duration);
        }
        #[allow(clippy::cast_precision_loss)]
        let max_steps = MAX_STEPS as f64;
        if (self.duration / self.delta_time).round() > max_steps {
            return Err(ConfigError::TooManySteps);
        }
        if !(0.0..=1.0).contains(&self.inspect_fraction) {
            return Err(ConfigError::InspectFraction);
        }
        if let MaxSpeed::Limited(speed) = self.max_speed {
            if speed.is_nan() || speed <= 0.0 {
                return Err(ConfigError::MaxSpeed);
            }
        }
        if !self.speed.is_finite() {
            return Err(ConfigError::Speed);
        }
        for (phase, length) in [
            (Phase::RisingToPositive, self.positive),
            (Phase::DecayToZeroFromPositive, self.neutral),
            (Phase::FallingToNegative, self.negative),
        ] {
            if !length.is_finite() || length < 0.0 {
                return Err(ConfigError::PhaseDuration { phase });
            }
        }
        if !self.input_change_velocity.is_finite() || self.input_change_velocity <= 0.0 {
            return Err(ConfigError::InputChangeVelocity);
        }
        if !(0.0..=1.0).contains(&self.overshoot_correction) {
            return Err(ConfigError::OvershootCorrection);
        }
        Ok(())
    }

    /// Number of steps in a run, `round(duration / delta_time)` and at least one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> usize {
        ((self.duration / self.delta_time).round() as usize).max(1)
    }

    /// Index of the snapshotted step, `round(inspect_fraction * steps)`
    /// clamped to the run.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn inspect_step(&self) -> usize {
        let steps = self.steps();
        let step = (self.inspect_fraction * steps as f64).round() as usize;
        step.min(steps - 1)
    }

    /// Damping parameters for every step.
    #[must_use]
    pub fn damping(&self) -> Damping {
        Damping::new(self.smooth_time, self.max_speed, self.delta_time)
    }

    /// The smoothing function with its overshoot correction.
    #[must_use]
    pub fn engine(&self) -> SmoothingEngine {
        self.smoothing.engine(self.overshoot_correction)
    }

    /// The input signal.
    #[must_use]
    pub fn waveform(&self) -> Waveform {
        Waveform {
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
            input_change_velocity: self.input_change_velocity,
            delta_time: self.delta_time,
        }
    }

    /// The target tracker.
    #[must_use]
    pub fn tracker(&self) -> TargetTracker {
        TargetTracker::new(self.positioning, self.speed, self.delta_time)
    }

    /// Set the positioning policy.
    #[must_use]
    pub fn with_positioning(mut self, positioning: Positioning) -> Self {
        self.positioning = positioning;
        self
    }

    /// Set the smoothing function.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the smooth time.
    #[must_use]
    pub fn with_smooth_time(mut self, smooth_time: f64) -> Self {
        self.smooth_time = smooth_time;
        self
    }

    /// Set the speed limit. Accepts a [`MaxSpeed`] or a plain `f64`, where
    /// `f64::INFINITY` means no limit.
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: impl Into<MaxSpeed>) -> Self {
        self.max_speed = max_speed.into();
        self
    }

    /// Set the target gain.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the step size.
    #[must_use]
    pub fn with_delta_time(mut self, delta_time: f64) -> Self {
        self.delta_time = delta_time;
        self
    }

    /// Set the three phase lengths of the input signal.
    #[must_use]
    pub fn with_phases(mut self, positive: f64, neutral: f64, negative: f64) -> Self {
        self.positive = positive;
        self.neutral = neutral;
        self.negative = negative;
        self
    }

    /// Set the input's rate limit.
    #[must_use]
    pub fn with_input_change_velocity(mut self, input_change_velocity: f64) -> Self {
        self.input_change_velocity = input_change_velocity;
        self
    }

    /// Set the overshoot correction coefficient.
    #[must_use]
    pub fn with_overshoot_correction(mut self, overshoot_correction: f64) -> Self {
        self.overshoot_correction = overshoot_correction;
        self
    }

    /// Set the total simulated time.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the inspect fraction.
    #[must_use]
    pub fn with_inspect_fraction(mut self, inspect_fraction: f64) -> Self {
        self.inspect_fraction = inspect_fraction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn step_count_rounds_and_is_at_least_one() {
        let config = SimulationConfig::new().with_delta_time(0.1);

        assert_eq!(config.with_duration(1.0).steps(), 10);
        assert_eq!(config.with_duration(1.04).steps(), 10);
        assert_eq!(config.with_duration(1.06).steps(), 11);
        assert_eq!(config.with_duration(0.01).steps(), 1);
    }

    #[test]
    fn inspect_step_is_clamped_to_run() {
        let config = SimulationConfig::new().with_delta_time(0.1).with_duration(1.0);

        assert_eq!(config.with_inspect_fraction(0.0).inspect_step(), 0);
        assert_eq!(config.with_inspect_fraction(0.44).inspect_step(), 4);
        assert_eq!(config.with_inspect_fraction(1.0).inspect_step(), 9);
    }

    #[test]
    fn rejects_invalid_fields() {
        let base = SimulationConfig::default();
        let cases = [
            (base.with_delta_time(0.0), ConfigError::DeltaTime),
            (base.with_delta_time(f64::NAN), ConfigError::DeltaTime),
            (base.with_duration(-1.0), ConfigError::Duration),
            (base.with_delta_time(1e-9), ConfigError::TooManySteps),
            (base.with_inspect_fraction(1.5), ConfigError::InspectFraction),
            (base.with_inspect_fraction(f64::NAN), ConfigError::InspectFraction),
            (base.with_max_speed(0.0), ConfigError::MaxSpeed),
            (base.with_speed(f64::INFINITY), ConfigError::Speed),
            (
                base.with_phases(1.0, -0.5, 1.0),
                ConfigError::PhaseDuration {
                    phase: Phase::DecayToZeroFromPositive,
                },
            ),
            (
                base.with_input_change_velocity(0.0),
                ConfigError::InputChangeVelocity,
            ),
            (
                base.with_overshoot_correction(1.1),
                ConfigError::OvershootCorrection,
            ),
        ];

        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn degenerate_values_are_accepted() {
        let config = SimulationConfig::default()
            .with_smooth_time(0.0)
            .with_max_speed(f64::INFINITY)
            .with_phases(0.0, 0.0, 0.0);

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_speed, MaxSpeed::Unlimited);
        assert!(config.damping().smooth_time() > 0.0);
    }

    #[test]
    fn infinite_limited_speed_runs_unclamped() {
        let config = SimulationConfig {
            max_speed: MaxSpeed::Limited(f64::INFINITY),
            ..SimulationConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.damping().max_speed, MaxSpeed::Unlimited);
    }
}
