use smoothcd_core::{Approach, Motion, Smoother};

use crate::{SampleRecord, SimulationConfig, TargetState};

/// A single object that follows a target across host-driven steps.
///
/// The follower owns only the physical state carried between calls: the
/// object's motion and the current and previous target. The caller owns the
/// cadence and supplies the input and configuration on every call, so a host
/// loop can drive a follower directly without a [`Stepper`](crate::Stepper).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Follower {
    motion: Motion,
    target: TargetState,
}

impl Follower {
    /// A follower at rest at the origin, with its target on it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A follower starting from `motion`, with its target at `target`.
    #[must_use]
    pub fn starting_at(motion: Motion, target: f64) -> Self {
        Self {
            motion,
            target: TargetState {
                current: target,
                previous: target,
            },
        }
    }

    /// The object's current motion.
    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// The current and previous target.
    #[must_use]
    pub fn target(&self) -> TargetState {
        self.target
    }

    /// Advances one step with `input` and records the result as step `step`.
    ///
    /// Moves the target under the configured positioning policy, then applies
    /// the configured smoothing function to the object.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, step: usize, input: f64, config: &SimulationConfig) -> SampleRecord {
        let tracker = config.tracker();
        tracker.update(&mut self.target, input, self.motion.position);

        let approach = Approach::toward(self.motion, self.target.current)
            .with_previous_target(self.target.previous)
            .with_target_velocity(tracker.target_velocity(&self.target, input));

        let outcome = config.engine().smooth(&approach, &config.damping());
        self.motion = outcome.motion;

        SampleRecord {
            step,
            time: step as f64 * config.delta_time,
            input,
            position: self.motion.position,
            velocity: self.motion.velocity,
            target: self.target.current,
            distance: self.target.current - self.motion.position,
            overshoot: outcome.overshoot,
        }
    }
}
