//! Predictive overshoot correction.
//!
//! Both smoothers project the object and the target one smooth time ahead,
//! assuming each keeps its current velocity:
//!
//! ```text
//! projected_target   = target  + target_velocity * smooth_time
//! projected_position = current + velocity        * smooth_time
//! overshoot          = projected_position - projected_target
//! ```
//!
//! and then correct by a fraction `correction ∈ [0, 1]` of that overshoot.

use smoothcd_core::{Approach, Damping, Motion, Outcome, Smoother};

use crate::{Coefficients, clamped::clamped_step};

/// How a predictive smoother applies its correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prediction {
    /// Shift the target against the predicted overshoot. See [`PreAdjust`].
    #[default]
    PreAdjust,

    /// Blend the predicted overshoot into the velocity. See [`VelocityBlend`].
    VelocityBlend,
}

/// Returns the overshoot predicted one smooth time ahead.
#[must_use]
pub fn predicted_overshoot(approach: &Approach, smooth_time: f64) -> f64 {
    let projected_target = approach.target + approach.target_velocity * smooth_time;
    let projected_position =
        approach.motion.position + approach.motion.velocity * smooth_time;

    projected_position - projected_target
}

/// Shifts the target by `-overshoot * correction`, then takes a speed-clamped step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreAdjust {
    correction: f64,
}

impl PreAdjust {
    /// Creates the smoother; `correction` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(correction: f64) -> Self {
        Self {
            correction: correction.clamp(0.0, 1.0),
        }
    }
}

impl Smoother for PreAdjust {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        let overshoot = predicted_overshoot(approach, damping.smooth_time());
        let adjusted_target = approach.target - overshoot * self.correction;

        Outcome::measured(
            clamped_step(approach.motion, adjusted_target, damping),
            overshoot,
        )
    }
}

/// Adds a fraction of the predicted overshoot rate to the velocity, then
/// takes an unclamped step.
///
/// The velocity is only adjusted when the predicted overshoot points the same
/// way as the object's approach to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityBlend {
    correction: f64,
}

impl VelocityBlend {
    /// Creates the smoother; `correction` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(correction: f64) -> Self {
        Self {
            correction: correction.clamp(0.0, 1.0),
        }
    }
}

impl Smoother for VelocityBlend {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        let smooth_time = damping.smooth_time();
        let overshoot = predicted_overshoot(approach, smooth_time);

        let mut motion = approach.motion;
        if same_direction(overshoot, approach.distance()) {
            motion.velocity += lerp(0.0, overshoot / smooth_time, self.correction);
        }

        Outcome::measured(
            Coefficients::new(damping).damp(motion, approach.target),
            overshoot,
        )
    }
}

fn same_direction(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
