use smoothcd_core::{Approach, Damping, Motion, Outcome, Smoother};

use crate::Coefficients;

/// The base step with the displacement clamped to `±max_speed * smooth_time`.
///
/// The object chases a target that is at most `max_speed * smooth_time` away,
/// which bounds how fast it can accelerate toward a distant target. With
/// [`MaxSpeed::Unlimited`](smoothcd_core::MaxSpeed::Unlimited) this is
/// identical to [`Base`](crate::Base).
///
/// This is the default smoother.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeedClamped;

impl Smoother for SpeedClamped {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        Outcome::unmeasured(clamped_step(approach.motion, approach.target, damping))
    }
}

/// One speed-clamped step toward `target`.
pub(crate) fn clamped_step(motion: Motion, target: f64, damping: &Damping) -> Motion {
    let change = damping
        .max_speed
        .clamp_change(motion.position - target, damping.smooth_time());

    Coefficients::new(damping).damp(motion, motion.position - change)
}
