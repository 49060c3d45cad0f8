use smoothcd_core::{Approach, Damping, Outcome, Smoother};

use crate::Coefficients;

/// The unclamped critically damped step.
///
/// Ignores [`Damping::max_speed`] entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Base;

impl Smoother for Base {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        let coefficients = Coefficients::new(damping);
        Outcome::unmeasured(coefficients.damp(approach.motion, approach.target))
    }
}
