use crate::{Approach, Damping, Motion};

/// The result of one smoothing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Position and velocity after the step.
    pub motion: Motion,

    /// Signed overshoot, for smoothers that measure one.
    ///
    /// Guards report how far the unguarded step would have passed the target
    /// (zero when no correction was needed). Predictive smoothers report the
    /// predicted overshoot they corrected for.
    pub overshoot: Option<f64>,
}

impl Outcome {
    /// An outcome with no overshoot measurement.
    #[must_use]
    pub fn unmeasured(motion: Motion) -> Self {
        Self {
            motion,
            overshoot: None,
        }
    }

    /// An outcome carrying an overshoot measurement.
    #[must_use]
    pub fn measured(motion: Motion, overshoot: f64) -> Self {
        Self {
            motion,
            overshoot: Some(overshoot),
        }
    }
}

/// A damping function that advances an object one step toward its target.
///
/// Implementations must be pure: the same approach and damping always yield
/// the same outcome, and nothing is carried between calls.
pub trait Smoother {
    /// Returns the motion after one step of `damping.delta_time`.
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome;
}

impl<S: Smoother + ?Sized> Smoother for &S {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        (**self).smooth(approach, damping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Jumps straight to the target.
    struct Snap;

    impl Smoother for Snap {
        fn smooth(&self, approach: &Approach, _damping: &Damping) -> Outcome {
            Outcome::unmeasured(Motion::at_rest(approach.target))
        }
    }

    fn step_with(smoother: impl Smoother) -> Outcome {
        let approach = Approach::toward(Motion::at_rest(0.0), 4.0);
        smoother.smooth(&approach, &Damping::unlimited(1.0, 0.1))
    }

    #[test]
    fn references_are_smoothers() {
        let outcome = step_with(&Snap);

        assert_eq!(outcome.motion, Motion::at_rest(4.0));
        assert_eq!(outcome.overshoot, None);
    }
}
