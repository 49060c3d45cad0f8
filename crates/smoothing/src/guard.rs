//! Overshoot guards layered on top of [`SpeedClamped`](crate::SpeedClamped).

use std::cmp::Ordering;

use smoothcd_core::{Approach, Damping, Motion, Outcome, Smoother};

use crate::clamped::clamped_step;

/// Snaps to a stationary target instead of stepping past it.
///
/// After the speed-clamped step, if the new position is on the far side of
/// the target (or the object was already on it), the object is placed
/// exactly on the target with zero velocity. This removes the small residual
/// oscillation a plain step leaves around a reached target.
///
/// The reported overshoot is how far the unguarded step went past the
/// target, or zero when no snap happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZeroCheck;

impl Smoother for ZeroCheck {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        let current = approach.motion.position;
        let stepped = clamped_step(approach.motion, approach.target, damping);

        snap_if_crossed(current, approach.target, stepped)
    }
}

/// Stops the object when the target moves through it.
///
/// Before smoothing, if the target was on one side of the object last step
/// and is on the other side (or on the object) now, the object stays where it
/// is with zero velocity. Otherwise the step behaves like [`ZeroCheck`].
///
/// An object sitting exactly on the previous target counts as neither side,
/// so any move of the target holds it for that step. This happens on the
/// step after every snap, and on the first step of a run that starts on its
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovingTarget;

impl Smoother for MovingTarget {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        let current = approach.motion.position;

        if target_passed_through(current, approach.previous_target, approach.target) {
            return Outcome::measured(Motion::at_rest(current), 0.0);
        }

        let stepped = clamped_step(approach.motion, approach.target, damping);
        snap_if_crossed(current, approach.target, stepped)
    }
}

/// Returns `true` if a step from `current` to `output` reached or crossed `target`.
///
/// An object that already sat on the target counts as crossed.
#[allow(clippy::float_cmp)]
pub(crate) fn crossed(current: f64, target: f64, output: f64) -> bool {
    target == current || (target > current) == (output > target)
}

#[allow(clippy::float_cmp)]
fn target_passed_through(current: f64, previous_target: f64, target: f64) -> bool {
    target == current || side(previous_target - current) != side(target - current)
}

fn side(offset: f64) -> Option<Ordering> {
    offset.partial_cmp(&0.0)
}

fn snap_if_crossed(current: f64, target: f64, stepped: Motion) -> Outcome {
    if crossed(current, target, stepped.position) {
        Outcome::measured(Motion::at_rest(target), stepped.position - target)
    } else {
        Outcome::measured(stepped, 0.0)
    }
}
