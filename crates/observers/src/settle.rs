use smoothcd_core::Observer;

use crate::traits::{CanStopEarly, HasSample};

/// Stops a run once the object has caught its target.
///
/// The run is stopped after `|distance| <= tolerance` has held for `steps`
/// consecutive samples. A sample outside the tolerance restarts the count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhenSettled {
    tolerance: f64,
    steps: usize,
    settled_for: usize,
}

impl StopWhenSettled {
    /// Stops after `steps` consecutive samples within `tolerance`.
    ///
    /// A `steps` of zero is treated as one.
    #[must_use]
    pub fn new(tolerance: f64, steps: usize) -> Self {
        Self {
            tolerance: tolerance.abs(),
            steps: steps.max(1),
            settled_for: 0,
        }
    }

    /// Consecutive settled samples seen so far.
    #[must_use]
    pub fn settled_for(&self) -> usize {
        self.settled_for
    }
}

impl<E, A> Observer<E, A> for StopWhenSettled
where
    E: HasSample,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.sample().distance.abs() <= self.tolerance {
            self.settled_for += 1;
        } else {
            self.settled_for = 0;
        }

        (self.settled_for >= self.steps).then(A::stop_early)
    }
}
