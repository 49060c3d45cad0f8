use crate::{InspectionSnapshot, SampleSeries};

use super::Error;

/// Indicates how the run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all configured steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// One record per completed step.
    pub series: SampleSeries,

    /// The record at the inspect step, if the run reached it.
    pub snapshot: Option<InspectionSnapshot>,

    /// Number of steps completed.
    pub steps: usize,

    /// The configured inspect step.
    pub inspect_step: usize,
}

impl Solution {
    /// Returns the inspection snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInspected`] if the run stopped before the inspect step.
    pub fn inspection(&self) -> Result<InspectionSnapshot, Error> {
        self.snapshot.ok_or(Error::NotInspected {
            steps: self.steps,
            inspect_step: self.inspect_step,
        })
    }
}
