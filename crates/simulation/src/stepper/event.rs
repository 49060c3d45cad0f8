use crate::SampleRecord;

/// Event emitted by the stepper after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number, starting at 0.
    pub step: usize,

    /// Whether this is the configured inspect step.
    pub inspected: bool,

    /// The record appended for this step.
    pub record: SampleRecord,
}
