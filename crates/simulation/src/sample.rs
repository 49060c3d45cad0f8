use std::{ops::Index, slice};

/// Everything recorded about a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleRecord {
    /// Zero-based step index.
    pub step: usize,

    /// Simulated time at the start of the step, `step * delta_time`.
    pub time: f64,

    /// Input value applied on this step.
    pub input: f64,

    /// Object position after the step.
    pub position: f64,

    /// Object velocity after the step.
    pub velocity: f64,

    /// Target position for this step.
    pub target: f64,

    /// `target - position`.
    pub distance: f64,

    /// Signed overshoot, for smoothing variants that measure one.
    pub overshoot: Option<f64>,
}

/// The ordered records of a run, one per step.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSeries {
    records: Vec<SampleRecord>,
}

impl SampleSeries {
    /// All records, in step order.
    #[must_use]
    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record for `step`, if it was reached.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<&SampleRecord> {
        self.records.get(step)
    }

    /// The last record.
    #[must_use]
    pub fn last(&self) -> Option<&SampleRecord> {
        self.records.last()
    }

    /// Iterates over the records in step order.
    pub fn iter(&self) -> slice::Iter<'_, SampleRecord> {
        self.records.iter()
    }

    /// Largest overshoot magnitude over the run, if the variant measures one.
    #[must_use]
    pub fn peak_overshoot(&self) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|record| record.overshoot)
            .map(f64::abs)
            .reduce(f64::max)
    }
}

impl From<Vec<SampleRecord>> for SampleSeries {
    fn from(records: Vec<SampleRecord>) -> Self {
        Self { records }
    }
}

impl Index<usize> for SampleSeries {
    type Output = SampleRecord;

    fn index(&self, step: usize) -> &SampleRecord {
        &self.records[step]
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a SampleRecord;
    type IntoIter = slice::Iter<'a, SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for SampleSeries {
    type Item = SampleRecord;
    type IntoIter = std::vec::IntoIter<SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// The record at the configured inspect step, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InspectionSnapshot {
    pub record: SampleRecord,
}

impl From<SampleRecord> for InspectionSnapshot {
    fn from(record: SampleRecord) -> Self {
        Self { record }
    }
}
