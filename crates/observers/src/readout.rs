use std::fmt;

use smoothcd_simulation::InspectionSnapshot;

/// The inspector's text lines for one snapshot.
///
/// Lines read `"<Label>: <value>"` in a fixed order: step, time, distance,
/// velocity, input, position, target, and then overshoot when the smoothing
/// variant measured one. Values use the shortest representation that
/// round-trips, or a fixed number of decimals when a precision is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    snapshot: InspectionSnapshot,
    precision: Option<usize>,
}

impl Readout {
    /// A readout of `snapshot` at full precision.
    #[must_use]
    pub fn new(snapshot: InspectionSnapshot) -> Self {
        Self {
            snapshot,
            precision: None,
        }
    }

    /// Prints values with `digits` decimals.
    #[must_use]
    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// The labeled lines, in display order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let record = &self.snapshot.record;
        let mut lines = vec![format!("Step: {}", record.step)];

        let values = [
            ("Time", Some(record.time)),
            ("Distance", Some(record.distance)),
            ("Velocity", Some(record.velocity)),
            ("Input", Some(record.input)),
            ("Position", Some(record.position)),
            ("Target", Some(record.target)),
            ("Overshoot", record.overshoot),
        ];
        for (label, value) in values {
            if let Some(value) = value {
                lines.push(self.line(label, value));
            }
        }

        lines
    }

    fn line(&self, label: &str, value: f64) -> String {
        match self.precision {
            Some(digits) => format!("{label}: {value:.digits$}"),
            None => format!("{label}: {value}"),
        }
    }
}

impl From<InspectionSnapshot> for Readout {
    fn from(snapshot: InspectionSnapshot) -> Self {
        Self::new(snapshot)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines().iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
