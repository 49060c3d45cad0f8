use smoothcd_core::Observer;
use tracing::{Level, debug, error, info, trace, warn};

use crate::traits::HasSample;

/// Forwards every step to `tracing` as a structured event.
///
/// The observer never acts on the run. Which events are kept is up to the
/// installed subscriber; nothing is emitted without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// The level events are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

macro_rules! log_sample {
    ($macro:ident, $record:expr) => {
        $macro!(
            step = $record.step,
            time = $record.time,
            input = $record.input,
            position = $record.position,
            velocity = $record.velocity,
            target = $record.target,
            distance = $record.distance,
            overshoot = ?$record.overshoot,
            "sample"
        )
    };
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasSample,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let record = event.sample();
        match self.level {
            Level::ERROR => log_sample!(error, record),
            Level::WARN => log_sample!(warn, record),
            Level::INFO => log_sample!(info, record),
            Level::DEBUG => log_sample!(debug, record),
            _ => log_sample!(trace, record),
        }
        None
    }
}
