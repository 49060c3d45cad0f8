//! Whole-run simulation.
//!
//! Each step, in order:
//!
//! ```text
//! input  = cursor.current(); cursor.advance()
//! target = tracker(input, position)         // keeps previous target
//! motion = smoothing(motion, target, ...)
//! record = (step, time, input, position, velocity, target, distance, overshoot)
//! ```
//!
//! Reading the cursor before advancing it means step 0 always sees input `0`,
//! and every later step sees the value the waveform produced one step earlier.
//!
//! # Example
//!
//! ```
//! use smoothcd_simulation::{Action, Event, SimulationConfig, Status, solve};
//!
//! let config = SimulationConfig::default().with_duration(10.0);
//!
//! // Stop as soon as the object gets within 1 of its target after moving.
//! let solution = solve(&config, |event: &Event| {
//!     (event.step > 0 && event.record.distance.abs() < 1.0).then_some(Action::StopEarly)
//! })?;
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! # Ok::<(), smoothcd_simulation::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use smoothcd_core::Observer;
use tracing::{debug, trace};

use crate::{
    Follower, InspectionSnapshot, SampleRecord, SampleSeries, SimulationConfig, WaveformCursor,
};

/// Lifecycle of a [`Stepper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Created, no step taken yet.
    NotStarted,

    /// At least one step taken, more remain.
    Running,

    /// All steps taken. Terminal; start a new stepper for another run.
    Completed,
}

/// Drives one run, a step at a time.
///
/// The stepper owns a copy of the configuration and all run state. It is
/// also an [`Iterator`] over the run's [`SampleRecord`]s.
#[derive(Debug, Clone)]
pub struct Stepper {
    config: SimulationConfig,
    steps: usize,
    inspect_step: usize,
    cursor: WaveformCursor,
    follower: Follower,
    next_step: usize,
    state: RunState,
}

impl Stepper {
    /// Validates `config` and prepares a fresh run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration is invalid; no
    /// step is taken.
    pub fn new(config: &SimulationConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config: *config,
            steps: config.steps(),
            inspect_step: config.inspect_step(),
            cursor: config.waveform().cursor(),
            follower: Follower::new(),
            next_step: 0,
            state: RunState::NotStarted,
        })
    }

    /// The run's lifecycle state.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Total number of steps in the run.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The step whose record is snapshotted.
    #[must_use]
    pub fn inspect_step(&self) -> usize {
        self.inspect_step
    }

    /// The configuration this run was started with.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Takes the next step, or returns `None` once the run is complete.
    pub fn step(&mut self) -> Option<SampleRecord> {
        match self.state {
            RunState::Completed => return None,
            RunState::NotStarted => {
                debug!(
                    steps = self.steps,
                    inspect_step = self.inspect_step,
                    smoothing = %self.config.smoothing,
                    positioning = ?self.config.positioning,
                    "starting run"
                );
                self.state = RunState::Running;
            }
            RunState::Running => {}
        }

        let step = self.next_step;
        let input = self.cursor.current();
        self.cursor.advance();

        let record = self.follower.advance(step, input, &self.config);
        trace!(
            step,
            input,
            position = record.position,
            target = record.target,
            "step"
        );

        self.next_step += 1;
        if self.next_step >= self.steps {
            self.state = RunState::Completed;
        }

        Some(record)
    }
}

impl Iterator for Stepper {
    type Item = SampleRecord;

    fn next(&mut self) -> Option<SampleRecord> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.next_step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Stepper {}

/// Runs a simulation, emitting an [`Event`] after every step.
///
/// The observer may return [`Action::StopEarly`] to end the run; the
/// solution then holds only the steps taken so far.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] before any step if the configuration is invalid.
pub fn solve<Obs>(config: &SimulationConfig, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let mut stepper = Stepper::new(config)?;
    let inspect_step = stepper.inspect_step();

    let mut records = Vec::with_capacity(stepper.steps());
    let mut snapshot = None;

    while let Some(record) = stepper.step() {
        let inspected = record.step == inspect_step;
        if inspected {
            snapshot = Some(InspectionSnapshot::from(record));
        }
        records.push(record);

        let event = Event {
            step: record.step,
            inspected,
            record,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(status = ?Status::StoppedByObserver, steps = records.len(), "run stopped");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                steps: records.len(),
                series: SampleSeries::from(records),
                snapshot,
                inspect_step,
            });
        }
    }

    debug!(status = ?Status::Complete, steps = records.len(), "run complete");
    Ok(Solution {
        status: Status::Complete,
        steps: records.len(),
        series: SampleSeries::from(records),
        snapshot,
        inspect_step,
    })
}

/// Runs a simulation without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the configuration is invalid.
pub fn solve_unobserved(config: &SimulationConfig) -> Result<Solution, Error> {
    solve(config, ())
}

/// Runs a simulation and returns the full per-step trace.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the configuration is invalid.
pub fn run(config: &SimulationConfig) -> Result<SampleSeries, Error> {
    solve_unobserved(config).map(|solution| solution.series)
}

/// Runs a simulation and returns the record at the inspect step.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the configuration is invalid.
pub fn inspect(config: &SimulationConfig) -> Result<InspectionSnapshot, Error> {
    solve_unobserved(config)?.inspection()
}
