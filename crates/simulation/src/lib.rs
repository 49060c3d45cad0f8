//! Deterministic simulation of an object smoothed toward a moving target.
//!
//! A run drives a single object for a fixed number of steps. Each step reads
//! the periodic input signal, turns it into a target position, and advances
//! the object with the configured smoothing function:
//!
//! 1. [`WaveformCursor`] produces the input, lagging its phase by one step.
//! 2. [`TargetTracker`] derives the target under a [`Positioning`] policy.
//! 3. [`Follower`] applies the [`Smoothing`] variant and records a [`SampleRecord`].
//!
//! [`Stepper`] wires these together for a whole run. [`run`] returns the full
//! [`SampleSeries`], [`inspect`] the [`InspectionSnapshot`] at the configured
//! inspect step, and [`solve`] lets an observer watch (or stop) the run.
//!
//! # Example
//!
//! ```
//! use smoothcd_simulation::{Positioning, SimulationConfig, Smoothing, run};
//!
//! let config = SimulationConfig::default()
//!     .with_positioning(Positioning::Absolute)
//!     .with_smoothing(Smoothing::ZeroCheck)
//!     .with_duration(2.0);
//!
//! let series = run(&config).expect("default config is valid");
//! assert_eq!(series.len(), config.steps());
//! ```
//!
//! [`Smoothing`]: smoothcd_smoothing::Smoothing

mod config;
mod follower;
mod sample;
mod stepper;
mod tracker;
mod waveform;

pub use config::{ConfigError, MAX_STEPS, SimulationConfig};
pub use follower::Follower;
pub use sample::{InspectionSnapshot, SampleRecord, SampleSeries};
pub use stepper::{
    Action, Error, Event, RunState, Solution, Status, Stepper, inspect, run, solve,
    solve_unobserved,
};
pub use tracker::{Positioning, TargetState, TargetTracker};
pub use waveform::{Phase, Waveform, WaveformCursor};

pub use smoothcd_core::MaxSpeed;
pub use smoothcd_smoothing::{Prediction, Smoothing};
