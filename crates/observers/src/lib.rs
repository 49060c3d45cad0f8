//! Reusable observers and display adapters for smoothcd runs.
//!
//! This crate sits at the boundary between a run and whatever shows it. It
//! turns samples into data a renderer or an inspector panel can draw, and
//! provides [`Observer`] implementations that work with any event carrying a
//! [`SampleRecord`].
//!
//! # Modules
//!
//! - [`traits`]: capability traits for observers ([`HasSample`], [`CanStopEarly`])
//! - [`Traces`] and [`axis_marker`]: per-channel polylines and the inspect marker
//! - [`Readout`]: the inspector's `"<Label>: <value>"` lines
//! - [`LogObserver`]: forwards every step to `tracing`
//! - [`StopWhenSettled`]: stops a run once the object has caught its target
//!
//! [`Observer`]: smoothcd_core::Observer
//! [`SampleRecord`]: smoothcd_simulation::SampleRecord
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log;
mod readout;
mod settle;
mod trace;

pub use log::LogObserver;
pub use readout::Readout;
pub use settle::StopWhenSettled;
pub use trace::{Channel, Traces, axis_marker};
