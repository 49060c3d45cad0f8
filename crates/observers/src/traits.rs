//! Capability traits for observers.
//!
//! These traits abstract over event and action types, so an observer can be
//! written once and used with [`solve`] or with any host loop that emits its
//! own events.
//!
//! # Example
//!
//! ```rust
//! use smoothcd_core::Observer;
//! use smoothcd_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once the target has moved past `limit`.
//! struct TargetLimit {
//!     limit: f64,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for TargetLimit {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.sample().target.abs() > self.limit).then(A::stop_early)
//!     }
//! }
//! ```
//!
//! [`solve`]: smoothcd_simulation::solve

use smoothcd_simulation::{Action, Event, SampleRecord};

/// An event that carries the record of one step.
pub trait HasSample {
    /// Returns the record for this event.
    fn sample(&self) -> &SampleRecord;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

impl HasSample for Event {
    fn sample(&self) -> &SampleRecord {
        &self.record
    }
}

impl HasSample for SampleRecord {
    fn sample(&self) -> &SampleRecord {
        self
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
