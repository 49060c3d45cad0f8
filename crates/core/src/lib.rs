//! Core traits and types for smoothcd.
//!
//! This crate defines the shared abstractions that smoothing functions,
//! the simulation stepper, and observers build on:
//!
//! - [`Smoother`]: a damping function that advances a [`Motion`] one step
//!   toward the target described by an [`Approach`]
//! - [`Damping`]: the per-run damping parameters, with the smooth time
//!   floored at [`MIN_SMOOTH_TIME`]
//! - [`MaxSpeed`]: a speed limit, or the "no limit" sentinel
//! - [`Observer`]: receives stepper events and optionally returns control actions

mod damping;
mod motion;
mod observer;
mod smoother;

pub use damping::{Damping, MIN_SMOOTH_TIME, MaxSpeed};
pub use motion::{Approach, Motion};
pub use observer::Observer;
pub use smoother::{Outcome, Smoother};
