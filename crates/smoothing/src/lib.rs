//! Critically damped smoothing functions.
//!
//! Every function here approximates a critically damped spring with the
//! rational approximation of `e^-x` from Game Programming Gems 4 (ch. 1.10):
//!
//! ```text
//! omega = 2 / smooth_time
//! x     = omega * dt
//! decay = 1 / (1 + x + 0.48 x² + 0.235 x³)
//! ```
//!
//! # Smoothers
//!
//! - [`Base`]: the unclamped formula
//! - [`SpeedClamped`]: the base formula with the displacement limited by
//!   [`MaxSpeed`](smoothcd_core::MaxSpeed); the baseline every other variant extends
//! - [`ZeroCheck`]: snaps to a stationary target instead of crossing it
//! - [`MovingTarget`]: also stops when the target passes through the object
//! - [`PreAdjust`] and [`VelocityBlend`]: predictive overshoot correction
//!
//! [`Smoothing`] is the closed set of variants as a tagged choice, and
//! [`SmoothingEngine`] binds a choice to its overshoot correction coefficient.

mod base;
mod clamped;
mod coefficients;
mod engine;
mod guard;
mod predict;

pub use base::Base;
pub use clamped::SpeedClamped;
pub use coefficients::Coefficients;
pub use engine::{DEFAULT_OVERSHOOT_CORRECTION, Smoothing, SmoothingEngine};
pub use guard::{MovingTarget, ZeroCheck};
pub use predict::{PreAdjust, Prediction, VelocityBlend, predicted_overshoot};
