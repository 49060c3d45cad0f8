use crate::ConfigError;

/// Errors that can occur when running a simulation.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("run stopped after {steps} steps, before inspect step {inspect_step}")]
    NotInspected { steps: usize, inspect_step: usize },
}
