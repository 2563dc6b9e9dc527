//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while simulating a room temperature trajectory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Input series length mismatch: outdoor_temp has {outdoor}, heat_gain has {gain}")]
    LengthMismatch { outdoor: usize, gain: usize },

    #[error("Input series are empty")]
    Empty,

    #[error("Degenerate loss blend at step {index}: end_loss is zero (init_loss={init_loss})")]
    DegenerateLoss { index: usize, init_loss: f64 },

    #[error("Non-finite {what} at step {index}: {value}")]
    NonFinite {
        index: usize,
        what: &'static str,
        value: f64,
    },

    #[error("Core error: {0}")]
    Core(#[from] hs_core::HsError),
}

pub type SimResult<T> = Result<T, SimError>;
