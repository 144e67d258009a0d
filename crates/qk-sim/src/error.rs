//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while building or integrating the oscillator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Non-finite value for {what} at t={t}")]
    NonFinite { what: &'static str, t: f64 },

    #[error("Convergence failed at t={t}: {what}")]
    ConvergenceFailed { what: &'static str, t: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<qk_core::QkError> for SimError {
    fn from(e: qk_core::QkError) -> Self {
        match e {
            qk_core::QkError::NonFinite { what, .. } => SimError::InvalidParameter { what },
        }
    }
}
