//! Evenly spaced sample times.

use qk_core::{Real, linspace};

use crate::error::{SimError, SimResult};
use crate::params::ParameterSet;

/// Number of samples the interactive front ends use.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Samples `0 = t_0 <= t_1 <= ... <= t_{n-1} = T`, evenly spaced.
///
/// Strictly increasing for `T > 0`; every sample is 0 when `T = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    t: Vec<Real>,
}

impl TimeGrid {
    pub fn new(duration: Real, samples: usize) -> SimResult<Self> {
        if !duration.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "duration must be finite",
            });
        }
        if duration < 0.0 {
            return Err(SimError::InvalidParameter {
                what: "duration must be non-negative",
            });
        }
        if samples < 2 {
            return Err(SimError::InvalidParameter {
                what: "time grid needs at least two samples",
            });
        }
        Ok(Self {
            t: linspace(0.0, duration, samples),
        })
    }

    /// Grid over the parameter set's duration.
    pub fn for_params(params: &ParameterSet, samples: usize) -> SimResult<Self> {
        Self::new(params.duration(), samples)
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.t
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn duration(&self) -> Real {
        self.t.last().copied().unwrap_or(0.0)
    }
}
