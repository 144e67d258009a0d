//! The compute pipeline: parameters -> model -> trajectory -> isolation.

use crate::error::SimResult;
use crate::grid::TimeGrid;
use crate::integrator::Stats;
use crate::isolation::{apply_envelope, decay_factors};
use crate::oscillator::Oscillator;
use crate::params::ParameterSet;
use crate::sim::{SimOptions, Trajectory, integrate};

/// Both responses of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimOutput {
    /// Raw integrated response
    pub trajectory: Trajectory,
    /// Response after the isolation envelope
    pub damped: Trajectory,
    /// Envelope value per sample
    pub decay: Vec<f64>,
    /// Integrator work counters
    pub stats: Stats,
}

/// Run the full pipeline with default integrator options.
pub fn compute(params: &ParameterSet, grid: &TimeGrid) -> SimResult<SimOutput> {
    compute_with_options(params, grid, &SimOptions::default())
}

pub fn compute_with_options(
    params: &ParameterSet,
    grid: &TimeGrid,
    opts: &SimOptions,
) -> SimResult<SimOutput> {
    let model = Oscillator::from_params(params)?;
    let (trajectory, stats) = integrate(&model, grid, opts)?;

    let omega = params.angular_frequency();
    let zeta = params.damping_ratio();
    let decay = decay_factors(grid.as_slice(), zeta, omega);
    let damped = apply_envelope(grid.as_slice(), &decay, &trajectory)?;

    Ok(SimOutput {
        trajectory,
        damped,
        decay,
        stats,
    })
}
