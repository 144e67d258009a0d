//! Integration over a time grid and trajectory recording.

use nalgebra::SVector;

use crate::error::{SimError, SimResult};
use crate::grid::TimeGrid;
use crate::integrator::{DormandPrince45, Integrator, RK4, Stats};
use crate::model::OdeModel;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// Adaptive Dormand-Prince 5(4) (default).
    #[default]
    DormandPrince45,
    /// Fixed-step classical RK4 with `rk4_substeps` steps per sample interval.
    RK4,
}

/// Options for integration runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimOptions {
    /// Integrator type (default: Dormand-Prince 5(4))
    pub integrator: IntegratorType,
    /// Relative tolerance (adaptive only)
    pub rtol: f64,
    /// Absolute tolerance (adaptive only)
    pub atol: f64,
    /// Smallest step before giving up (adaptive only)
    pub h_min: f64,
    /// Step budget over the whole grid (adaptive only)
    pub max_steps: u64,
    /// Steps per sample interval (RK4 only)
    pub rk4_substeps: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            integrator: IntegratorType::default(),
            rtol: 1e-9,
            atol: 1e-12,
            h_min: 1e-12,
            max_steps: 1_000_000,
            rk4_substeps: 10,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.rtol > 0.0 && self.rtol.is_finite()) {
            return Err(SimError::InvalidParameter {
                what: "rtol must be positive",
            });
        }
        if !(self.atol > 0.0 && self.atol.is_finite()) {
            return Err(SimError::InvalidParameter {
                what: "atol must be positive",
            });
        }
        if !(self.h_min > 0.0 && self.h_min.is_finite()) {
            return Err(SimError::InvalidParameter {
                what: "h_min must be positive",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidParameter {
                what: "max_steps must be positive",
            });
        }
        if self.rk4_substeps == 0 {
            return Err(SimError::InvalidParameter {
                what: "rk4_substeps must be positive",
            });
        }
        Ok(())
    }
}

/// States sampled on a time grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<const N: usize = 2> {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots, one per time point
    pub x: Vec<SVector<f64, N>>,
}

impl<const N: usize> Trajectory<N> {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// One state component across all samples.
    pub fn channel(&self, index: usize) -> Vec<f64> {
        self.x.iter().map(|s| s[index]).collect()
    }

    /// `(t, value)` pairs of one component.
    pub fn series(&self, index: usize) -> Vec<(f64, f64)> {
        self.t
            .iter()
            .zip(&self.x)
            .map(|(&t, s)| (t, s[index]))
            .collect()
    }
}

impl Trajectory<2> {
    pub fn displacement(&self) -> Vec<f64> {
        self.channel(0)
    }

    pub fn velocity(&self) -> Vec<f64> {
        self.channel(1)
    }
}

/// Integrate `model` from its initial state, recording one state per grid
/// sample. The first recorded state is the initial state itself.
pub fn integrate<const N: usize, M: OdeModel<N>>(
    model: &M,
    grid: &TimeGrid,
    opts: &SimOptions,
) -> SimResult<(Trajectory<N>, Stats)> {
    opts.validate()?;

    match opts.integrator {
        IntegratorType::DormandPrince45 => {
            let mut integrator = DormandPrince45::new(opts.rtol, opts.atol)
                .with_step_limits(opts.h_min, f64::INFINITY)
                .with_max_steps(opts.max_steps);
            run_on_grid(&mut integrator, model, grid)
        }
        IntegratorType::RK4 => {
            let mut integrator = RK4 {
                substeps: opts.rk4_substeps,
            };
            run_on_grid(&mut integrator, model, grid)
        }
    }
}

fn run_on_grid<const N: usize, I: Integrator, M: OdeModel<N>>(
    integrator: &mut I,
    model: &M,
    grid: &TimeGrid,
) -> SimResult<(Trajectory<N>, Stats)> {
    let t = grid.as_slice();
    let mut stats = Stats::default();
    let mut x = Vec::with_capacity(t.len());

    let Some(&t0) = t.first() else {
        return Err(SimError::Invariant {
            what: "time grid is empty",
        });
    };
    let mut state = model.initial_state();
    x.push(state);

    let mut t_prev = t0;
    for &t_next in &t[1..] {
        state = integrator.advance(model, t_prev, &state, t_next, &mut stats)?;
        x.push(state);
        t_prev = t_next;
    }

    tracing::debug!(
        samples = t.len(),
        rhs_evals = stats.rhs_evals,
        accepted = stats.accepted_steps,
        rejected = stats.rejected_steps,
        "integration complete"
    );

    Ok((
        Trajectory {
            t: t.to_vec(),
            x,
        },
        stats,
    ))
}
