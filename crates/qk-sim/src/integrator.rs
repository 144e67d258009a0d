//! Time integrators: adaptive Dormand-Prince 5(4) and fixed-step RK4.
//!
//! Both advance a state between two sample times and land on the end time
//! exactly, so callers never interpolate.

use nalgebra::SVector;

use crate::coefficients::{A, B, B_ERR, C, STAGES};
use crate::error::{SimError, SimResult};
use crate::model::OdeModel;

/// Work counters accumulated over an integration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Right-hand side evaluations
    pub rhs_evals: u64,
    /// Accepted steps
    pub accepted_steps: u64,
    /// Rejected steps (adaptive integrators only)
    pub rejected_steps: u64,
}

/// Trait for time integrators.
pub trait Integrator {
    /// Advance `x0` at `t0` to `t1 >= t0`.
    fn advance<const N: usize, M: OdeModel<N>>(
        &mut self,
        model: &M,
        t0: f64,
        x0: &SVector<f64, N>,
        t1: f64,
        stats: &mut Stats,
    ) -> SimResult<SVector<f64, N>>;
}

fn check_span(t0: f64, t1: f64) -> SimResult<f64> {
    let span = t1 - t0;
    if span.is_nan() || span < 0.0 {
        return Err(SimError::Invariant {
            what: "sample times must be non-decreasing",
        });
    }
    Ok(span)
}

pub(crate) fn ensure_finite_state<const N: usize>(
    x: &SVector<f64, N>,
    what: &'static str,
    t: f64,
) -> SimResult<()> {
    if x.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SimError::NonFinite { what, t })
    }
}

/// Classical RK4 (Runge-Kutta 4th order) with a fixed number of sub-steps
/// per advance.
#[derive(Clone, Debug)]
pub struct RK4 {
    pub substeps: usize,
}

impl Default for RK4 {
    fn default() -> Self {
        Self { substeps: 10 }
    }
}

impl RK4 {
    /// One RK4 step of size `dt`.
    pub fn step<const N: usize, M: OdeModel<N>>(
        &self,
        model: &M,
        t: f64,
        x: &SVector<f64, N>,
        dt: f64,
        stats: &mut Stats,
    ) -> SimResult<SVector<f64, N>> {
        let k1 = model.rhs(t, x)?;
        let k2 = model.rhs(t + 0.5 * dt, &(x + k1 * (0.5 * dt)))?;
        let k3 = model.rhs(t + 0.5 * dt, &(x + k2 * (0.5 * dt)))?;
        let k4 = model.rhs(t + dt, &(x + k3 * dt))?;
        stats.rhs_evals += 4;
        stats.accepted_steps += 1;

        // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        Ok(x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0))
    }
}

impl Integrator for RK4 {
    fn advance<const N: usize, M: OdeModel<N>>(
        &mut self,
        model: &M,
        t0: f64,
        x0: &SVector<f64, N>,
        t1: f64,
        stats: &mut Stats,
    ) -> SimResult<SVector<f64, N>> {
        let span = check_span(t0, t1)?;
        if span == 0.0 {
            return Ok(*x0);
        }

        let n = self.substeps.max(1);
        let dt = span / n as f64;
        let mut x = *x0;
        for i in 0..n {
            let t = t0 + dt * i as f64;
            x = self.step(model, t, &x, dt, stats)?;
            ensure_finite_state(&x, "state", t + dt)?;
        }
        Ok(x)
    }
}

/// Step-size controller using an I-controller
///
/// h_new = safety * h * error^(-1/5)
#[derive(Clone, Debug)]
pub struct StepController {
    /// Safety factor (0.8-0.9 typical)
    pub safety: f64,
    /// Maximum growth factor per step
    pub max_factor: f64,
    /// Minimum reduction factor per step
    pub min_factor: f64,
    exponent: f64,
}

impl Default for StepController {
    fn default() -> Self {
        Self {
            safety: 0.9,
            max_factor: 5.0,
            min_factor: 0.2,
            exponent: 1.0 / 5.0,
        }
    }
}

impl StepController {
    pub fn compute_factor(&self, error: f64) -> f64 {
        if !error.is_finite() {
            return self.min_factor;
        }
        if error == 0.0 {
            return self.max_factor;
        }
        let factor = self.safety * error.powf(-self.exponent);
        factor.clamp(self.min_factor, self.max_factor)
    }
}

/// Adaptive Dormand-Prince 5(4) integrator with local extrapolation.
///
/// Error is measured as the RMS over components of
/// `|y5 - y4| / (atol + rtol * max(|y|, |y_new|))`; a step is accepted when
/// that norm is at most 1. The last proposed step size carries over between
/// successive `advance` calls.
#[derive(Clone, Debug)]
pub struct DormandPrince45 {
    pub rtol: f64,
    pub atol: f64,
    pub h_min: f64,
    pub h_max: f64,
    /// Budget for accepted + rejected steps across all advances
    pub max_steps: u64,
    controller: StepController,
    h: Option<f64>,
}

impl DormandPrince45 {
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self {
            rtol,
            atol,
            h_min: 1e-12,
            h_max: f64::INFINITY,
            max_steps: 1_000_000,
            controller: StepController::default(),
            h: None,
        }
    }

    pub fn with_step_limits(mut self, h_min: f64, h_max: f64) -> Self {
        self.h_min = h_min;
        self.h_max = h_max;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Try one step of size `h`; returns the 5th-order solution and the
    /// normalized error.
    fn attempt<const N: usize, M: OdeModel<N>>(
        &self,
        model: &M,
        t: f64,
        y: &SVector<f64, N>,
        h: f64,
        stats: &mut Stats,
    ) -> SimResult<(SVector<f64, N>, f64)> {
        let mut k = [SVector::<f64, N>::zeros(); STAGES];
        for i in 0..STAGES {
            let mut yi = *y;
            for (j, kj) in k.iter().enumerate().take(i) {
                if A[i][j] != 0.0 {
                    yi += kj * (h * A[i][j]);
                }
            }
            k[i] = model.rhs(t + C[i] * h, &yi)?;
        }
        stats.rhs_evals += STAGES as u64;

        let mut y_new = *y;
        let mut err = SVector::<f64, N>::zeros();
        for i in 0..STAGES {
            y_new += k[i] * (h * B[i]);
            err += k[i] * (h * B_ERR[i]);
        }

        let mut acc = 0.0;
        for i in 0..N {
            let scale = self.atol + self.rtol * y[i].abs().max(y_new[i].abs());
            let e = err[i] / scale;
            acc += e * e;
        }
        let norm = (acc / N.max(1) as f64).sqrt();
        Ok((y_new, norm))
    }
}

impl Default for DormandPrince45 {
    fn default() -> Self {
        Self::new(1e-9, 1e-12)
    }
}

impl Integrator for DormandPrince45 {
    fn advance<const N: usize, M: OdeModel<N>>(
        &mut self,
        model: &M,
        t0: f64,
        x0: &SVector<f64, N>,
        t1: f64,
        stats: &mut Stats,
    ) -> SimResult<SVector<f64, N>> {
        let span = check_span(t0, t1)?;
        if span == 0.0 {
            return Ok(*x0);
        }

        let mut t = t0;
        let mut y = *x0;
        let mut h = self.h.unwrap_or(span).min(self.h_max);

        loop {
            if stats.accepted_steps + stats.rejected_steps >= self.max_steps {
                return Err(SimError::ConvergenceFailed {
                    what: "step budget exhausted",
                    t,
                });
            }

            let remaining = t1 - t;
            let last = h >= remaining;
            let h_try = if last { remaining } else { h };
            if !last && h_try < self.h_min {
                return Err(SimError::ConvergenceFailed {
                    what: "step size underflow",
                    t,
                });
            }

            let (y_new, err) = self.attempt(model, t, &y, h_try, stats)?;
            let factor = self.controller.compute_factor(err);

            if err <= 1.0 {
                stats.accepted_steps += 1;
                let t_new = if last { t1 } else { t + h_try };
                ensure_finite_state(&y_new, "state", t_new)?;
                let h_next = (h_try * factor).min(self.h_max);

                if last {
                    // A clamped final step says little about the natural step size.
                    self.h = Some(h.max(h_next).min(self.h_max));
                    return Ok(y_new);
                }
                t = t_new;
                y = y_new;
                h = h_next;
            } else {
                stats.rejected_steps += 1;
                h = h_try * factor;
                if h < self.h_min {
                    tracing::debug!(t, h, err, "step size fell below minimum");
                    return Err(SimError::ConvergenceFailed {
                        what: "step size underflow",
                        t,
                    });
                }
            }
        }
    }
}
