//! Single-degree-of-freedom oscillator standing in for the structure.

use nalgebra::Vector2;

use crate::error::{SimError, SimResult};
use crate::model::OdeModel;
use crate::params::ParameterSet;

/// `(displacement, velocity)`.
pub type State = Vector2<f64>;

/// Fixed initial condition: at rest position, unit velocity.
pub const INITIAL_STATE: [f64; 2] = [0.0, 1.0];

/// `x'' = -(k/m)·x` when the damping ratio is exactly zero, otherwise
/// `x'' = -(k/m)·x + (c/m)·x'`.
///
/// The branch is chosen by bit-equality of the damping ratio with zero; the
/// `c/m` term is not scaled by the ratio itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    k_over_m: f64,
    c_over_m: f64,
    undamped_branch: bool,
}

impl Oscillator {
    pub fn new(stiffness: f64, mass: f64, wave_speed: f64, damping_ratio: f64) -> SimResult<Self> {
        if mass == 0.0 {
            return Err(SimError::InvalidParameter {
                what: "mass must be non-zero",
            });
        }
        let k_over_m = stiffness / mass;
        let c_over_m = wave_speed / mass;
        if !k_over_m.is_finite() || !c_over_m.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "stiffness or wave speed overflows when divided by mass",
            });
        }
        Ok(Self {
            k_over_m,
            c_over_m,
            undamped_branch: damping_ratio == 0.0,
        })
    }

    pub fn from_params(params: &ParameterSet) -> SimResult<Self> {
        Self::new(
            params.stiffness(),
            params.mass(),
            params.wave_speed(),
            params.damping_ratio(),
        )
    }

    /// True when the `(c/m)·v` term is dropped.
    pub fn is_undamped_branch(&self) -> bool {
        self.undamped_branch
    }

    pub fn derivative(&self, x: &State) -> State {
        let (disp, vel) = (x[0], x[1]);
        let accel = if self.undamped_branch {
            -self.k_over_m * disp
        } else {
            -self.k_over_m * disp + self.c_over_m * vel
        };
        State::new(vel, accel)
    }
}

impl OdeModel<2> for Oscillator {
    fn initial_state(&self) -> State {
        State::from(INITIAL_STATE)
    }

    fn rhs(&self, _t: f64, x: &State) -> SimResult<State> {
        Ok(self.derivative(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ratio_drops_wave_speed_term() {
        let osc = Oscillator::new(1.0, 1.0, 1.0, 0.0).unwrap();
        assert!(osc.is_undamped_branch());
        assert_eq!(osc.derivative(&State::new(0.0, 1.0)), State::new(1.0, 0.0));
    }

    #[test]
    fn tiny_ratio_keeps_wave_speed_term() {
        let osc = Oscillator::new(1.0, 1.0, 1.0, 1e-12).unwrap();
        assert!(!osc.is_undamped_branch());
        assert_eq!(osc.derivative(&State::new(0.0, 1.0)), State::new(1.0, 1.0));
    }

    #[test]
    fn restoring_force_scales_with_k_over_m() {
        let osc = Oscillator::new(4.0, 2.0, 0.0, 0.3).unwrap();
        assert_eq!(osc.derivative(&State::new(1.0, 0.0)), State::new(0.0, -2.0));
    }

    #[test]
    fn zero_mass_rejected() {
        assert!(Oscillator::new(1.0, 0.0, 1.0, 0.1).is_err());
    }

    #[test]
    fn initial_state_is_unit_velocity() {
        let osc = Oscillator::new(1.0, 1.0, 1.0, 0.1).unwrap();
        assert_eq!(osc.initial_state(), State::new(0.0, 1.0));
    }

    #[test]
    fn rhs_ignores_time() {
        let osc = Oscillator::new(3.0, 1.5, 0.5, 0.2).unwrap();
        let x = State::new(0.25, -0.75);
        assert_eq!(osc.rhs(0.0, &x).unwrap(), osc.rhs(123.4, &x).unwrap());
    }
}
