//! OdeModel trait for pluggable dynamic systems.

use nalgebra::SVector;

use crate::error::SimResult;

/// An autonomous or time-dependent first-order system `dx/dt = f(t, x)`
/// with a fixed-size state.
///
/// Implementations must be pure: `rhs` may not depend on anything except
/// its arguments and the model's own (immutable) parameters.
pub trait OdeModel<const N: usize> {
    /// Return the state at t=0.
    fn initial_state(&self) -> SVector<f64, N>;

    /// Compute the state derivative at `(t, x)`.
    fn rhs(&self, t: f64, x: &SVector<f64, N>) -> SimResult<SVector<f64, N>>;
}
