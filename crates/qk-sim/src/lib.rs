//! Oscillator simulation core for quakesim.
//!
//! Provides:
//! - Validated parameter set and evenly spaced time grid
//! - Single-degree-of-freedom oscillator model behind a generic ODE trait
//! - Adaptive Dormand-Prince 5(4) and fixed-step RK4 integrators
//! - Decay-envelope isolation of an integrated response
//! - The `compute` pipeline tying the above together

pub mod coefficients;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod isolation;
pub mod model;
pub mod oscillator;
pub mod params;
pub mod pipeline;
pub mod sim;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use grid::{DEFAULT_SAMPLES, TimeGrid};
pub use integrator::{DormandPrince45, Integrator, RK4, Stats, StepController};
pub use isolation::{apply_envelope, decay_factor, decay_factors, isolate};
pub use model::OdeModel;
pub use oscillator::{INITIAL_STATE, Oscillator, State};
pub use params::ParameterSet;
pub use pipeline::{SimOutput, compute, compute_with_options};
pub use sim::{IntegratorType, SimOptions, Trajectory, integrate};
