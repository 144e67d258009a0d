//! qk-core: shared foundation for quakesim.
//!
//! Contains:
//! - units (uom SI types + constructors for oscillator parameters)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{QkError, QkResult};
pub use numeric::*;
pub use units::*;
