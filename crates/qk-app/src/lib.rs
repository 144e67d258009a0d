//! Shared application service layer for quakesim.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! turning parameter files into validated core inputs, running the
//! pipeline, and querying the two responses.

pub mod error;
pub mod explain;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use explain::{SECTIONS, Section, X_AXIS_LABEL, Y_AXIS_LABEL};
pub use query::{
    Channel, ChannelSummary, ResponseKind, RunSummary, extract_series, get_run_summary, to_csv,
};
pub use run_service::{RunRequest, RunResponse, RunTimingSummary, build_inputs, run, run_file};
