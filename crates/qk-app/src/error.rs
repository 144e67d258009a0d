//! Error types for the qk-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Parameter file error: {0}")]
    Project(String),

    #[error("Failed to read parameter file: {path}: {message}")]
    ParameterFileRead { path: PathBuf, message: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for qk-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<qk_project::ProjectError> for AppError {
    fn from(err: qk_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<qk_sim::SimError> for AppError {
    fn from(err: qk_sim::SimError) -> Self {
        match err {
            qk_sim::SimError::InvalidParameter { .. } => {
                AppError::InvalidParameter(err.to_string())
            }
            _ => AppError::Simulation(err.to_string()),
        }
    }
}
