//! qk-project: parameter file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_parameters};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encodings for parameter files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<ParameterFile> {
    let content = std::fs::read_to_string(path)?;
    let params: ParameterFile = serde_yaml::from_str(&content)?;
    validate_parameters(&params)?;
    Ok(params)
}

pub fn save_yaml(path: &Path, params: &ParameterFile) -> ProjectResult<()> {
    validate_parameters(params)?;
    let content = serde_yaml::to_string(params)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<ParameterFile> {
    let content = std::fs::read_to_string(path)?;
    let params: ParameterFile = serde_json::from_str(&content)?;
    validate_parameters(&params)?;
    Ok(params)
}

pub fn save_json(path: &Path, params: &ParameterFile) -> ProjectResult<()> {
    validate_parameters(params)?;
    let content = serde_json::to_string_pretty(params)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by file extension.
pub fn load(path: &Path) -> ProjectResult<ParameterFile> {
    match Format::from_path(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

/// Save by file extension.
pub fn save(path: &Path, params: &ParameterFile) -> ProjectResult<()> {
    match Format::from_path(path)? {
        Format::Yaml => save_yaml(path, params),
        Format::Json => save_json(path, params),
    }
}
