//! Parameter file validation logic.

use crate::schema::{LATEST_VERSION, ParameterFile, SolverDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_parameters(params: &ParameterFile) -> Result<(), ValidationError> {
    if params.version == 0 || params.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: params.version,
        });
    }

    let fields = [
        ("length_m", params.length_m),
        ("wave_speed_mps", params.wave_speed_mps),
        ("stiffness_n_per_m", params.stiffness_n_per_m),
        ("mass_kg", params.mass_kg),
        ("frequency_hz", params.frequency_hz),
        ("duration_s", params.duration_s),
        ("damping_ratio", params.damping_ratio),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(invalid(field, value, "must be finite"));
        }
    }

    if params.mass_kg == 0.0 {
        return Err(invalid("mass_kg", params.mass_kg, "must be non-zero"));
    }
    if params.duration_s < 0.0 {
        return Err(invalid(
            "duration_s",
            params.duration_s,
            "must be non-negative",
        ));
    }
    if params.samples < 2 {
        return Err(invalid("samples", params.samples, "must be at least 2"));
    }

    if let Some(solver) = &params.solver {
        validate_solver(solver)?;
    }

    Ok(())
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    for (field, value) in [("solver.rtol", solver.rtol), ("solver.atol", solver.atol)] {
        if let Some(v) = value {
            if !(v.is_finite() && v > 0.0) {
                return Err(invalid(field, v, "must be positive"));
            }
        }
    }
    if solver.rk4_substeps == Some(0) {
        return Err(invalid("solver.rk4_substeps", 0, "must be positive"));
    }
    Ok(())
}
