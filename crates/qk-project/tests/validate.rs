use qk_project::schema::*;
use qk_project::{ValidationError, validate_parameters};

fn with(f: impl FnOnce(&mut ParameterFile)) -> ParameterFile {
    let mut params = ParameterFile::default();
    f(&mut params);
    params
}

fn field_of(err: ValidationError) -> String {
    match err {
        ValidationError::InvalidValue { field, .. } => field,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_zero_mass() {
    let err = validate_parameters(&with(|p| p.mass_kg = 0.0)).unwrap_err();
    assert_eq!(field_of(err), "mass_kg");
}

#[test]
fn accepts_negative_mass_and_damping() {
    // Only zero mass is singular; signs are left to the user.
    validate_parameters(&with(|p| {
        p.mass_kg = -1.0;
        p.damping_ratio = -0.1;
    }))
    .unwrap();
}

#[test]
fn rejects_negative_duration() {
    let err = validate_parameters(&with(|p| p.duration_s = -1.0)).unwrap_err();
    assert_eq!(field_of(err), "duration_s");
}

#[test]
fn accepts_zero_duration() {
    validate_parameters(&with(|p| p.duration_s = 0.0)).unwrap();
}

#[test]
fn rejects_non_finite_values() {
    let err = validate_parameters(&with(|p| p.frequency_hz = f64::NAN)).unwrap_err();
    assert_eq!(field_of(err), "frequency_hz");
    let err = validate_parameters(&with(|p| p.stiffness_n_per_m = f64::INFINITY)).unwrap_err();
    assert_eq!(field_of(err), "stiffness_n_per_m");
}

#[test]
fn rejects_too_few_samples() {
    let err = validate_parameters(&with(|p| p.samples = 1)).unwrap_err();
    assert_eq!(field_of(err), "samples");
}

#[test]
fn rejects_bad_solver_settings() {
    let err = validate_parameters(&with(|p| {
        p.solver = Some(SolverDef {
            rtol: Some(0.0),
            ..SolverDef::default()
        })
    }))
    .unwrap_err();
    assert_eq!(field_of(err), "solver.rtol");

    let err = validate_parameters(&with(|p| {
        p.solver = Some(SolverDef {
            method: MethodDef::Rk4,
            rk4_substeps: Some(0),
            ..SolverDef::default()
        })
    }))
    .unwrap_err();
    assert_eq!(field_of(err), "solver.rk4_substeps");
}

#[test]
fn rejects_future_version() {
    let err = validate_parameters(&with(|p| p.version = LATEST_VERSION + 1)).unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedVersion { .. }));
}
