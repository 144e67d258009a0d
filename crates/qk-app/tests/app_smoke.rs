//! Smoke tests for the qk-app service layer.

use qk_app::{
    AppError, Channel, ResponseKind, RunRequest, SECTIONS, extract_series, get_run_summary, run,
    run_file, to_csv,
};
use qk_project::schema::ParameterFile;

#[test]
fn default_run_summarizes_both_responses() {
    let response = run(&RunRequest {
        params: ParameterFile::default(),
    })
    .expect("default run should succeed");

    let summary = get_run_summary(&response.output).unwrap();
    assert_eq!(summary.sample_count, 1000);
    assert_eq!(summary.time_range, (0.0, 20.0));

    // The raw response grows; the isolated one is crushed by exp(-ζωt).
    let raw = summary.raw[Channel::Displacement.index()];
    let iso = summary.isolated[Channel::Displacement.index()];
    assert!(raw.peak_abs > 1.0);
    assert!(iso.final_value.abs() < 1e-20);
    assert!(iso.peak_abs < raw.peak_abs);
    assert!(summary.rhs_evals > 0);
    assert!(response.timing.total_time_s >= response.timing.solve_time_s);
}

#[test]
fn series_share_the_time_axis() {
    let response = run(&RunRequest {
        params: ParameterFile::default(),
    })
    .unwrap();

    let raw = extract_series(&response.output, ResponseKind::Raw, Channel::Velocity);
    let iso = extract_series(&response.output, ResponseKind::Isolated, Channel::Velocity);
    assert_eq!(raw.len(), iso.len());
    assert_eq!(raw[0], (0.0, 1.0));
    assert_eq!(iso[0], (0.0, 1.0));
    assert!(raw.iter().zip(&iso).all(|(a, b)| a.0 == b.0));
}

#[test]
fn csv_has_header_and_one_row_per_sample() {
    let params = ParameterFile {
        samples: 50,
        ..ParameterFile::default()
    };
    let response = run(&RunRequest { params }).unwrap();
    let csv = to_csv(&response.output);

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("time_s,displacement,velocity,damped_displacement,damped_velocity")
    );
    assert_eq!(lines.next(), Some("0,0,1,0,1"));
    assert_eq!(csv.lines().count(), 51);
}

#[test]
fn zero_mass_is_reported_as_invalid_parameter() {
    let params = ParameterFile {
        mass_kg: 0.0,
        ..ParameterFile::default()
    };
    let err = run(&RunRequest { params }).unwrap_err();
    assert!(matches!(err, AppError::InvalidParameter(_)));
}

#[test]
fn run_file_reads_yaml() {
    let path = std::env::temp_dir().join("qk_app_run_file.yaml");
    qk_project::save(&path, &ParameterFile::default()).unwrap();

    let response = run_file(&path).unwrap();
    assert_eq!(response.output.trajectory.len(), 1000);
}

#[test]
fn run_file_reports_missing_file() {
    let path = std::env::temp_dir().join("qk_app_does_not_exist.yaml");
    let err = run_file(&path).unwrap_err();
    assert!(matches!(err, AppError::ParameterFileRead { .. }));
}

#[test]
fn explanatory_text_is_present() {
    assert_eq!(SECTIONS.len(), 5);
    assert!(SECTIONS.iter().all(|s| !s.title.is_empty() && !s.body.is_empty()));
}

#[test]
fn parameter_files_default_to_the_core_sample_count() {
    assert_eq!(qk_project::DEFAULT_SAMPLES, qk_sim::DEFAULT_SAMPLES);
    assert_eq!(ParameterFile::default().samples, qk_sim::DEFAULT_SAMPLES);
}

#[test]
fn demonstration_prompt_points_at_the_inputs() {
    let demo = SECTIONS
        .iter()
        .find(|s| s.title == "Demonstration")
        .expect("demonstration section");
    assert_eq!(
        demo.body,
        "Use the inputs to adjust the wave speed, stiffness, damping ratio, and other \
         properties to see how they affect the amplitude vs time graph."
    );
}
