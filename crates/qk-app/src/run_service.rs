//! Run execution service.

use std::path::Path;
use std::time::Instant;

use qk_core::units::{hz, kg, m, mps, s, unitless};
use qk_project::schema::{MethodDef, ParameterFile};
use qk_sim::{IntegratorType, ParameterSet, SimOptions, SimOutput, TimeGrid};

use crate::error::{AppError, AppResult};

/// Request to execute a run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub params: ParameterFile,
}

/// Wall-clock timing of one run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub build_time_s: f64,
    pub solve_time_s: f64,
    pub total_time_s: f64,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub params: ParameterSet,
    pub output: SimOutput,
    pub timing: RunTimingSummary,
}

/// Convert a parameter file into validated core inputs.
pub fn build_inputs(file: &ParameterFile) -> AppResult<(ParameterSet, TimeGrid, SimOptions)> {
    qk_project::validate_parameters(file)
        .map_err(|e| AppError::InvalidParameter(e.to_string()))?;

    let params = ParameterSet::from_quantities(
        m(file.length_m),
        mps(file.wave_speed_mps),
        file.stiffness_n_per_m,
        kg(file.mass_kg),
        hz(file.frequency_hz),
        s(file.duration_s),
        unitless(file.damping_ratio),
    )?;
    let grid = TimeGrid::for_params(&params, file.samples)?;

    let mut opts = SimOptions::default();
    if let Some(solver) = &file.solver {
        opts.integrator = match solver.method {
            MethodDef::DormandPrince => IntegratorType::DormandPrince45,
            MethodDef::Rk4 => IntegratorType::RK4,
        };
        if let Some(rtol) = solver.rtol {
            opts.rtol = rtol;
        }
        if let Some(atol) = solver.atol {
            opts.atol = atol;
        }
        if let Some(substeps) = solver.rk4_substeps {
            opts.rk4_substeps = substeps;
        }
    }

    Ok((params, grid, opts))
}

/// Execute a run.
pub fn run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();

    let (params, grid, opts) = build_inputs(&request.params)?;
    let build_time_s = started.elapsed().as_secs_f64();

    let solve_started = Instant::now();
    let output = qk_sim::compute_with_options(&params, &grid, &opts).inspect_err(|e| {
        tracing::warn!(error = %e, "simulation failed");
    })?;
    let solve_time_s = solve_started.elapsed().as_secs_f64();

    tracing::info!(
        name = %request.params.name,
        samples = grid.len(),
        integrator = ?opts.integrator,
        rhs_evals = output.stats.rhs_evals,
        solve_time_s,
        "run complete"
    );

    Ok(RunResponse {
        params,
        output,
        timing: RunTimingSummary {
            build_time_s,
            solve_time_s,
            total_time_s: started.elapsed().as_secs_f64(),
        },
    })
}

/// Load a YAML or JSON parameter file and run it.
pub fn run_file(path: &Path) -> AppResult<RunResponse> {
    let params = qk_project::load(path).map_err(|e| AppError::ParameterFileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    run(&RunRequest { params })
}
