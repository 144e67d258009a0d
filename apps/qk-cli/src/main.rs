use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use qk_app::{AppResult, Channel, RunRequest, RunResponse, SECTIONS, get_run_summary, run_service};
use qk_project::schema::{MethodDef, ParameterFile, SolverDef};

#[derive(Parser)]
#[command(name = "qk-cli")]
#[command(about = "Quakesim CLI - seismic oscillator and isolation demonstrator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate parameter file syntax and values
    Validate {
        /// Path to the parameter file (.yaml, .yml or .json)
        params_path: PathBuf,
    },
    /// Write the demonstration defaults to a new parameter file
    Init {
        /// Path of the parameter file to create (.yaml, .yml or .json)
        params_path: PathBuf,
    },
    /// Run a simulation and print a summary
    Run(RunArgs),
    /// Run a simulation and print both responses as CSV on stdout
    Export(RunArgs),
    /// Print the explanatory notes
    Explain,
}

#[derive(Args)]
struct RunArgs {
    /// Parameter file; flags below override its values (defaults if omitted)
    params_path: Option<PathBuf>,
    /// Length of the structure (m), informational only
    #[arg(long)]
    length: Option<f64>,
    /// Wave speed (m/s)
    #[arg(long)]
    wave_speed: Option<f64>,
    /// Stiffness (N/m)
    #[arg(long)]
    stiffness: Option<f64>,
    /// Mass (kg)
    #[arg(long)]
    mass: Option<f64>,
    /// Frequency of the wave (Hz)
    #[arg(long)]
    frequency: Option<f64>,
    /// Simulated time (s)
    #[arg(long)]
    duration: Option<f64>,
    /// Damping ratio
    #[arg(long)]
    damping_ratio: Option<f64>,
    /// Number of time samples
    #[arg(long)]
    samples: Option<usize>,
    /// Integration method
    #[arg(long, value_enum)]
    method: Option<Method>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    DormandPrince,
    Rk4,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { params_path } => cmd_validate(&params_path),
        Commands::Init { params_path } => cmd_init(&params_path),
        Commands::Run(args) => cmd_run(&args),
        Commands::Export(args) => cmd_export(&args),
        Commands::Explain => {
            cmd_explain();
            Ok(())
        }
    }
}

fn cmd_validate(params_path: &Path) -> AppResult<()> {
    println!("Validating parameter file: {}", params_path.display());
    let params = qk_project::load(params_path)?;
    qk_app::build_inputs(&params)?;
    println!("✓ Parameter file is valid");
    Ok(())
}

fn cmd_init(params_path: &Path) -> AppResult<()> {
    if params_path.exists() {
        return Err(qk_app::AppError::InvalidInput(format!(
            "{} already exists",
            params_path.display()
        )));
    }
    qk_project::save(params_path, &ParameterFile::default())?;
    println!("✓ Wrote default parameters to {}", params_path.display());
    Ok(())
}

fn resolve_params(args: &RunArgs) -> AppResult<ParameterFile> {
    let mut params = match &args.params_path {
        Some(path) => qk_project::load(path)?,
        None => ParameterFile::default(),
    };

    let overrides = [
        (&mut params.length_m, args.length),
        (&mut params.wave_speed_mps, args.wave_speed),
        (&mut params.stiffness_n_per_m, args.stiffness),
        (&mut params.mass_kg, args.mass),
        (&mut params.frequency_hz, args.frequency),
        (&mut params.duration_s, args.duration),
        (&mut params.damping_ratio, args.damping_ratio),
    ];
    for (slot, value) in overrides {
        if let Some(v) = value {
            *slot = v;
        }
    }
    if let Some(samples) = args.samples {
        params.samples = samples;
    }
    if let Some(method) = args.method {
        let solver = params.solver.get_or_insert_with(SolverDef::default);
        solver.method = match method {
            Method::DormandPrince => MethodDef::DormandPrince,
            Method::Rk4 => MethodDef::Rk4,
        };
    }

    tracing::debug!(?params, "resolved parameters");
    Ok(params)
}

fn execute(args: &RunArgs) -> AppResult<RunResponse> {
    let params = resolve_params(args)?;
    run_service::run(&RunRequest { params })
}

fn cmd_run(args: &RunArgs) -> AppResult<()> {
    let response = execute(args)?;
    let p = &response.params;

    println!("Running oscillator simulation");
    println!(
        "  c = {} m/s, k = {} N/m, m = {} kg, f = {} Hz (ω = {:.3} rad/s)",
        p.wave_speed(),
        p.stiffness(),
        p.mass(),
        p.frequency(),
        p.angular_frequency()
    );
    println!(
        "  T = {} s, ζ = {}, length = {} m",
        p.duration(),
        p.damping_ratio(),
        p.length()
    );

    let summary = get_run_summary(&response.output)?;
    println!("✓ Simulation completed");
    println!("  Time points: {}", summary.sample_count);
    println!(
        "  Time range: {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );

    for (title, channels) in [
        ("Wave Propagation", &summary.raw),
        ("Wave Propagation with Isolation", &summary.isolated),
    ] {
        println!("\n{}:", title);
        for channel in Channel::ALL {
            let s = channels[channel.index()];
            println!(
                "  {:<12} final={:>12.5e}  peak={:>12.5e} at t={:.3}s",
                channel.label(),
                s.final_value,
                s.peak_abs,
                s.peak_time_s
            );
        }
    }

    let timing = &response.timing;
    println!("\nTiming summary:");
    println!("  Build:   {:.3}s", timing.build_time_s);
    println!("  Solve:   {:.3}s", timing.solve_time_s);
    println!("  Total:   {:.3}s", timing.total_time_s);
    println!("  RHS evaluations: {}", summary.rhs_evals);
    println!(
        "  Steps: {} accepted, {} rejected",
        summary.accepted_steps, summary.rejected_steps
    );

    Ok(())
}

fn cmd_export(args: &RunArgs) -> AppResult<()> {
    let response = execute(args)?;
    print!("{}", qk_app::to_csv(&response.output));
    Ok(())
}

fn cmd_explain() {
    for section in SECTIONS {
        println!("{}\n", section.title);
        println!("{}\n", section.body);
    }
}
