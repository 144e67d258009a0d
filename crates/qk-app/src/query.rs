//! Query helpers for extracting data from a finished run.

use qk_sim::{SimOutput, Trajectory};

use crate::error::{AppError, AppResult};

/// Which of the two responses to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Integrated response ("Wave Propagation")
    Raw,
    /// Response after the decay envelope ("Wave Propagation with Isolation")
    Isolated,
}

impl ResponseKind {
    pub fn title(self) -> &'static str {
        match self {
            ResponseKind::Raw => "Wave Propagation",
            ResponseKind::Isolated => "Wave Propagation with Isolation",
        }
    }
}

/// State component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Displacement,
    Velocity,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Displacement, Channel::Velocity];

    pub fn index(self) -> usize {
        match self {
            Channel::Displacement => 0,
            Channel::Velocity => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Displacement => "Displacement",
            Channel::Velocity => "Velocity",
        }
    }
}

/// Final value and peak magnitude of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSummary {
    pub final_value: f64,
    pub peak_abs: f64,
    pub peak_time_s: f64,
}

/// Summary of a run's time range and both responses.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub time_range: (f64, f64),
    pub sample_count: usize,
    pub raw: [ChannelSummary; 2],
    pub isolated: [ChannelSummary; 2],
    pub rhs_evals: u64,
    pub accepted_steps: u64,
    pub rejected_steps: u64,
}

fn trajectory(output: &SimOutput, kind: ResponseKind) -> &Trajectory {
    match kind {
        ResponseKind::Raw => &output.trajectory,
        ResponseKind::Isolated => &output.damped,
    }
}

fn summarize(traj: &Trajectory, channel: Channel) -> ChannelSummary {
    let idx = channel.index();
    let mut peak_abs = 0.0;
    let mut peak_time_s = traj.t.first().copied().unwrap_or(0.0);
    for (t, x) in traj.t.iter().zip(&traj.x) {
        if x[idx].abs() > peak_abs {
            peak_abs = x[idx].abs();
            peak_time_s = *t;
        }
    }
    ChannelSummary {
        final_value: traj.x.last().map(|x| x[idx]).unwrap_or(0.0),
        peak_abs,
        peak_time_s,
    }
}

/// Get run summary from a finished run.
pub fn get_run_summary(output: &SimOutput) -> AppResult<RunSummary> {
    if output.trajectory.is_empty() {
        return Err(AppError::InvalidInput("No samples in run".to_string()));
    }

    let t_min = output.trajectory.t.first().copied().unwrap_or(0.0);
    let t_max = output.trajectory.t.last().copied().unwrap_or(0.0);

    Ok(RunSummary {
        time_range: (t_min, t_max),
        sample_count: output.trajectory.len(),
        raw: Channel::ALL.map(|c| summarize(&output.trajectory, c)),
        isolated: Channel::ALL.map(|c| summarize(&output.damped, c)),
        rhs_evals: output.stats.rhs_evals,
        accepted_steps: output.stats.accepted_steps,
        rejected_steps: output.stats.rejected_steps,
    })
}

/// Extract `(time, value)` pairs for one channel of one response.
pub fn extract_series(output: &SimOutput, kind: ResponseKind, channel: Channel) -> Vec<(f64, f64)> {
    trajectory(output, kind).series(channel.index())
}

/// Both responses as CSV, one row per sample.
pub fn to_csv(output: &SimOutput) -> String {
    let mut csv =
        String::from("time_s,displacement,velocity,damped_displacement,damped_velocity\n");
    for ((t, raw), damped) in output
        .trajectory
        .t
        .iter()
        .zip(&output.trajectory.x)
        .zip(&output.damped.x)
    {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            t, raw[0], raw[1], damped[0], damped[1]
        ));
    }
    csv
}
