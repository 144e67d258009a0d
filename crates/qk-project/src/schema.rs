//! Parameter file schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// Sample count used when a file does not name one. Equal to
/// `qk_sim::DEFAULT_SAMPLES`; the file format does not depend on the core.
pub const DEFAULT_SAMPLES: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterFile {
    #[serde(default = "latest_version")]
    pub version: u32,
    #[serde(default)]
    pub name: String,
    pub length_m: f64,
    pub wave_speed_mps: f64,
    pub stiffness_n_per_m: f64,
    pub mass_kg: f64,
    pub frequency_hz: f64,
    pub duration_s: f64,
    pub damping_ratio: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default)]
    pub method: MethodDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rk4_substeps: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MethodDef {
    #[default]
    DormandPrince,
    Rk4,
}

fn latest_version() -> u32 {
    LATEST_VERSION
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

impl Default for ParameterFile {
    /// Demonstration defaults.
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "Default demonstration".to_string(),
            length_m: 100.0,
            wave_speed_mps: 1.0,
            stiffness_n_per_m: 1.0,
            mass_kg: 1.0,
            frequency_hz: 5.0,
            duration_s: 20.0,
            damping_ratio: 0.1,
            samples: DEFAULT_SAMPLES,
            solver: None,
        }
    }
}
