//! JSON run configuration for the `heat1d` binary.
//!
//! ```json
//! {
//!   "length": 1.0,
//!   "num_points": 21,
//!   "dt": 0.001,
//!   "num_steps": 200,
//!   "alpha": 0.5,
//!   "initial": "sin(πx)",
//!   "boundary": { "left": 0.0, "right": 0.0 },
//!   "schemes": ["explicit", "implicit"],
//!   "output_dir": "output/heat1d"
//! }
//! ```
//!
//! `initial` is either a preset name or an explicit list of `num_points`
//! temperatures. Missing fields take their defaults.

use crate::discretization::generator::Preset;
use crate::numerics::Scheme;
use crate::numerics::solver::SolverError;
use crate::physics::bc::DirichletBoundary;
use crate::physics::params::Parameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Initial temperatures: a preset name or one value per node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialSpec {
    Preset(String),
    Values(Vec<f64>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub length: f64,
    pub num_points: usize,
    pub dt: f64,
    pub num_steps: usize,
    pub alpha: f64,
    pub initial: InitialSpec,
    pub boundary: DirichletBoundary,
    pub schemes: Vec<String>,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        let params = Parameters::default();
        Self {
            length: params.length,
            num_points: params.num_points,
            dt: params.dt,
            num_steps: params.num_steps,
            alpha: params.alpha,
            initial: InitialSpec::Preset(Preset::SinPiX.name().to_string()),
            boundary: params.boundary,
            schemes: Scheme::ALL.iter().map(|s| s.name().to_string()).collect(),
            output_dir: PathBuf::from("output/heat1d"),
        }
    }
}

impl RunConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build validated parameters: scalars first, then initial conditions
    /// on the resulting grid, then boundaries.
    pub fn parameters(&self) -> Result<Parameters, SolverError> {
        let mut params = Parameters::new(
            self.length,
            self.num_points,
            self.dt,
            self.num_steps,
            self.alpha,
        )?;
        match &self.initial {
            InitialSpec::Preset(name) => {
                let preset: Preset = name.parse()?;
                params = params.with_preset(preset);
            }
            InitialSpec::Values(values) => params.set_initial_conditions(values)?,
        }
        params.set_boundary_conditions(self.boundary.left, self.boundary.right);
        Ok(params)
    }

    pub fn schemes(&self) -> Result<Vec<Scheme>, SolverError> {
        self.schemes.iter().map(|s| s.parse()).collect()
    }

    /// Human-readable name of the initial condition.
    pub fn initial_label(&self) -> String {
        match &self.initial {
            InitialSpec::Preset(name) => name.clone(),
            InitialSpec::Values(values) => format!("manual ({} values)", values.len()),
        }
    }
}
