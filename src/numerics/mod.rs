pub mod explicit;
pub mod implicit;
pub mod metrics;
pub mod solver;
pub mod timing;
pub mod transient;
pub mod tridiagonal;

use crate::numerics::solver::SolverError;
use crate::physics::bc::DirichletBoundary;
use crate::physics::params::Parameters;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest mesh ratio `alpha * dt / dx^2` for which the explicit scheme is stable.
pub const EXPLICIT_STABILITY_LIMIT: f64 = 0.5;

/// Time discretization used to advance the field by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Forward time, centered space. Stable only for `r <= 0.5`.
    Explicit,
    /// Backward time, centered space. Stable for every `r`.
    Implicit,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Explicit, Scheme::Implicit];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Explicit => "explicit",
            Scheme::Implicit => "implicit",
        }
    }

    /// Advance `u` by one time step. The result is a new vector; `u` is not
    /// modified.
    pub fn step(&self, u: &DVector<f64>, input: &StepInput) -> DVector<f64> {
        match self {
            Scheme::Explicit => explicit::step(u, input),
            Scheme::Implicit => implicit::step(u, input),
        }
    }

    /// Whether repeated stepping with mesh ratio `r` stays bounded. The
    /// schemes themselves never check this.
    pub fn is_stable_for(&self, r: f64) -> bool {
        match self {
            Scheme::Explicit => r <= EXPLICIT_STABILITY_LIMIT,
            Scheme::Implicit => true,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" => Ok(Scheme::Explicit),
            "implicit" => Ok(Scheme::Implicit),
            _ => Err(SolverError::UnknownScheme(s.to_string())),
        }
    }
}

/// Everything a scheme needs besides the current field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepInput {
    pub dx: f64,
    pub dt: f64,
    pub alpha: f64,
    pub boundary: DirichletBoundary,
}

impl StepInput {
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            dx: params.dx(),
            dt: params.dt,
            alpha: params.alpha,
            boundary: params.boundary,
        }
    }

    /// `r = alpha * dt / dx^2`
    pub fn mesh_ratio(&self) -> f64 {
        self.alpha * self.dt / (self.dx * self.dx)
    }
}
