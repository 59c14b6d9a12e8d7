use super::mesh::UniformMesh;
use crate::numerics::solver::SolverError;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Temperature held at every node by [`Preset::Constant`].
pub const CONSTANT_TEMPERATURE: f64 = 10.0;

/// Named initial temperature profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// `sin(pi * x)`. The argument is the raw position, not `x / L`, so the
    /// profile only vanishes at both ends when `L = 1`.
    #[serde(rename = "sin(πx)")]
    SinPiX,
    /// `x * (L - x)`.
    #[serde(rename = "x(L-x)")]
    Parabola,
    #[serde(rename = "constant")]
    Constant,
    #[serde(rename = "zero")]
    Zero,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::SinPiX,
        Preset::Parabola,
        Preset::Constant,
        Preset::Zero,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::SinPiX => "sin(πx)",
            Preset::Parabola => "x(L-x)",
            Preset::Constant => "constant",
            Preset::Zero => "zero",
        }
    }

    /// Evaluate the profile at every node of `mesh`.
    pub fn generate(&self, mesh: &UniformMesh) -> DVector<f64> {
        let x = mesh.positions();
        let length = mesh.length;
        match self {
            Preset::SinPiX => x.map(|x| (PI * x).sin()),
            Preset::Parabola => x.map(|x| x * (length - x)),
            Preset::Constant => DVector::from_element(mesh.num_points, CONSTANT_TEMPERATURE),
            Preset::Zero => DVector::zeros(mesh.num_points),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SolverError::UnknownInitialCondition(s.to_string()))
    }
}

/// Build the initial temperature vector for the preset called `name` on a
/// rod of `length` sampled at `num_points` nodes.
pub fn generate_initial_conditions(
    length: f64,
    num_points: usize,
    name: &str,
) -> Result<DVector<f64>, SolverError> {
    let preset: Preset = name.parse()?;
    Ok(preset.generate(&UniformMesh::new(length, num_points)))
}
