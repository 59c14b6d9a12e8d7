use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Fixed temperatures held at the two ends of the rod.
///
/// No range check is applied: the ends may be hotter, colder or simply
/// different from anything in the interior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirichletBoundary {
    pub left: f64,
    pub right: f64,
}

impl DirichletBoundary {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Both ends held at zero.
    pub fn homogeneous() -> Self {
        Self::default()
    }

    /// Overwrite the first and last node of `u` with the boundary values.
    pub fn apply(&self, u: &mut DVector<f64>) {
        let last = u.len() - 1;
        u[0] = self.left;
        u[last] = self.right;
    }
}
