use nalgebra::DVector;

/// A uniform grid of `num_points` nodes on `[0, length]`, boundary nodes included.
///
/// The spacing is always derived from `length` and `num_points`, so the two can
/// never drift apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformMesh {
    pub length: f64,
    pub num_points: usize,
}

impl UniformMesh {
    pub fn new(length: f64, num_points: usize) -> Self {
        Self { length, num_points }
    }

    /// Distance between adjacent nodes, `L / (Nx - 1)`.
    pub fn spacing(&self) -> f64 {
        self.length / (self.num_points - 1) as f64
    }

    /// Number of nodes strictly between the two boundary nodes.
    pub fn interior_points(&self) -> usize {
        self.num_points.saturating_sub(2)
    }

    /// Position of node `i`, `i * L / (Nx - 1)`.
    pub fn position(&self, i: usize) -> f64 {
        // pin the far end so it is exactly L
        if i + 1 == self.num_points {
            self.length
        } else {
            i as f64 * self.spacing()
        }
    }

    /// All node positions, first node at `0` and last at `L`.
    pub fn positions(&self) -> DVector<f64> {
        DVector::from_fn(self.num_points, |i, _| self.position(i))
    }
}
