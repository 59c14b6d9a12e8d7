use crate::discretization::generator::Preset;
use crate::discretization::mesh::UniformMesh;
use crate::numerics::solver::SolverError;
use crate::physics::bc::DirichletBoundary;
use nalgebra::DVector;

/// Full description of one run: rod, grid, time stepping, diffusivity,
/// initial temperatures and end temperatures.
///
/// A solve only ever borrows a `Parameters` immutably, so nothing can change
/// underneath it while time steps are being taken.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    /// Rod length `L`.
    pub length: f64,
    /// Grid nodes `Nx`, boundary nodes included.
    pub num_points: usize,
    pub dt: f64,
    /// Time steps `Nt` to advance.
    pub num_steps: usize,
    /// Diffusivity.
    pub alpha: f64,
    /// One temperature per node, boundary nodes included.
    pub initial_conditions: DVector<f64>,
    pub boundary: DirichletBoundary,
}

impl Default for Parameters {
    fn default() -> Self {
        let num_points = 50;
        Self {
            length: 1.0,
            num_points,
            dt: 0.01,
            num_steps: 100,
            alpha: 0.01,
            initial_conditions: DVector::zeros(num_points),
            boundary: DirichletBoundary::homogeneous(),
        }
    }
}

impl Parameters {
    /// Validated parameters with zero initial conditions and zero boundaries.
    pub fn new(
        length: f64,
        num_points: usize,
        dt: f64,
        num_steps: usize,
        alpha: f64,
    ) -> Result<Self, SolverError> {
        let mut params = Self::default();
        params.set_parameters(length, num_points, dt, num_steps, alpha)?;
        Ok(params)
    }

    /// Replace the five scalars and reset the initial conditions to zeros of
    /// the new length. Nothing is changed if a scalar is invalid.
    pub fn set_parameters(
        &mut self,
        length: f64,
        num_points: usize,
        dt: f64,
        num_steps: usize,
        alpha: f64,
    ) -> Result<(), SolverError> {
        check_scalars(length, num_points, dt, alpha)?;
        self.length = length;
        self.num_points = num_points;
        self.dt = dt;
        self.num_steps = num_steps;
        self.alpha = alpha;
        self.initial_conditions = DVector::zeros(num_points);
        Ok(())
    }

    /// Replace the initial conditions. The stored vector is left untouched
    /// when `values` does not have exactly `num_points` entries.
    pub fn set_initial_conditions(&mut self, values: &[f64]) -> Result<(), SolverError> {
        if values.len() != self.num_points {
            return Err(SolverError::InitialConditionLength {
                expected: self.num_points,
                found: values.len(),
            });
        }
        self.initial_conditions = DVector::from_column_slice(values);
        Ok(())
    }

    pub fn set_boundary_conditions(&mut self, left: f64, right: f64) {
        self.boundary = DirichletBoundary::new(left, right);
    }

    pub fn with_initial_conditions(mut self, values: &[f64]) -> Result<Self, SolverError> {
        self.set_initial_conditions(values)?;
        Ok(self)
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.initial_conditions = preset.generate(&self.mesh());
        self
    }

    pub fn with_boundary(mut self, left: f64, right: f64) -> Self {
        self.set_boundary_conditions(left, right);
        self
    }

    pub fn mesh(&self) -> UniformMesh {
        UniformMesh::new(self.length, self.num_points)
    }

    /// Grid spacing `L / (Nx - 1)`.
    pub fn dx(&self) -> f64 {
        self.mesh().spacing()
    }

    /// Physical time reached after the last step.
    pub fn final_time(&self) -> f64 {
        self.num_steps as f64 * self.dt
    }

    /// Check every invariant a solve relies on. The fields are public, so a
    /// solve re-checks them instead of trusting the setters.
    pub fn validate(&self) -> Result<(), SolverError> {
        check_scalars(self.length, self.num_points, self.dt, self.alpha)?;
        if self.initial_conditions.len() != self.num_points {
            return Err(SolverError::InitialConditionLength {
                expected: self.num_points,
                found: self.initial_conditions.len(),
            });
        }
        Ok(())
    }
}

fn check_scalars(length: f64, num_points: usize, dt: f64, alpha: f64) -> Result<(), SolverError> {
    for (name, value) in [("L", length), ("dt", dt), ("alpha", alpha)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(SolverError::NonPositive { name, value });
        }
    }
    if num_points < 3 {
        return Err(SolverError::TooFewPoints(num_points));
    }
    Ok(())
}
