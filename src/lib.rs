//! Finite-difference solver for the one-dimensional heat equation
//! `u_t = alpha * u_xx` on a rod with fixed (Dirichlet) end temperatures.
//!
//! A run is described by [`Parameters`], advanced by one of the two
//! [`Scheme`]s and returned as a [`SolutionHistory`]. The history can then be
//! measured against the closed-form decay of the `sin(pi x / L)` mode with
//! [`compute_errors`].

pub mod config;
pub mod discretization;
pub mod numerics;
pub mod physics;
pub mod processing;

pub use discretization::generator::{Preset, generate_initial_conditions};
pub use discretization::mesh::UniformMesh;
pub use numerics::metrics::{ErrorSequence, compute_errors};
pub use numerics::solver::SolverError;
pub use numerics::transient::{SolutionHistory, TransientSolver, solve};
pub use numerics::{Scheme, StepInput};
pub use physics::analytical::{analytical_field, analytical_solution};
pub use physics::bc::DirichletBoundary;
pub use physics::params::Parameters;
