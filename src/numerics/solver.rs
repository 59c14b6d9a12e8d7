use thiserror::Error;

/// Everything that can be wrong with a run's inputs.
///
/// All variants are invalid-argument failures raised before any time stepping
/// starts. The implicit tridiagonal solve has no variant here; a zero pivot
/// panics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("length of initial conditions must be {expected}, got {found}")]
    InitialConditionLength { expected: usize, found: usize },
    #[error("unknown initial condition type: {0}")]
    UnknownInitialCondition(String),
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("at least 3 grid points are required, got {0}")]
    TooFewPoints(usize),
    #[error("solution history has {found_steps} states of length {found_points}, expected {expected_steps} of length {expected_points}")]
    HistoryShape {
        expected_steps: usize,
        expected_points: usize,
        found_steps: usize,
        found_points: usize,
    },
}
