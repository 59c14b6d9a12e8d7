use crate::numerics::solver::SolverError;
use crate::numerics::transient::SolutionHistory;
use crate::physics::analytical::analytical_field;
use crate::physics::params::Parameters;
use nalgebra::DVector;

/// RMSE of each history state against the analytical field at the same
/// time, index-aligned with the history.
pub type ErrorSequence = Vec<f64>;

/// Root-mean-square difference `sqrt(mean((a_i - b_i)^2))`.
pub fn rmse(a: &DVector<f64>, b: &DVector<f64>) -> f64 {
    assert_eq!(a.len(), b.len(), "rmse of vectors with different lengths");
    if a.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = a.iter().zip(b.iter()).map(|(a, b)| (a - b) * (a - b)).sum();
    (sum_sq / a.len() as f64).sqrt()
}

/// Compare every state of `history` with the analytical `sin(pi x / L)` decay
/// at `t = k * dt`, over all nodes including the two boundary nodes.
///
/// The comparison is made whatever initial and boundary values the run used;
/// the numbers only measure discretization error when the run started from
/// `sin(pi x / L)` with both ends at zero.
pub fn compute_errors(
    params: &Parameters,
    history: &SolutionHistory,
) -> Result<ErrorSequence, SolverError> {
    params.validate()?;
    let expected_steps = params.num_steps + 1;
    if history.len() != expected_steps || history.iter().any(|u| u.len() != params.num_points) {
        return Err(SolverError::HistoryShape {
            expected_steps,
            expected_points: params.num_points,
            found_steps: history.len(),
            found_points: history
                .iter()
                .map(|u| u.len())
                .find(|&len| len != params.num_points)
                .unwrap_or(params.num_points),
        });
    }

    let x = params.mesh().positions();
    let errors = history
        .iter()
        .enumerate()
        .map(|(k, numerical)| {
            let t = k as f64 * params.dt;
            let exact = analytical_field(&x, t, params.alpha, params.length);
            rmse(numerical, &exact)
        })
        .collect();
    Ok(errors)
}

/// Pointwise differences between two fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    pub l2: f64,
    pub max_abs: f64,
    pub max_idx: usize,
    pub mean_abs: f64,
}

/// Summarize how far `b` is from `a`.
pub fn compare(a: &DVector<f64>, b: &DVector<f64>) -> Comparison {
    assert_eq!(a.len(), b.len(), "compare of vectors with different lengths");

    let mut l2_sq = 0.0;
    let mut max_abs = 0.0;
    let mut max_idx = 0;
    let mut abs_sum = 0.0;

    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (y - x).abs();
        l2_sq += diff * diff;
        abs_sum += diff;
        if diff > max_abs {
            max_abs = diff;
            max_idx = i;
        }
    }

    Comparison {
        l2: l2_sq.sqrt(),
        max_abs,
        max_idx,
        mean_abs: if a.is_empty() { 0.0 } else { abs_sum / a.len() as f64 },
    }
}
