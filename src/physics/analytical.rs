use nalgebra::DVector;
use std::f64::consts::PI;

/// Exact temperature at `(x, t)` for the initial profile `sin(pi x / L)` with
/// both ends held at zero:
///
/// `u(x, t) = sin(pi x / L) * exp(-alpha (pi / L)^2 t)`
///
/// It is only the true solution for that one configuration. Comparing it to a
/// run with any other initial profile or non-zero boundaries still produces
/// numbers, but they do not measure discretization error.
pub fn analytical_solution(x: f64, t: f64, alpha: f64, length: f64) -> f64 {
    let k = PI / length;
    (k * x).sin() * (-alpha * k * k * t).exp()
}

/// [`analytical_solution`] evaluated at every position in `x`.
pub fn analytical_field(x: &DVector<f64>, t: f64, alpha: f64, length: f64) -> DVector<f64> {
    x.map(|x| analytical_solution(x, t, alpha, length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_initial_mode_at_time_zero() {
        assert_relative_eq!(analytical_solution(0.5, 0.0, 0.3, 1.0), 1.0);
        assert_relative_eq!(analytical_solution(1.0, 0.0, 0.3, 2.0), 1.0);
    }

    #[test]
    fn decays_at_the_mode_rate() {
        let (alpha, length, t) = (0.01, 1.0, 2.0);
        let ratio = analytical_solution(0.3, t, alpha, length) / analytical_solution(0.3, 0.0, alpha, length);
        assert_relative_eq!(ratio, (-alpha * PI * PI * t).exp(), max_relative = 1e-12);
    }

    #[test]
    fn magnitude_strictly_decreases_in_time() {
        let mut previous = f64::INFINITY;
        for step in 0..20 {
            let value = analytical_solution(0.25, step as f64 * 0.5, 0.1, 1.0).abs();
            assert!(value < previous);
            previous = value;
        }
    }
}
