use super::StepInput;
use nalgebra::DVector;

/// One forward-time, centered-space step:
///
/// `u'[i] = u[i] + r (u[i+1] - 2 u[i] + u[i-1])` for every interior node,
/// then the boundary values are written to both ends.
///
/// Each interior update reads only the previous field. Nothing limits `r`;
/// above 0.5 the field oscillates and grows without bound.
pub fn step(u: &DVector<f64>, input: &StepInput) -> DVector<f64> {
    let r = input.mesh_ratio();
    let n = u.len();

    let mut next = u.clone();
    for i in 1..n - 1 {
        next[i] = u[i] + r * (u[i + 1] - 2.0 * u[i] + u[i - 1]);
    }
    input.boundary.apply(&mut next);
    next
}
