use super::StepInput;
use super::tridiagonal::Tridiagonal;
use nalgebra::DVector;

/// One backward-time, centered-space step.
///
/// The `M = Nx - 2` interior values of the next field solve
///
/// ```text
/// -r u'[i-1] + (1 + 2r) u'[i] - r u'[i+1] = u[i]
/// ```
///
/// where the unknowns next to the ends are the (already known) boundary
/// values, so `r * left` and `r * right` move to the right-hand side of the
/// first and last equation. The matrix is strictly diagonally dominant for
/// every `r >= 0`.
pub fn step(u: &DVector<f64>, input: &StepInput) -> DVector<f64> {
    let r = input.mesh_ratio();
    let n = u.len();
    let m = n - 2;

    let system = Tridiagonal::constant(m, -r, 1.0 + 2.0 * r, -r);
    let mut rhs = u.rows(1, m).into_owned();
    rhs[0] += r * input.boundary.left;
    rhs[m - 1] += r * input.boundary.right;

    let interior = system.solve(&rhs);

    let mut next = DVector::zeros(n);
    next.rows_mut(1, m).copy_from(&interior);
    input.boundary.apply(&mut next);
    next
}
