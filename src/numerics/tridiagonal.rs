use nalgebra::DVector;

/// Banded `n x n` matrix with nonzeros only on the main diagonal and its two
/// neighbours.
///
/// `sub[0]` and `sup[n - 1]` lie outside the matrix and are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Tridiagonal {
    pub sub: Vec<f64>,
    pub diag: Vec<f64>,
    pub sup: Vec<f64>,
}

impl Tridiagonal {
    /// Matrix with the same value on every entry of each band.
    pub fn constant(n: usize, sub: f64, diag: f64, sup: f64) -> Self {
        Self {
            sub: vec![sub; n],
            diag: vec![diag; n],
            sup: vec![sup; n],
        }
    }

    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// `A * x`, used to check solutions.
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        let n = self.len();
        DVector::from_fn(n, |i, _| {
            let mut sum = self.diag[i] * x[i];
            if i > 0 {
                sum += self.sub[i] * x[i - 1];
            }
            if i + 1 < n {
                sum += self.sup[i] * x[i + 1];
            }
            sum
        })
    }

    /// Solve `A x = d` by forward elimination and back substitution (the
    /// Thomas algorithm) in `O(n)` time and `O(n)` extra space.
    ///
    /// No pivoting is done, so the matrix must be diagonally dominant. A zero
    /// pivot means that assumption was broken by the caller and panics.
    pub fn solve(&self, d: &DVector<f64>) -> DVector<f64> {
        let n = self.len();
        assert_eq!(self.sub.len(), n, "sub-diagonal length");
        assert_eq!(self.sup.len(), n, "super-diagonal length");
        assert_eq!(d.len(), n, "right-hand side length");
        if n == 0 {
            return DVector::zeros(0);
        }

        let mut c_prime = vec![0.0; n];
        let mut x = DVector::zeros(n);

        let mut pivot = self.diag[0];
        assert!(pivot != 0.0, "zero pivot in tridiagonal solve at row 0");
        c_prime[0] = self.sup[0] / pivot;
        x[0] = d[0] / pivot;

        for i in 1..n {
            pivot = self.diag[i] - self.sub[i] * c_prime[i - 1];
            assert!(pivot != 0.0, "zero pivot in tridiagonal solve at row {i}");
            c_prime[i] = self.sup[i] / pivot;
            x[i] = (d[i] - self.sub[i] * x[i - 1]) / pivot;
        }

        for i in (0..n - 1).rev() {
            x[i] -= c_prime[i] * x[i + 1];
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_returns_rhs() {
        let a = Tridiagonal::constant(4, 0.0, 1.0, 0.0);
        let d = DVector::from_vec(vec![1.0, -2.0, 3.0, -4.0]);
        assert_eq!(a.solve(&d), d);
    }

    #[test]
    fn laplacian_system() {
        let a = Tridiagonal::constant(4, -1.0, 2.0, -1.0);
        let d = DVector::from_vec(vec![1.0, 0.0, 0.0, 1.0]);
        let x = a.solve(&d);
        // exact solution is all ones
        for xi in x.iter() {
            assert_relative_eq!(*xi, 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn residual_vanishes_for_varying_bands() {
        let a = Tridiagonal {
            sub: vec![0.0, -0.3, -1.2, 0.4, -0.7],
            diag: vec![3.0, 4.5, 2.9, 3.3, 5.0],
            sup: vec![1.1, 0.8, -1.0, 2.0, 0.0],
        };
        let d = DVector::from_vec(vec![1.0, 2.0, -3.0, 0.5, 8.0]);
        let x = a.solve(&d);
        let residual = a.mul_vec(&x) - &d;
        assert!(residual.amax() < 1e-12);
    }

    #[test]
    fn single_unknown() {
        let a = Tridiagonal::constant(1, -0.5, 2.0, -0.5);
        let x = a.solve(&DVector::from_vec(vec![3.0]));
        assert_eq!(x[0], 1.5);
    }

    #[test]
    #[should_panic(expected = "zero pivot")]
    fn zero_pivot_panics() {
        let a = Tridiagonal::constant(3, 1.0, 0.0, 1.0);
        a.solve(&DVector::from_vec(vec![1.0, 1.0, 1.0]));
    }
}
