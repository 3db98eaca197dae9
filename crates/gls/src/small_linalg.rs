//! Stack-allocated small linear algebra for the GLS normal equations.
//!
//! The reduced system has dimension `R = N - 1` for `N` estimates, so at
//! most 2x2 in practice.

/// Relative pivot size below which the system is treated as singular.
pub(crate) const PIVOT_TOL: f64 = 1e-12;

/// Stack-allocated vector of dimension `R`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SmallVec<const R: usize> {
    pub(crate) data: [f64; R],
}

/// Stack-allocated R x R matrix stored in column-major order.
///
/// `cols[c][r]` = element at row r, column c.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SmallMat<const R: usize> {
    pub(crate) cols: [[f64; R]; R],
}

impl<const R: usize> SmallVec<R> {
    /// Returns a zero-initialized vector.
    #[inline(always)]
    pub(crate) fn zeros() -> Self {
        Self { data: [0.0; R] }
    }
}

impl<const R: usize> SmallMat<R> {
    /// Returns a zero-initialized matrix.
    #[inline(always)]
    pub(crate) fn zeros() -> Self {
        Self {
            cols: [[0.0; R]; R],
        }
    }

    /// Returns the element at `(row, col)`.
    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.cols[col][row]
    }

    /// Sets the element at `(row, col)` to `val`.
    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, val: f64) {
        self.cols[col][row] = val;
    }

    /// Computes the matrix-vector product `self * v`.
    #[cfg(test)]
    pub(crate) fn mul_vec(&self, v: &SmallVec<R>) -> SmallVec<R> {
        let mut result = SmallVec::zeros();
        for i in 0..R {
            let mut sum = 0.0;
            for k in 0..R {
                sum += self.get(i, k) * v.data[k];
            }
            result.data[i] = sum;
        }
        result
    }

    /// Largest absolute element, used to scale the singularity test.
    fn max_abs(&self) -> f64 {
        self.cols
            .iter()
            .flat_map(|col| col.iter())
            .fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }

    /// Solves `self * x = b` by Gaussian elimination with partial pivoting.
    ///
    /// Returns `None` when a pivot is zero relative to the largest element
    /// (`|pivot| <= PIVOT_TOL * max|a_ij|`) or the matrix is all zeros.
    pub(crate) fn solve(&self, b: &SmallVec<R>) -> Option<SmallVec<R>> {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return None;
        }

        let mut a = *self;
        let mut x = *b;

        for k in 0..R {
            let pivot_row = (k..R)
                .max_by(|&i, &j| a.get(i, k).abs().total_cmp(&a.get(j, k).abs()))
                .unwrap_or(k);
            if a.get(pivot_row, k).abs() <= PIVOT_TOL * scale {
                return None;
            }
            if pivot_row != k {
                for c in 0..R {
                    let tmp = a.get(k, c);
                    a.set(k, c, a.get(pivot_row, c));
                    a.set(pivot_row, c, tmp);
                }
                x.data.swap(k, pivot_row);
            }
            for i in k + 1..R {
                let factor = a.get(i, k) / a.get(k, k);
                for c in k..R {
                    a.set(i, c, a.get(i, c) - factor * a.get(k, c));
                }
                x.data[i] -= factor * x.data[k];
            }
        }

        for k in (0..R).rev() {
            let mut sum = x.data[k];
            for c in k + 1..R {
                sum -= a.get(k, c) * x.data[c];
            }
            x.data[k] = sum / a.get(k, k);
        }
        Some(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_1x1() {
        let mut m = SmallMat::<1>::zeros();
        m.set(0, 0, 4.0);
        let b = SmallVec { data: [2.0] };
        let x = m.solve(&b).unwrap();
        assert_relative_eq!(x.data[0], 0.5);
    }

    #[test]
    fn test_solve_2x2_matches_cramer() {
        let (a, b, c) = (0.2, 0.05, 0.3);
        let rhs = [0.07, 0.04];
        let mut m = SmallMat::<2>::zeros();
        m.set(0, 0, a);
        m.set(0, 1, b);
        m.set(1, 0, b);
        m.set(1, 1, c);
        let x = m.solve(&SmallVec { data: rhs }).unwrap();

        let det = a * c - b * b;
        assert_relative_eq!(x.data[0], (c * rhs[0] - b * rhs[1]) / det, epsilon = 1e-14);
        assert_relative_eq!(x.data[1], (a * rhs[1] - b * rhs[0]) / det, epsilon = 1e-14);
    }

    #[test]
    fn test_solve_needs_pivoting() {
        let mut m = SmallMat::<2>::zeros();
        m.set(0, 1, 1.0);
        m.set(1, 0, 1.0);
        let x = m.solve(&SmallVec { data: [3.0, 5.0] }).unwrap();
        assert_relative_eq!(x.data[0], 5.0);
        assert_relative_eq!(x.data[1], 3.0);
    }

    #[test]
    fn test_solve_round_trip() {
        let mut m = SmallMat::<2>::zeros();
        m.set(0, 0, 2.0);
        m.set(0, 1, -1.0);
        m.set(1, 0, 0.5);
        m.set(1, 1, 3.0);
        let b = SmallVec { data: [1.0, -2.0] };
        let x = m.solve(&b).unwrap();
        let back = m.mul_vec(&x);
        assert_relative_eq!(back.data[0], b.data[0], epsilon = 1e-14);
        assert_relative_eq!(back.data[1], b.data[1], epsilon = 1e-14);
    }

    #[test]
    fn test_singular() {
        let mut m = SmallMat::<2>::zeros();
        m.set(0, 0, 1.0);
        m.set(0, 1, 2.0);
        m.set(1, 0, 2.0);
        m.set(1, 1, 4.0);
        assert!(m.solve(&SmallVec { data: [1.0, 1.0] }).is_none());
    }

    #[test]
    fn test_zero_matrix() {
        let m = SmallMat::<1>::zeros();
        assert!(m.solve(&SmallVec { data: [1.0] }).is_none());
    }
}
