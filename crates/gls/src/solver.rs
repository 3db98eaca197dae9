//! Generalized-least-squares weights for two or three correlated estimates.
//!
//! Minimising `Var(sum a_i e_i)` subject to `sum a_i = 1` and eliminating
//! the last weight with `a_N = 1 - sum_{i<N} a_i` leaves the reduced normal
//! equations
//!
//! ```text
//! M_ij  = S_ij - S_iN - S_jN + S_NN      (i, j < N)
//! rhs_i = S_NN - S_iN
//! ```
//!
//! For two estimates `M` is the scalar `SEP1² + SEP2² - 2 S12`; for three it
//! is the `[A B; B C]` system of the channel-width weighting equations.

use crate::error::WeightError;
use crate::small_linalg::{SmallMat, SmallVec};

/// Largest number of estimates solved directly. Four are first reduced to
/// three.
pub(crate) const MAX_SOLVED: usize = 3;

/// Relative size below which a negative variance is rounding noise.
const VARIANCE_TOL: f64 = 1e-12;

/// Covariance matrix of the log-space estimate errors, `S_ij = r_ij SEP_i SEP_j`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Covariance {
    n: usize,
    s: [[f64; MAX_SOLVED]; MAX_SOLVED],
}

impl Covariance {
    /// Builds the matrix from SEPs and the upper-triangle correlations
    /// (`[r12]` or `[r12, r13, r23]`).
    pub(crate) fn new(seps: &[f64], correlations: &[f64]) -> Self {
        let n = seps.len().min(MAX_SOLVED);
        let mut s = [[0.0; MAX_SOLVED]; MAX_SOLVED];
        let mut k = 0;
        for i in 0..n {
            s[i][i] = seps[i] * seps[i];
            for j in i + 1..n {
                let cov = correlations[k] * (seps[i] * seps[j]);
                s[i][j] = cov;
                s[j][i] = cov;
                k += 1;
            }
        }
        Self { n, s }
    }

    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        self.s[i][j]
    }

    /// `a' S a`, written as `sum (a_i SEP_i)² + 2 sum_{i<j} a_i a_j S_ij`.
    pub(crate) fn quadratic_form(&self, a: &[f64]) -> f64 {
        let mut total = 0.0;
        for i in 0..self.n {
            total += a[i] * a[i] * self.s[i][i];
        }
        for i in 0..self.n {
            for j in i + 1..self.n {
                total += 2.0 * a[i] * a[j] * self.s[i][j];
            }
        }
        total
    }

    fn max_variance(&self) -> f64 {
        (0..self.n).map(|i| self.s[i][i]).fold(0.0, f64::max)
    }
}

/// Weights for `R + 1` estimates, or `None` if the reduced system is
/// singular.
fn gls_weights<const R: usize>(cov: &Covariance) -> Option<Vec<f64>> {
    let last = R;
    let s_nn = cov.get(last, last);
    let mut m = SmallMat::<R>::zeros();
    let mut rhs = SmallVec::<R>::zeros();
    for i in 0..R {
        for j in 0..R {
            m.set(i, j, s_nn + cov.get(i, j) - cov.get(i, last) - cov.get(j, last));
        }
        rhs.data[i] = s_nn - cov.get(i, last);
    }

    let a = m.solve(&rhs)?;
    let mut weights = Vec::with_capacity(R + 1);
    weights.extend_from_slice(&a.data);
    weights.push(a.data.iter().fold(1.0, |rest, w| rest - w));
    Some(weights)
}

/// Log-space solution of the weighting problem.
#[derive(Debug, Clone)]
pub(crate) struct Solution {
    pub(crate) weights: Vec<f64>,
    pub(crate) z_log: f64,
    pub(crate) sepz: f64,
}

/// Solves for validated inputs: 2 or 3 log values, positive SEPs, and
/// correlations in `[-1, 1]`.
///
/// # Errors
///
/// Returns [`WeightError::DegenerateWeights`] for a singular system and
/// [`WeightError::NegativeVariance`] when the correlations are jointly
/// inconsistent.
pub(crate) fn solve(
    log_values: &[f64],
    seps: &[f64],
    correlations: &[f64],
) -> Result<Solution, WeightError> {
    let cov = Covariance::new(seps, correlations);
    let weights = match log_values.len() {
        2 => gls_weights::<1>(&cov),
        3 => gls_weights::<2>(&cov),
        n if n < 2 => return Err(WeightError::InsufficientEstimates { n }),
        n => {
            return Err(WeightError::TooManyEstimates {
                n,
                max: MAX_SOLVED,
            });
        }
    }
    .ok_or(WeightError::DegenerateWeights)?;

    let z_log = weights
        .iter()
        .zip(log_values)
        .fold(0.0, |acc, (a, x)| acc + a * x);

    let variance = cov.quadratic_form(&weights);
    let variance = if variance >= 0.0 {
        variance
    } else if variance >= -VARIANCE_TOL * cov.max_variance() {
        0.0
    } else {
        return Err(WeightError::NegativeVariance { variance });
    };

    Ok(Solution {
        weights,
        z_log,
        sepz: variance.sqrt(),
    })
}
