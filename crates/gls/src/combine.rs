//! Input validation, four-to-three reduction, and assembly of results.

use tracing::debug;

use crate::bounds::{self, Advisory};
use crate::config::WeightConfig;
use crate::error::WeightError;
use crate::estimate::Estimate;
use crate::result::WeightedResult;
use crate::solver::{self, MAX_SOLVED};

/// Largest number of estimates accepted by any weighting routine.
pub const MAX_ESTIMATES: usize = 4;

/// Number of upper-triangle pairs among `n` estimates.
pub(crate) fn n_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// `(i, j)` with `i < j`, in row order: `(0,1), (0,2), ..., (1,2), ...`.
pub(crate) fn upper_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Checks the estimate count, returning it.
pub(crate) fn check_count(n: usize) -> Result<usize, WeightError> {
    if n < 2 {
        return Err(WeightError::InsufficientEstimates { n });
    }
    if n > MAX_ESTIMATES {
        return Err(WeightError::TooManyEstimates {
            n,
            max: MAX_ESTIMATES,
        });
    }
    Ok(n)
}

/// Rejects any SEP that is not finite and positive.
pub(crate) fn check_seps(estimates: &[Estimate], positions: &[usize]) -> Result<(), WeightError> {
    for (e, &index) in estimates.iter().zip(positions) {
        let sep = e.sep();
        if !sep.is_finite() || sep <= 0.0 {
            return Err(WeightError::InvalidSep { index, sep });
        }
    }
    Ok(())
}

/// Rejects any value without a base-10 logarithm.
pub(crate) fn check_values(estimates: &[Estimate], positions: &[usize]) -> Result<(), WeightError> {
    for (e, &index) in estimates.iter().zip(positions) {
        let value = e.value();
        if !value.is_finite() || value <= 0.0 {
            return Err(WeightError::NonPositiveEstimate { index, value });
        }
    }
    Ok(())
}

/// Rejects coefficients outside `[-1, 1]` (NaN included).
pub(crate) fn check_correlations(
    correlations: &[f64],
    positions: &[usize],
) -> Result<(), WeightError> {
    for ((i, j), &r) in upper_pairs(positions.len()).zip(correlations) {
        if !(-1.0..=1.0).contains(&r) {
            return Err(WeightError::InvalidCorrelation {
                first: positions[i],
                second: positions[j],
                r,
            });
        }
    }
    Ok(())
}

/// Position of the largest SEP; the first one wins a tie.
pub(crate) fn max_sep_position(estimates: &[Estimate]) -> usize {
    let mut best = 0;
    for (i, e) in estimates.iter().enumerate().skip(1) {
        if e.sep() > estimates[best].sep() {
            best = i;
        }
    }
    best
}

/// Removes every pair that involves `drop` from an upper-triangle list over
/// `n` estimates.
pub(crate) fn drop_from_upper(correlations: &[f64], n: usize, drop: usize) -> Vec<f64> {
    upper_pairs(n)
        .zip(correlations)
        .filter(|((i, j), _)| *i != drop && *j != drop)
        .map(|(_, &r)| r)
        .collect()
}

/// Weights 2 or 3 validated estimates and attaches the range advisory.
pub(crate) fn weigh_validated(
    estimates: &[Estimate],
    correlations: &[f64],
    positions: Vec<usize>,
    ci_multiplier: f64,
) -> Result<WeightedResult, WeightError> {
    debug_assert!(estimates.len() <= MAX_SOLVED);
    let log_values: Vec<f64> = estimates.iter().map(|e| e.value().log10()).collect();
    let seps: Vec<f64> = estimates.iter().map(Estimate::sep).collect();

    let solution = solver::solve(&log_values, &seps, correlations)?;

    let mut advisories = Vec::new();
    if bounds::outside_input_range(solution.z_log, &log_values) {
        debug!(z_log = solution.z_log, "weighted value outside input range");
        advisories.push(Advisory::OutsideInputRange);
    }

    Ok(WeightedResult::new(
        solution.z_log,
        solution.sepz,
        ci_multiplier,
        solution.weights,
        positions,
        advisories,
    ))
}

/// Weights 2-4 estimates with caller-supplied correlations.
///
/// `correlations` lists the upper triangle in row order: `[r12]` for two
/// estimates, `[r12, r13, r23]` for three, and
/// `[r12, r13, r14, r23, r24, r34]` for four. With four estimates the one
/// with the largest SEP is left out (the first on ties) and the result
/// carries [`Advisory::ReducedToThree`].
///
/// Inputs are checked in this order: count, coefficient count, SEPs,
/// correlations, values. With four estimates only the SEPs are checked on
/// all of them; correlations and values are checked on the three kept.
///
/// # Errors
///
/// See [`WeightError`]. Values outside the input range are an advisory, not
/// an error.
#[tracing::instrument(skip_all, fields(n = estimates.len()))]
pub fn combine(
    estimates: &[Estimate],
    correlations: &[f64],
    config: &WeightConfig,
) -> Result<WeightedResult, WeightError> {
    let n = check_count(estimates.len())?;
    let expected = n_pairs(n);
    if correlations.len() != expected {
        return Err(WeightError::CorrelationCountMismatch {
            expected,
            got: correlations.len(),
        });
    }
    let ci_multiplier = config.ci_multiplier()?;

    let positions: Vec<usize> = (0..n).collect();
    check_seps(estimates, &positions)?;

    let dropped = (n > MAX_SOLVED).then(|| max_sep_position(estimates));
    let (kept, kept_r, kept_positions) = match dropped {
        None => (estimates.to_vec(), correlations.to_vec(), positions),
        Some(d) => {
            debug!(dropped = d, sep = estimates[d].sep(), "dropping largest SEP");
            let kept: Vec<Estimate> = estimates
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != d)
                .map(|(_, e)| *e)
                .collect();
            let kept_positions = positions.into_iter().filter(|&i| i != d).collect();
            (kept, drop_from_upper(correlations, n, d), kept_positions)
        }
    };

    check_correlations(&kept_r, &kept_positions)?;
    check_values(&kept, &kept_positions)?;

    let mut result = weigh_validated(&kept, &kept_r, kept_positions, ci_multiplier)?;
    if let Some(d) = dropped {
        result.push_advisory(Advisory::ReducedToThree { dropped: d });
    }
    Ok(result)
}
