//! Input-range check and the advisories attached to results.

use std::fmt;

/// A non-fatal note attached to a weighted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// The weighted value lies outside the range of the inputs, which
    /// happens when the estimate errors are strongly correlated.
    OutsideInputRange,
    /// Four estimates were supplied; the one with the largest SEP was left
    /// out.
    ReducedToThree {
        /// 0-based input position of the estimate that was left out.
        dropped: usize,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OutsideInputRange => {
                f.write_str("Weighted value is outside the range of input values.")
            }
            Advisory::ReducedToThree { .. } => f.write_str(
                "Only 3 estimation methods can be weighted; \
                 the 3 estimation methods with lowest SEP values were weighted.",
            ),
        }
    }
}

/// Returns `true` if `z_log` lies outside `[min, max]` of `log_values`.
pub fn outside_input_range(z_log: f64, log_values: &[f64]) -> bool {
    let min = log_values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = log_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    z_log < min || z_log > max
}
