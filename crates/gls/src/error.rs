//! Error types for the peakweight-gls crate.

use peakweight_correlation::CorrelationError;

/// Error type for all fallible operations in the peakweight-gls crate.
///
/// Estimate positions in messages are 1-based (`x1`, `x2`, ...) to match the
/// way callers number their inputs; the `index` fields are 0-based.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WeightError {
    /// A correlation lookup failed.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// Returned when an estimate is not a finite positive value and so has
    /// no base-10 logarithm.
    #[error("estimate x{} must be finite and greater than zero, got {value}", index + 1)]
    NonPositiveEstimate {
        /// 0-based position of the estimate.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a standard error of prediction is not finite and
    /// positive.
    #[error("all SEP values must be greater than zero: SEP{} is {sep}", index + 1)]
    InvalidSep {
        /// 0-based position of the estimate.
        index: usize,
        /// The rejected SEP.
        sep: f64,
    },

    /// Returned when a correlation coefficient is outside `[-1, 1]`.
    #[error("correlation r{}{} = {r} is outside [-1, 1]", first + 1, second + 1)]
    InvalidCorrelation {
        /// 0-based position of the first estimate.
        first: usize,
        /// 0-based position of the second estimate.
        second: usize,
        /// The rejected coefficient.
        r: f64,
    },

    /// Returned when the normal equations are singular (perfectly collinear
    /// errors), so no unique weights exist.
    #[error("weights are undefined: the estimate errors are perfectly collinear")]
    DegenerateWeights,

    /// Returned when the weighted variance comes out negative, which happens
    /// when the pairwise correlations are not jointly consistent.
    #[error("weighted variance is negative ({variance}); the correlations are inconsistent")]
    NegativeVariance {
        /// The computed variance in squared log10 units.
        variance: f64,
    },

    /// Returned when fewer than two usable estimates are supplied.
    #[error("at least two estimation method values must be provided, got {n}")]
    InsufficientEstimates {
        /// Number of usable estimates.
        n: usize,
    },

    /// Returned when more estimates are supplied than can be weighted.
    #[error("at most {max} estimates can be supplied, got {n}")]
    TooManyEstimates {
        /// Number of estimates supplied.
        n: usize,
        /// Largest supported count.
        max: usize,
    },

    /// Returned when the number of supplied correlations does not match the
    /// number of estimate pairs.
    #[error("expected {expected} correlation coefficient(s), got {got}")]
    CorrelationCountMismatch {
        /// `n * (n - 1) / 2` for `n` estimates.
        expected: usize,
        /// Number supplied.
        got: usize,
    },

    /// Returned when a configuration value is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_non_positive_estimate() {
        let err = WeightError::NonPositiveEstimate {
            index: 1,
            value: -3.0,
        };
        assert_eq!(
            err.to_string(),
            "estimate x2 must be finite and greater than zero, got -3"
        );
    }

    #[test]
    fn error_invalid_sep() {
        let err = WeightError::InvalidSep { index: 0, sep: 0.0 };
        assert_eq!(
            err.to_string(),
            "all SEP values must be greater than zero: SEP1 is 0"
        );
    }

    #[test]
    fn error_invalid_correlation() {
        let err = WeightError::InvalidCorrelation {
            first: 0,
            second: 2,
            r: 1.5,
        };
        assert_eq!(err.to_string(), "correlation r13 = 1.5 is outside [-1, 1]");
    }

    #[test]
    fn error_degenerate() {
        assert_eq!(
            WeightError::DegenerateWeights.to_string(),
            "weights are undefined: the estimate errors are perfectly collinear"
        );
    }

    #[test]
    fn error_insufficient() {
        let err = WeightError::InsufficientEstimates { n: 1 };
        assert_eq!(
            err.to_string(),
            "at least two estimation method values must be provided, got 1"
        );
    }

    #[test]
    fn error_too_many() {
        let err = WeightError::TooManyEstimates { n: 5, max: 4 };
        assert_eq!(err.to_string(), "at most 4 estimates can be supplied, got 5");
    }

    #[test]
    fn error_count_mismatch() {
        let err = WeightError::CorrelationCountMismatch {
            expected: 3,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "expected 3 correlation coefficient(s), got 1"
        );
    }

    #[test]
    fn error_correlation_is_transparent() {
        let inner = CorrelationError::UnknownRegion {
            code: "GC0000".to_string(),
        };
        let err = WeightError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WeightError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WeightError>();
    }
}
