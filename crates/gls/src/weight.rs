//! Entry points: explicit-correlation routines and code-driven weighting.

use peakweight_correlation::ReferenceTables;
use tracing::debug;

use crate::bounds::Advisory;
use crate::combine::{
    self, MAX_ESTIMATES, check_correlations, check_count, check_seps, check_values,
    max_sep_position, weigh_validated,
};
use crate::config::WeightConfig;
use crate::error::WeightError;
use crate::estimate::{CodedEstimate, Estimate};
use crate::result::WeightedResult;
use crate::solver::MAX_SOLVED;

fn zip_estimates<const N: usize>(values: [f64; N], seps: [f64; N]) -> [Estimate; N] {
    std::array::from_fn(|i| Estimate::new(values[i], seps[i]))
}

/// Weights two estimates with correlation `r12`, using the default
/// configuration.
///
/// # Example
///
/// ```
/// use peakweight_gls::weight2;
///
/// let result = weight2([40.46, 63.39], [0.554, 0.677], 0.0).unwrap();
/// assert!(result.z() > 40.46 && result.z() < 63.39);
/// assert!(result.warning().is_none());
/// ```
pub fn weight2(values: [f64; 2], seps: [f64; 2], r12: f64) -> Result<WeightedResult, WeightError> {
    combine::combine(&zip_estimates(values, seps), &[r12], &WeightConfig::default())
}

/// Weights three estimates with correlations `[r12, r13, r23]`.
pub fn weight3(
    values: [f64; 3],
    seps: [f64; 3],
    correlations: [f64; 3],
) -> Result<WeightedResult, WeightError> {
    combine::combine(
        &zip_estimates(values, seps),
        &correlations,
        &WeightConfig::default(),
    )
}

/// Weights four estimates by leaving out the one with the largest SEP.
///
/// `correlations` is `[r12, r13, r14, r23, r24, r34]`.
pub fn weight4(
    values: [f64; 4],
    seps: [f64; 4],
    correlations: [f64; 6],
) -> Result<WeightedResult, WeightError> {
    combine::combine(
        &zip_estimates(values, seps),
        &correlations,
        &WeightConfig::default(),
    )
}

/// Weights coded estimates, looking correlations up in reference tables.
///
/// All estimates must come from the regression region passed to each call
/// and share one AEP; their methods must differ.
///
/// # Example
///
/// ```
/// use peakweight_correlation::ReferenceTables;
/// use peakweight_gls::{CodedEstimate, Weighter};
///
/// let tables = ReferenceTables::bundled().unwrap();
/// let weighter = Weighter::new(&tables);
/// let result = weighter
///     .weight_est3(
///         "GC1851",
///         &[
///             CodedEstimate::new("PK1AEP", 549.54, 0.234),
///             CodedEstimate::new("ACPK1AEP", 281.84, 0.262),
///             CodedEstimate::new("BFPK1AEP", 316.23, 0.283),
///         ],
///     )
///     .unwrap();
/// assert_eq!(result.used(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Weighter<'t> {
    tables: &'t ReferenceTables,
    config: WeightConfig,
}

impl<'t> Weighter<'t> {
    /// Creates a weighter with the default configuration.
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self {
            tables,
            config: WeightConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: WeightConfig) -> Self {
        self.config = config;
        self
    }

    /// Weights two coded estimates.
    pub fn weight_est2(
        &self,
        region_code: &str,
        estimates: &[CodedEstimate; 2],
    ) -> Result<WeightedResult, WeightError> {
        self.weight_coded(region_code, estimates, vec![0, 1])
    }

    /// Weights three coded estimates.
    pub fn weight_est3(
        &self,
        region_code: &str,
        estimates: &[CodedEstimate; 3],
    ) -> Result<WeightedResult, WeightError> {
        self.weight_coded(region_code, estimates, vec![0, 1, 2])
    }

    /// Weights four coded estimates, leaving out the one with the largest
    /// SEP. Only the three kept codes are resolved.
    pub fn weight_est4(
        &self,
        region_code: &str,
        estimates: &[CodedEstimate; 4],
    ) -> Result<WeightedResult, WeightError> {
        self.weight_coded(region_code, estimates, vec![0, 1, 2, 3])
    }

    /// Weights whichever estimates are provided.
    ///
    /// An estimate whose value is not greater than zero counts as not
    /// provided and is skipped together with its SEP and code. The remaining
    /// two, three or four go to [`weight_est2`](Self::weight_est2),
    /// [`weight_est3`](Self::weight_est3) or
    /// [`weight_est4`](Self::weight_est4). Positions in the result and in
    /// errors refer to `estimates`.
    #[tracing::instrument(skip(self, estimates), fields(n = estimates.len()))]
    pub fn weight_est(
        &self,
        region_code: &str,
        estimates: &[CodedEstimate],
    ) -> Result<WeightedResult, WeightError> {
        if estimates.len() > MAX_ESTIMATES {
            return Err(WeightError::TooManyEstimates {
                n: estimates.len(),
                max: MAX_ESTIMATES,
            });
        }
        let (positions, provided): (Vec<usize>, Vec<CodedEstimate>) = estimates
            .iter()
            .enumerate()
            .filter(|(_, e)| e.estimate().is_provided())
            .map(|(i, e)| (i, e.clone()))
            .unzip();
        debug!(provided = provided.len(), "filtered estimates");
        self.weight_coded(region_code, &provided, positions)
    }

    fn weight_coded(
        &self,
        region_code: &str,
        coded: &[CodedEstimate],
        positions: Vec<usize>,
    ) -> Result<WeightedResult, WeightError> {
        let n = check_count(coded.len())?;
        let ci_multiplier = self.config.ci_multiplier()?;

        let estimates: Vec<Estimate> = coded.iter().map(CodedEstimate::estimate).collect();
        check_seps(&estimates, &positions)?;
        check_values(&estimates, &positions)?;

        let dropped = (n > MAX_SOLVED).then(|| max_sep_position(&estimates));
        let keep = |i: &usize| Some(*i) != dropped;
        let kept: Vec<usize> = (0..n).filter(keep).collect();

        let codes: Vec<&str> = kept.iter().map(|&i| coded[i].code()).collect();
        let correlations = self.tables.pairwise(region_code, &codes)?;

        let kept_estimates: Vec<Estimate> = kept.iter().map(|&i| estimates[i]).collect();
        let kept_positions: Vec<usize> = kept.iter().map(|&i| positions[i]).collect();
        check_correlations(&correlations, &kept_positions)?;

        debug!(region_code, ?codes, ?correlations, "resolved correlations");
        let mut result = weigh_validated(
            &kept_estimates,
            &correlations,
            kept_positions,
            ci_multiplier,
        )?;
        if let Some(d) = dropped {
            result.push_advisory(Advisory::ReducedToThree {
                dropped: positions[d],
            });
        }
        Ok(result)
    }
}

/// [`Weighter::weight_est2`] with the default configuration.
pub fn weight_est2(
    tables: &ReferenceTables,
    region_code: &str,
    estimates: &[CodedEstimate; 2],
) -> Result<WeightedResult, WeightError> {
    Weighter::new(tables).weight_est2(region_code, estimates)
}

/// [`Weighter::weight_est3`] with the default configuration.
pub fn weight_est3(
    tables: &ReferenceTables,
    region_code: &str,
    estimates: &[CodedEstimate; 3],
) -> Result<WeightedResult, WeightError> {
    Weighter::new(tables).weight_est3(region_code, estimates)
}

/// [`Weighter::weight_est4`] with the default configuration.
pub fn weight_est4(
    tables: &ReferenceTables,
    region_code: &str,
    estimates: &[CodedEstimate; 4],
) -> Result<WeightedResult, WeightError> {
    Weighter::new(tables).weight_est4(region_code, estimates)
}

/// [`Weighter::weight_est`] with the default configuration.
pub fn weight_est(
    tables: &ReferenceTables,
    region_code: &str,
    estimates: &[CodedEstimate],
) -> Result<WeightedResult, WeightError> {
    Weighter::new(tables).weight_est(region_code, estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use peakweight_correlation::CorrelationError;

    fn tables() -> ReferenceTables {
        ReferenceTables::bundled().unwrap()
    }

    fn example() -> [CodedEstimate; 3] {
        [
            CodedEstimate::new("PK1AEP", 549.54, 0.234),
            CodedEstimate::new("ACPK1AEP", 281.84, 0.262),
            CodedEstimate::new("BFPK1AEP", 316.23, 0.283),
        ]
    }

    #[test]
    fn test_coded_matches_explicit() {
        let t = tables();
        let coded = weight_est3(&t, "GC1851", &example()).unwrap();
        let explicit = weight3(
            [549.54, 281.84, 316.23],
            [0.234, 0.262, 0.283],
            [0.553, 0.518, 0.907],
        )
        .unwrap();
        assert_relative_eq!(coded.z_log(), explicit.z_log(), epsilon = 1e-12);
        assert_relative_eq!(coded.sepz(), explicit.sepz(), epsilon = 1e-12);
    }

    #[test]
    fn test_filtered_positions_are_original() {
        let t = tables();
        let [a, b, c] = example();
        let input = vec![a, CodedEstimate::new("RSPK1AEP", 0.0, 0.3), b, c];
        let res = weight_est(&t, "GC1851", &input).unwrap();
        assert_eq!(res.used(), &[0, 2, 3]);
        assert!(
            !res.advisories()
                .iter()
                .any(|a| matches!(a, Advisory::ReducedToThree { .. }))
        );
    }

    #[test]
    fn test_filtered_sep_error_uses_original_position() {
        let t = tables();
        let input = vec![
            CodedEstimate::new("PK1AEP", 549.54, 0.234),
            CodedEstimate::new("RSPK1AEP", -1.0, 0.3),
            CodedEstimate::new("ACPK1AEP", 281.84, 0.0),
        ];
        let err = weight_est(&t, "GC1851", &input).unwrap_err();
        assert!(matches!(err, WeightError::InvalidSep { index: 2, .. }));
    }

    #[test]
    fn test_too_many_inputs() {
        let t = tables();
        let input = vec![CodedEstimate::new("PK1AEP", 1.0, 0.2); 5];
        assert!(matches!(
            weight_est(&t, "GC1851", &input),
            Err(WeightError::TooManyEstimates { n: 5, max: 4 })
        ));
    }

    #[test]
    fn test_unknown_region_propagates() {
        let t = tables();
        let err = weight_est3(&t, "GC0000", &example()).unwrap_err();
        assert!(matches!(
            err,
            WeightError::Correlation(CorrelationError::UnknownRegion { .. })
        ));
    }

    #[test]
    fn test_custom_multiplier_scales_ci() {
        let t = tables();
        let default = Weighter::new(&t).weight_est3("GC1851", &example()).unwrap();
        let wide = Weighter::new(&t)
            .with_config(WeightConfig::new().with_ci_multiplier(3.28))
            .weight_est3("GC1851", &example())
            .unwrap();
        assert_relative_eq!(wide.ci(), 2.0 * default.ci(), epsilon = 1e-12);
        assert_relative_eq!(wide.z(), default.z(), epsilon = 1e-9);
    }
}
