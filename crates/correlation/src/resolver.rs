//! Cross-correlation lookup for pairs of flow-statistic codes.

use std::path::Path;

use peakweight_codes::{AepToken, FlowStatisticCode};
use tracing::debug;

use crate::error::CorrelationError;
use crate::load;
use crate::pair::MethodPair;
use crate::region::RegionTable;
use crate::table::CorrelationTable;

/// Region membership and correlation coefficients, loaded once and shared
/// read-only by every lookup.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    regions: RegionTable,
    correlations: CorrelationTable,
}

impl ReferenceTables {
    /// Wraps already-built tables.
    pub fn new(regions: RegionTable, correlations: CorrelationTable) -> Self {
        Self {
            regions,
            correlations,
        }
    }

    /// Parses tables from a TOML document. See [`crate::load`] for the format.
    pub fn from_toml_str(text: &str) -> Result<Self, CorrelationError> {
        load::from_toml_str(text)
    }

    /// Reads tables from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, CorrelationError> {
        load::from_path(path)
    }

    /// Parses the sample tables compiled into the crate.
    pub fn bundled() -> Result<Self, CorrelationError> {
        load::bundled()
    }

    /// Returns the region-membership table.
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Returns the coefficient table.
    pub fn correlations(&self) -> &CorrelationTable {
        &self.correlations
    }

    /// Returns the hydrologic region containing a regression-region code.
    pub fn hydrologic_region(&self, region_code: &str) -> Result<&str, CorrelationError> {
        self.regions.resolve(region_code)
    }

    /// Looks up the coefficient for an explicit method pair and AEP.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::UnknownRegion`] or
    /// [`CorrelationError::CoefficientNotFound`].
    pub fn coefficient(
        &self,
        region_code: &str,
        pair: MethodPair,
        aep: &AepToken,
    ) -> Result<f64, CorrelationError> {
        let region = self.regions.resolve(region_code)?;
        self.correlations
            .get(region, pair, aep)
            .ok_or_else(|| CorrelationError::CoefficientNotFound {
                region: region.to_string(),
                pair,
                aep: aep.clone(),
            })
    }

    /// Returns the correlation between the residuals of the methods behind
    /// `code_a` and `code_b` in the hydrologic region containing
    /// `region_code`.
    ///
    /// Checks run in order: identical codes, code parsing, same method,
    /// differing AEPs, unknown region, missing coefficient.
    ///
    /// # Errors
    ///
    /// Returns the [`CorrelationError`] for the first check that fails.
    pub fn correlation(
        &self,
        region_code: &str,
        code_a: &str,
        code_b: &str,
    ) -> Result<f64, CorrelationError> {
        if code_a == code_b {
            return Err(CorrelationError::DuplicateCode {
                code: code_a.to_string(),
            });
        }
        let a = FlowStatisticCode::parse(code_a)?;
        let b = FlowStatisticCode::parse(code_b)?;
        self.correlation_parsed(region_code, &a, &b)
    }

    /// As [`ReferenceTables::correlation`], for codes that are already parsed.
    pub fn correlation_parsed(
        &self,
        region_code: &str,
        a: &FlowStatisticCode,
        b: &FlowStatisticCode,
    ) -> Result<f64, CorrelationError> {
        if a.as_str() == b.as_str() {
            return Err(CorrelationError::DuplicateCode {
                code: a.as_str().to_string(),
            });
        }
        let pair =
            MethodPair::new(a.method(), b.method()).ok_or_else(|| CorrelationError::DuplicateMethod {
                method: a.method(),
                code_a: a.as_str().to_string(),
                code_b: b.as_str().to_string(),
            })?;
        if a.aep() != b.aep() {
            return Err(CorrelationError::MismatchedAep {
                code_a: a.as_str().to_string(),
                aep_a: a.aep().clone(),
                code_b: b.as_str().to_string(),
                aep_b: b.aep().clone(),
            });
        }

        let r = self.coefficient(region_code, pair, a.aep())?;
        debug!(region_code, %pair, aep = %a.aep(), r, "resolved correlation");
        Ok(r)
    }

    /// Resolves every pairwise coefficient among `codes`.
    ///
    /// The result lists the upper triangle row by row: for three codes,
    /// `[r12, r13, r23]`.
    ///
    /// # Errors
    ///
    /// Returns the first [`CorrelationError`] met, in pair order.
    pub fn pairwise(&self, region_code: &str, codes: &[&str]) -> Result<Vec<f64>, CorrelationError> {
        for (i, code) in codes.iter().enumerate() {
            if codes[i + 1..].contains(code) {
                return Err(CorrelationError::DuplicateCode {
                    code: code.to_string(),
                });
            }
        }
        let parsed = codes
            .iter()
            .map(|c| FlowStatisticCode::parse(c))
            .collect::<Result<Vec<_>, _>>()?;
        let mut out = Vec::with_capacity(codes.len() * codes.len().saturating_sub(1) / 2);
        for (i, a) in parsed.iter().enumerate() {
            for b in &parsed[i + 1..] {
                out.push(self.correlation_parsed(region_code, a, b)?);
            }
        }
        Ok(out)
    }
}
