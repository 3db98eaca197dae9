//! Error types for the peakweight-correlation crate.

use std::path::PathBuf;

use peakweight_codes::{AepToken, CodeError, Method};

use crate::pair::MethodPair;

/// Error type for all fallible operations in the peakweight-correlation crate.
///
/// Covers invalid code combinations, lookups that miss the reference tables,
/// and reference documents that cannot be read or violate the table
/// invariants.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CorrelationError {
    /// A flow-statistic code failed to parse.
    #[error(transparent)]
    Code(#[from] CodeError),

    /// Returned when the same code is supplied twice.
    #[error("codes must all be unique: '{code}' given more than once")]
    DuplicateCode {
        /// The repeated code.
        code: String,
    },

    /// Returned when two codes normalise to the same estimation method.
    #[error("codes '{code_a}' and '{code_b}' are both {method} estimates; methods must all be unique")]
    DuplicateMethod {
        /// The shared method.
        method: Method,
        /// First code.
        code_a: String,
        /// Second code.
        code_b: String,
    },

    /// Returned when two codes describe different flood frequencies.
    #[error("AEP must be the same for all flow statistics: '{code_a}' is {aep_a}, '{code_b}' is {aep_b}")]
    MismatchedAep {
        /// First code.
        code_a: String,
        /// AEP of the first code.
        aep_a: AepToken,
        /// Second code.
        code_b: String,
        /// AEP of the second code.
        aep_b: AepToken,
    },

    /// Returned when a regression-region code belongs to no hydrologic region.
    #[error("regression region '{code}' is not in any hydrologic region")]
    UnknownRegion {
        /// The regression-region code.
        code: String,
    },

    /// Returned when the table has no coefficient for the pair and AEP.
    #[error("no correlation coefficient for {pair} at {aep} in hydrologic region '{region}'")]
    CoefficientNotFound {
        /// Hydrologic region searched.
        region: String,
        /// Method pair searched.
        pair: MethodPair,
        /// AEP searched.
        aep: AepToken,
    },

    /// Returned when a regression-region code is listed under two regions.
    #[error("regression region '{code}' is listed in both '{first}' and '{second}'")]
    OverlappingRegion {
        /// The regression-region code.
        code: String,
        /// Region that already holds the code.
        first: String,
        /// Region that tried to claim it.
        second: String,
    },

    /// Returned when a method-pair key cannot be parsed.
    #[error("invalid method pair key '{key}': {reason}")]
    InvalidPairKey {
        /// The rejected key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Returned when a region lists the same unordered pair twice.
    #[error("method pair {pair} appears more than once in hydrologic region '{region}'")]
    DuplicatePair {
        /// Hydrologic region.
        region: String,
        /// The repeated pair.
        pair: MethodPair,
    },

    /// Returned when a reference document cannot be parsed.
    #[error("reference table error: {reason}")]
    Load {
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when a reference document cannot be read from disk.
    #[error("failed to read reference tables from {}: {reason}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Description of the I/O failure.
        reason: String,
    },
}

impl From<toml::de::Error> for CorrelationError {
    fn from(e: toml::de::Error) -> Self {
        CorrelationError::Load {
            reason: e.to_string(),
        }
    }
}
