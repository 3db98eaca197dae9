//! Error types for the peakweight-codes crate.

/// Error type for all fallible operations in the peakweight-codes crate.
///
/// Covers flow-statistic codes whose method prefix is not a recognised
/// estimation method, codes that carry no AEP digits, and AEP tokens that
/// do not follow the `Q<value>` form used by the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Returned when the two-character method prefix is not BC, AC, BW or RS
    /// (after synonym normalisation).
    #[error("method '{token}' in code '{code}' is not valid (expected BC, PK, AC, BW, BF or RS)")]
    InvalidMethod {
        /// The full flow-statistic code.
        code: String,
        /// The prefix that failed to parse.
        token: String,
    },

    /// Returned when a flow-statistic code contains no digit characters.
    #[error("code '{code}' contains no AEP digits")]
    MalformedCode {
        /// The full flow-statistic code.
        code: String,
    },

    /// Returned when an AEP token is not of the form `Q<digits>`.
    #[error("AEP token '{token}' is not valid (expected e.g. 'Q0.2')")]
    InvalidAepToken {
        /// The rejected token.
        token: String,
    },
}
