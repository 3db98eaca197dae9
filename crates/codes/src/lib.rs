//! # peakweight-codes
//!
//! Parsing of flow-statistic codes into an estimation method and an AEP
//! token.
//!
//! A code such as `ACPK0_2AEP` reads as "active-channel-width estimate of
//! the 0.2-percent AEP flood":
//!
//! | Part | Source | Example |
//! |------|--------|---------|
//! | method | first two characters, `PK` -> `BC`, `BF` -> `BW` | `AC` |
//! | AEP | first digit through last digit, `_` -> `.`, `Q` prefix | `Q0.2` |
//!
//! ```
//! use peakweight_codes::{FlowStatisticCode, Method};
//!
//! let code = FlowStatisticCode::parse("ACPK0_2AEP").unwrap();
//! assert_eq!(code.method(), Method::ActiveChannel);
//! assert_eq!(code.aep().as_str(), "Q0.2");
//!
//! let (method, aep) = peakweight_codes::parse("PK0_2AEP").unwrap();
//! assert_eq!(method, Method::BasinCharacteristics);
//! assert_eq!(aep.as_str(), "Q0.2");
//! ```

mod aep;
mod code;
mod error;
mod method;

pub use aep::AepToken;
pub use code::FlowStatisticCode;
pub use error::CodeError;
pub use method::Method;

/// Parses a flow-statistic code into its normalised method and AEP token.
///
/// Shorthand for [`FlowStatisticCode::parse`] when the raw text is not
/// needed afterwards.
pub fn parse(code: &str) -> Result<(Method, AepToken), CodeError> {
    let parsed = FlowStatisticCode::parse(code)?;
    Ok((parsed.method(), parsed.aep().clone()))
}
