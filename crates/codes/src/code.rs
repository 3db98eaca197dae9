//! Flow-statistic codes.

use std::fmt;
use std::str::FromStr;

use crate::aep::AepToken;
use crate::error::CodeError;
use crate::method::Method;

/// A parsed flow-statistic code such as `ACPK0_2AEP`.
///
/// Keeps the original text alongside the normalised method and AEP token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowStatisticCode {
    raw: String,
    method: Method,
    aep: AepToken,
}

impl FlowStatisticCode {
    /// Parses a flow-statistic code.
    ///
    /// The method is the first two characters (`PK` normalised to `BC`,
    /// `BF` to `BW`); the AEP token is taken from the embedded digit run.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidMethod`] if the prefix is not a known
    /// method, or [`CodeError::MalformedCode`] if the code has no digits.
    pub fn parse(code: &str) -> Result<Self, CodeError> {
        let token = code.get(..2).unwrap_or(code);
        let method = Method::from_token(token).ok_or_else(|| CodeError::InvalidMethod {
            code: code.to_string(),
            token: token.to_string(),
        })?;
        let aep = AepToken::from_code(code)?;
        Ok(Self {
            raw: code.to_string(),
            method,
            aep,
        })
    }

    /// Returns the code as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the normalised estimation method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the AEP token.
    pub fn aep(&self) -> &AepToken {
        &self.aep
    }
}

impl fmt::Display for FlowStatisticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FlowStatisticCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
