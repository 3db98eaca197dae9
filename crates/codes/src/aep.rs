//! Annual-exceedance-probability tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

/// An AEP token in reference-table form, e.g. `Q0.2` or `Q66.7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AepToken(String);

impl AepToken {
    /// Extracts the AEP token embedded in a flow-statistic code.
    ///
    /// The token is the run from the first digit to the last digit,
    /// inclusive, with `_` replaced by `.` and a `Q` prefix:
    /// `ACPK0_2AEP` -> `Q0.2`.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::MalformedCode`] if `code` contains no digits.
    pub fn from_code(code: &str) -> Result<Self, CodeError> {
        let first = code.find(|c: char| c.is_ascii_digit());
        let last = code.rfind(|c: char| c.is_ascii_digit());
        match (first, last) {
            (Some(first), Some(last)) => {
                // ASCII digit, so last + 1 is a char boundary
                let digits = &code[first..=last];
                Ok(Self(format!("Q{}", digits.replace('_', "."))))
            }
            _ => Err(CodeError::MalformedCode {
                code: code.to_string(),
            }),
        }
    }

    /// Returns the token text, including the `Q` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AepToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a token in reference-table form (`Q` followed by at least one
/// digit).
impl FromStr for AepToken {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s
            .strip_prefix('Q')
            .is_some_and(|body| body.starts_with(|c: char| c.is_ascii_digit()));
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(CodeError::InvalidAepToken {
                token: s.to_string(),
            })
        }
    }
}
