//! Unordered pairs of estimation methods.

use std::fmt;
use std::str::FromStr;

use peakweight_codes::Method;

use crate::error::CorrelationError;

/// An unordered pair of distinct estimation methods.
///
/// `MethodPair::new(a, b) == MethodPair::new(b, a)`, so a table keyed by
/// `MethodPair` answers symmetric queries with a single lookup. Displays
/// in canonical order, e.g. `BC,AC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodPair {
    low: Method,
    high: Method,
}

impl MethodPair {
    /// Creates a pair from two methods in either order.
    ///
    /// Returns `None` if both methods are the same.
    pub fn new(a: Method, b: Method) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns both methods in canonical order.
    pub fn methods(self) -> (Method, Method) {
        (self.low, self.high)
    }

    /// Returns all six pairs over the four methods.
    pub fn all() -> impl Iterator<Item = MethodPair> {
        Method::ALL.into_iter().enumerate().flat_map(|(i, a)| {
            Method::ALL[i + 1..]
                .iter()
                .map(move |&b| MethodPair { low: a, high: b })
        })
    }
}

impl fmt::Display for MethodPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.low, self.high)
    }
}

/// Parses a table key such as `"BC,AC"` or `"AC, PK"`.
impl FromStr for MethodPair {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CorrelationError::InvalidPairKey {
            key: s.to_string(),
            reason: reason.to_string(),
        };
        let (a, b) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected two method tokens separated by ','"))?;
        let a = Method::from_token(a.trim()).ok_or_else(|| invalid("unknown first method"))?;
        let b = Method::from_token(b.trim()).ok_or_else(|| invalid("unknown second method"))?;
        MethodPair::new(a, b).ok_or_else(|| invalid("both methods are the same"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent() {
        let ab = MethodPair::new(Method::ActiveChannel, Method::BasinCharacteristics);
        let ba = MethodPair::new(Method::BasinCharacteristics, Method::ActiveChannel);
        assert_eq!(ab, ba);
        assert_eq!(ab.unwrap().to_string(), "BC,AC");
    }

    #[test]
    fn test_same_method_rejected() {
        assert!(MethodPair::new(Method::RemoteSensing, Method::RemoteSensing).is_none());
    }

    #[test]
    fn test_parse_either_order() {
        let a: MethodPair = "BW,AC".parse().unwrap();
        let b: MethodPair = "AC,BW".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.methods(), (Method::ActiveChannel, Method::BankfullWidth));
    }

    #[test]
    fn test_parse_synonyms_and_spaces() {
        let pair: MethodPair = "PK, BF".parse().unwrap();
        assert_eq!(
            pair.methods(),
            (Method::BasinCharacteristics, Method::BankfullWidth)
        );
    }

    #[test]
    fn test_parse_rejects() {
        assert!(matches!(
            "BC".parse::<MethodPair>(),
            Err(CorrelationError::InvalidPairKey { .. })
        ));
        assert!(matches!(
            "BC,XX".parse::<MethodPair>(),
            Err(CorrelationError::InvalidPairKey { .. })
        ));
        assert!(matches!(
            "BC,PK".parse::<MethodPair>(),
            Err(CorrelationError::InvalidPairKey { .. })
        ));
    }

    #[test]
    fn test_all_pairs() {
        let pairs: Vec<MethodPair> = MethodPair::all().collect();
        assert_eq!(pairs.len(), 6);
        for (i, a) in pairs.iter().enumerate() {
            for b in &pairs[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(pairs.iter().all(|p| {
            let (low, high) = p.methods();
            low < high
        }));
    }
}
