//! Cross-correlation coefficients by hydrologic region, method pair and AEP.

use std::collections::{BTreeMap, HashMap};

use peakweight_codes::AepToken;

use crate::pair::MethodPair;

/// Coefficients keyed by hydrologic region, unordered method pair and AEP.
#[derive(Debug, Clone, Default)]
pub struct CorrelationTable {
    entries: BTreeMap<String, HashMap<MethodPair, HashMap<AepToken, f64>>>,
}

impl CorrelationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a coefficient, returning the one it replaced.
    pub fn insert(
        &mut self,
        region: &str,
        pair: MethodPair,
        aep: AepToken,
        coefficient: f64,
    ) -> Option<f64> {
        self.entries
            .entry(region.to_string())
            .or_default()
            .entry(pair)
            .or_default()
            .insert(aep, coefficient)
    }

    /// Looks up a coefficient. Symmetric in the pair by construction.
    pub fn get(&self, region: &str, pair: MethodPair, aep: &AepToken) -> Option<f64> {
        self.entries.get(region)?.get(&pair)?.get(aep).copied()
    }

    /// Returns `true` if the region has any coefficient for `pair`.
    pub fn has_pair(&self, region: &str, pair: MethodPair) -> bool {
        self.entries
            .get(region)
            .is_some_and(|pairs| pairs.contains_key(&pair))
    }

    /// Returns the hydrologic regions with at least one coefficient.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over every `(region, pair, aep, coefficient)` entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MethodPair, &AepToken, f64)> {
        self.entries.iter().flat_map(|(region, pairs)| {
            pairs.iter().flat_map(move |(pair, aeps)| {
                aeps.iter()
                    .map(move |(aep, &r)| (region.as_str(), *pair, aep, r))
            })
        })
    }

    /// Total number of coefficients.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(|pairs| pairs.values())
            .map(HashMap::len)
            .sum()
    }

    /// Returns `true` if the table holds no coefficients.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peakweight_codes::Method;

    fn aep(s: &str) -> AepToken {
        s.parse().unwrap()
    }

    #[test]
    fn test_symmetric_get() {
        let mut t = CorrelationTable::new();
        let stored = MethodPair::new(Method::ActiveChannel, Method::BasinCharacteristics).unwrap();
        t.insert("West", stored, aep("Q1"), 0.553);

        let queried = MethodPair::new(Method::BasinCharacteristics, Method::ActiveChannel).unwrap();
        assert_eq!(t.get("West", queried, &aep("Q1")), Some(0.553));
    }

    #[test]
    fn test_missing_levels() {
        let mut t = CorrelationTable::new();
        let pair: MethodPair = "BC,AC".parse().unwrap();
        t.insert("West", pair, aep("Q1"), 0.5);

        assert_eq!(t.get("East", pair, &aep("Q1")), None);
        assert_eq!(t.get("West", "BC,RS".parse().unwrap(), &aep("Q1")), None);
        assert_eq!(t.get("West", pair, &aep("Q2")), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut t = CorrelationTable::new();
        let pair: MethodPair = "BC,AC".parse().unwrap();
        assert_eq!(t.insert("West", pair, aep("Q1"), 0.5), None);
        assert_eq!(t.insert("West", pair, aep("Q1"), 0.6), Some(0.5));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_len_iter_and_regions() {
        let mut t = CorrelationTable::new();
        assert!(t.is_empty());
        let pair: MethodPair = "AC,BW".parse().unwrap();
        t.insert("West", pair, aep("Q1"), 0.9);
        t.insert("West", pair, aep("Q2"), 0.8);
        t.insert("Southwest", pair, aep("Q1"), 0.7);

        assert_eq!(t.len(), 3);
        assert_eq!(t.iter().count(), 3);
        let regions: Vec<&str> = t.regions().collect();
        assert_eq!(regions, vec!["Southwest", "West"]);
        assert!(t.has_pair("West", pair));
        assert!(!t.has_pair("West", "BC,AC".parse().unwrap()));
    }
}
