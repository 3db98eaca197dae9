//! Hydrologic-region membership of regression regions.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::CorrelationError;

/// Partition of regression-region codes into hydrologic regions.
///
/// Every code belongs to at most one region; [`RegionTable::insert_region`]
/// refuses a code that another region already holds.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    /// hydrologic region -> member regression-region codes
    members: BTreeMap<String, BTreeSet<String>>,
    /// regression-region code -> hydrologic region
    owner: HashMap<String, String>,
}

impl RegionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `codes` to the hydrologic region `name`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::OverlappingRegion`] if any code already
    /// belongs to a different region. The table is left unchanged.
    pub fn insert_region<I, S>(&mut self, name: &str, codes: I) -> Result<(), CorrelationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        for code in &codes {
            if let Some(first) = self.owner.get(code) {
                if first != name {
                    return Err(CorrelationError::OverlappingRegion {
                        code: code.clone(),
                        first: first.clone(),
                        second: name.to_string(),
                    });
                }
            }
        }

        let entry = self.members.entry(name.to_string()).or_default();
        for code in codes {
            self.owner.insert(code.clone(), name.to_string());
            entry.insert(code);
        }
        Ok(())
    }

    /// Returns the hydrologic region containing `code`.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::UnknownRegion`] if no region contains it.
    pub fn resolve(&self, code: &str) -> Result<&str, CorrelationError> {
        self.owner
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| CorrelationError::UnknownRegion {
                code: code.to_string(),
            })
    }

    /// Returns the hydrologic region names in sorted order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Returns the member codes of a hydrologic region, sorted.
    pub fn members(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        self.members
            .get(name)
            .map(|codes| codes.iter().map(String::as_str))
    }

    /// Returns `true` if `name` is a hydrologic region in this table.
    pub fn contains_region(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Number of hydrologic regions.
    pub fn n_regions(&self) -> usize {
        self.members.len()
    }

    /// Number of regression-region codes across all regions.
    pub fn n_codes(&self) -> usize {
        self.owner.len()
    }
}
