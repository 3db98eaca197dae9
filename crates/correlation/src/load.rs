//! Reading reference tables from TOML.
//!
//! ```toml
//! [regions]
//! "West" = ["GC1829", "GC1830"]
//!
//! [correlations."West"."BC,AC"]
//! "Q1" = 0.553
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use peakweight_codes::AepToken;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::CorrelationError;
use crate::pair::MethodPair;
use crate::region::RegionTable;
use crate::resolver::ReferenceTables;
use crate::table::CorrelationTable;

/// The sample tables compiled into the crate.
const BUNDLED: &str = include_str!("../data/reference_tables.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReferenceDocument {
    regions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    correlations: BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>,
}

/// Parses reference tables from a TOML document.
///
/// # Errors
///
/// Returns [`CorrelationError::Load`] on malformed TOML or an invalid AEP
/// key, [`CorrelationError::InvalidPairKey`] on an unparseable pair key,
/// [`CorrelationError::DuplicatePair`] when a region lists one unordered
/// pair under both orderings, and [`CorrelationError::OverlappingRegion`]
/// when a regression region appears in two hydrologic regions.
pub fn from_toml_str(text: &str) -> Result<ReferenceTables, CorrelationError> {
    let doc: ReferenceDocument = toml::from_str(text)?;

    let mut regions = RegionTable::new();
    for (name, codes) in &doc.regions {
        regions.insert_region(name, codes.iter().map(String::as_str))?;
    }

    let mut correlations = CorrelationTable::new();
    for (region, pairs) in &doc.correlations {
        if !regions.contains_region(region) {
            warn!(region = %region, "correlations given for a region with no members");
        }
        let mut seen: HashSet<MethodPair> = HashSet::new();
        for (key, aeps) in pairs {
            let pair: MethodPair = key.parse()?;
            if !seen.insert(pair) {
                return Err(CorrelationError::DuplicatePair {
                    region: region.clone(),
                    pair,
                });
            }
            for (aep, &r) in aeps {
                let aep: AepToken = aep.parse().map_err(|e| CorrelationError::Load {
                    reason: format!("region '{region}', pair '{key}': {e}"),
                })?;
                correlations.insert(region, pair, aep, r);
            }
        }
    }

    debug!(
        n_regions = regions.n_regions(),
        n_codes = regions.n_codes(),
        n_coefficients = correlations.len(),
        "reference tables parsed"
    );
    Ok(ReferenceTables::new(regions, correlations))
}

/// Reads reference tables from a TOML file.
///
/// # Errors
///
/// Returns [`CorrelationError::Read`] if the file cannot be read, otherwise
/// any error from [`from_toml_str`].
pub fn from_path(path: &Path) -> Result<ReferenceTables, CorrelationError> {
    let text = std::fs::read_to_string(path).map_err(|e| CorrelationError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    from_toml_str(&text)
}

/// Parses the sample tables compiled into the crate.
pub fn bundled() -> Result<ReferenceTables, CorrelationError> {
    from_toml_str(BUNDLED)
}
