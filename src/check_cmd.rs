//! Check-tables command: load the reference tables and report on them.

use anyhow::{Result, bail};
use tracing::{info, info_span, warn};

use peakweight_correlation::{MethodPair, ReferenceTables};

use crate::cli::CheckTablesArgs;
use crate::config::PeakweightConfig;
use crate::convert::{self, TableSource};
use crate::output::{self, OutOfRange, RegionSummary, TablesSummary};

/// Loads the tables and prints a summary. Fails if any coefficient lies
/// outside `[-1, 1]`.
pub fn run(args: CheckTablesArgs, config: &PeakweightConfig) -> Result<()> {
    let _cmd = info_span!("check_tables").entered();
    let (tables, source) = convert::load_tables(&config.tables, args.tables.as_deref())?;

    let summary = summarize(&tables, &source);
    info!(
        n_regions = summary.n_regions,
        n_coefficients = summary.n_coefficients,
        "tables loaded"
    );
    for region in &summary.regions {
        if !region.missing_pairs.is_empty() {
            warn!(region = %region.name, missing = ?region.missing_pairs, "untabulated method pairs");
        }
    }
    output::write_json(&output::to_json(&summary)?, None)?;

    if !summary.out_of_range.is_empty() {
        bail!(
            "{} coefficient(s) outside [-1, 1] in {}",
            summary.out_of_range.len(),
            source
        );
    }
    Ok(())
}

/// Builds the summary for `tables`.
pub fn summarize(tables: &ReferenceTables, source: &TableSource) -> TablesSummary {
    let regions = tables.regions();
    let correlations = tables.correlations();

    let region_summaries = regions
        .region_names()
        .map(|name| {
            let (pairs, missing): (Vec<MethodPair>, Vec<MethodPair>) =
                MethodPair::all().partition(|&p| correlations.has_pair(name, p));
            RegionSummary {
                name: name.to_string(),
                n_codes: regions.members(name).map_or(0, |m| m.count()),
                pairs: pairs.iter().map(ToString::to_string).collect(),
                missing_pairs: missing.iter().map(ToString::to_string).collect(),
            }
        })
        .collect();

    let mut out_of_range: Vec<OutOfRange> = correlations
        .iter()
        .filter(|(_, _, _, r)| !(-1.0..=1.0).contains(r))
        .map(|(region, pair, aep, r)| OutOfRange {
            region: region.to_string(),
            pair: pair.to_string(),
            aep: aep.to_string(),
            r,
        })
        .collect();
    out_of_range.sort_by(|a, b| (&a.region, &a.pair, &a.aep).cmp(&(&b.region, &b.pair, &b.aep)));

    TablesSummary {
        source: source.to_string(),
        n_regions: regions.n_regions(),
        n_codes: regions.n_codes(),
        n_coefficients: correlations.len(),
        regions: region_summaries,
        out_of_range,
    }
}
