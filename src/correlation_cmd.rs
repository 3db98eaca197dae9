//! Correlation command: look up one coefficient.

use anyhow::{Context, Result};
use tracing::info_span;

use peakweight_codes::FlowStatisticCode;

use crate::cli::CorrelationArgs;
use crate::config::PeakweightConfig;
use crate::convert;
use crate::output::{self, CorrelationOutput};

/// Prints the coefficient between two codes in one regression region.
pub fn run(args: CorrelationArgs, config: &PeakweightConfig) -> Result<()> {
    let _cmd = info_span!("correlation", region = %args.region).entered();
    let (tables, _) = convert::load_tables(&config.tables, None)?;

    let r = tables
        .correlation(&args.region, &args.code_a, &args.code_b)
        .with_context(|| {
            format!(
                "no correlation for {} / {} in {}",
                args.code_a, args.code_b, args.region
            )
        })?;
    // Both lookups below already succeeded inside `correlation`.
    let hydrologic_region = tables.hydrologic_region(&args.region)?.to_string();
    let aep = FlowStatisticCode::parse(&args.code_a)?.aep().to_string();

    let out = CorrelationOutput {
        region_code: args.region,
        hydrologic_region,
        code_a: args.code_a,
        code_b: args.code_b,
        aep,
        r,
    };
    output::write_json(&output::to_json(&out)?, None)
}
