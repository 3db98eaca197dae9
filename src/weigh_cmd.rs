//! Weigh command: coded estimates with correlations from the reference tables.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use peakweight_gls::Weighter;

use crate::cli::WeighArgs;
use crate::config::PeakweightConfig;
use crate::convert;
use crate::output::{self, WeightedOutput};

/// Weights the estimates given on the command line.
pub fn run(args: WeighArgs, config: &PeakweightConfig) -> Result<()> {
    let _cmd = info_span!("weigh", region = %args.region).entered();
    let weight_config = convert::build_weight_config(&config.weighting)?;
    let (tables, source) = convert::load_tables(&config.tables, None)?;
    info!(%source, n_estimates = args.estimates.len(), "weighting");

    let result = Weighter::new(&tables)
        .with_config(weight_config)
        .weight_est(&args.region, &args.estimates)
        .with_context(|| format!("failed to weight estimates for {}", args.region))?;

    if let Some(warning) = result.warning() {
        info!(%warning, "advisory");
    }
    let json = output::to_json(&WeightedOutput::from(&result))?;
    output::write_json(&json, args.output.as_deref())
}
