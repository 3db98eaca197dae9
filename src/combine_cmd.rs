//! Combine command: estimates with caller-supplied correlations.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use peakweight_gls::combine;

use crate::cli::CombineArgs;
use crate::config::PeakweightConfig;
use crate::convert;
use crate::output::{self, WeightedOutput};

/// Weights the estimates given on the command line.
pub fn run(args: CombineArgs, config: &PeakweightConfig) -> Result<()> {
    let _cmd = info_span!("combine").entered();
    let weight_config = convert::build_weight_config(&config.weighting)?;

    let result = combine(&args.estimates, &args.correlations, &weight_config)
        .context("failed to combine estimates")?;
    info!(z = result.z(), sepz = result.sepz(), "combined");

    let json = output::to_json(&WeightedOutput::from(&result))?;
    output::write_json(&json, args.output.as_deref())
}
