//! Batch command: weight many sites in parallel.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{info, info_span, warn};

use peakweight_gls::{CodedEstimate, Weighter};

use crate::cli::BatchArgs;
use crate::config::PeakweightConfig;
use crate::convert;
use crate::output::{self, SiteOutput, WeightedOutput};

/// One site in the batch input.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteInput {
    #[serde(default)]
    pub site: Option<String>,
    pub region: String,
    pub estimates: Vec<EstimateInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateInput {
    pub code: String,
    pub value: f64,
    pub sep: f64,
}

/// Weights every site in `args.input`. A failing site is reported in its
/// output entry and does not stop the batch.
pub fn run(args: BatchArgs, config: &PeakweightConfig) -> Result<()> {
    let _cmd = info_span!("batch").entered();
    let weight_config = convert::build_weight_config(&config.weighting)?;
    let (tables, source) = convert::load_tables(&config.tables, None)?;

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read batch input: {}", args.input.display()))?;
    let sites: Vec<SiteInput> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse batch input: {}", args.input.display()))?;
    info!(n_sites = sites.len(), %source, "weighting batch");

    let weighter = Weighter::new(&tables).with_config(weight_config);
    let outputs = weigh_all(&weighter, sites);

    let n_failed = outputs.iter().filter(|o| o.error.is_some()).count();
    if n_failed > 0 {
        warn!(n_failed, "some sites could not be weighted");
    }
    info!(n_sites = outputs.len(), n_failed, "batch complete");

    output::write_json(&output::to_json(&outputs)?, args.output.as_deref())
}

/// Weights each site independently, preserving input order.
pub fn weigh_all(weighter: &Weighter<'_>, sites: Vec<SiteInput>) -> Vec<SiteOutput> {
    sites
        .into_par_iter()
        .map(|site| {
            let estimates: Vec<CodedEstimate> = site
                .estimates
                .into_iter()
                .map(|e| CodedEstimate::new(e.code, e.value, e.sep))
                .collect();
            match weighter.weight_est(&site.region, &estimates) {
                Ok(r) => SiteOutput {
                    site: site.site,
                    region: site.region,
                    result: Some(WeightedOutput::from(&r)),
                    error: None,
                },
                Err(e) => SiteOutput {
                    site: site.site,
                    region: site.region,
                    result: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect()
}
