//! JSON output structures for command results.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use peakweight_gls::{Advisory, WeightedResult};

/// A weighted result, with values de-logged.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedOutput {
    pub z: f64,
    pub z_log: f64,
    pub sepz: f64,
    pub ci: f64,
    pub pil: f64,
    pub piu: f64,
    pub weights: Vec<f64>,
    /// 0-based input positions that were weighted.
    pub used: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<AdvisoryOutput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryOutput {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped: Option<usize>,
    pub message: String,
}

impl From<&Advisory> for AdvisoryOutput {
    fn from(a: &Advisory) -> Self {
        let (kind, dropped) = match a {
            Advisory::OutsideInputRange => ("outside_input_range", None),
            Advisory::ReducedToThree { dropped } => ("reduced_to_three", Some(*dropped)),
        };
        Self {
            kind,
            dropped,
            message: a.to_string(),
        }
    }
}

impl From<&WeightedResult> for WeightedOutput {
    fn from(r: &WeightedResult) -> Self {
        Self {
            z: r.z(),
            z_log: r.z_log(),
            sepz: r.sepz(),
            ci: r.ci(),
            pil: r.pil(),
            piu: r.piu(),
            weights: r.weights().to_vec(),
            used: r.used().to_vec(),
            warning: r.warning(),
            advisories: r.advisories().iter().map(AdvisoryOutput::from).collect(),
        }
    }
}

/// One coefficient lookup.
#[derive(Debug, Serialize)]
pub struct CorrelationOutput {
    pub region_code: String,
    pub hydrologic_region: String,
    pub code_a: String,
    pub code_b: String,
    pub aep: String,
    pub r: f64,
}

/// Summary of a reference-table check.
#[derive(Debug, Serialize)]
pub struct TablesSummary {
    pub source: String,
    pub n_regions: usize,
    pub n_codes: usize,
    pub n_coefficients: usize,
    pub regions: Vec<RegionSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub out_of_range: Vec<OutOfRange>,
}

#[derive(Debug, Serialize)]
pub struct RegionSummary {
    pub name: String,
    pub n_codes: usize,
    pub pairs: Vec<String>,
    /// Method pairs with no tabulated coefficient at any AEP.
    pub missing_pairs: Vec<String>,
}

/// A coefficient outside `[-1, 1]`.
#[derive(Debug, Serialize)]
pub struct OutOfRange {
    pub region: String,
    pub pair: String,
    pub aep: String,
    pub r: f64,
}

/// Outcome for one site of a batch. Exactly one of `result` and `error` is
/// set.
#[derive(Debug, Serialize)]
pub struct SiteOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<WeightedOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serializes `value` to pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Writes `json` to `path`, or to stdout when `path` is `None`.
pub fn write_json(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, json)
                .with_context(|| format!("failed to write output: {}", p.display()))?;
            info!(path = %p.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}
