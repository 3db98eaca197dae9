//! Pure conversion functions: TOML config structs -> crate API types.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use peakweight_correlation::ReferenceTables;
use peakweight_gls::WeightConfig;

use crate::config::{TablesToml, WeightingToml};

/// Builds a validated [`WeightConfig`]. A confidence level takes precedence
/// over the multiplier.
pub fn build_weight_config(w: &WeightingToml) -> Result<WeightConfig> {
    let cfg = match w.confidence_level {
        Some(level) => WeightConfig::new().with_confidence_level(level),
        None => WeightConfig::new().with_ci_multiplier(w.ci_multiplier),
    };
    cfg.validate().context("invalid [weighting] config")?;
    Ok(cfg)
}

/// Where reference tables were loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Bundled,
    File(String),
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSource::Bundled => f.write_str("bundled"),
            TableSource::File(p) => f.write_str(p),
        }
    }
}

/// Loads the reference tables from `override_path`, the configured path, or
/// the bundled sample, in that order.
pub fn load_tables(
    tables: &TablesToml,
    override_path: Option<&Path>,
) -> Result<(ReferenceTables, TableSource)> {
    match override_path.or(tables.path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "loading reference tables");
            let t = ReferenceTables::from_path(path).with_context(|| {
                format!("failed to load reference tables: {}", path.display())
            })?;
            Ok((t, TableSource::File(path.display().to_string())))
        }
        None => {
            info!("loading bundled reference tables");
            let t = ReferenceTables::bundled().context("failed to load bundled reference tables")?;
            Ok((t, TableSource::Bundled))
        }
    }
}
