use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "peakweight.toml";

/// Top-level peakweight configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeakweightConfig {
    /// Reference-table settings.
    #[serde(default)]
    pub tables: TablesToml,

    /// Weighting settings.
    #[serde(default)]
    pub weighting: WeightingToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesToml {
    /// Reference-table TOML; the bundled sample tables when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightingToml {
    #[serde(default = "default_ci_multiplier")]
    pub ci_multiplier: f64,
    /// Two-sided level; replaces `ci_multiplier` when set.
    #[serde(default)]
    pub confidence_level: Option<f64>,
}

impl Default for WeightingToml {
    fn default() -> Self {
        Self {
            ci_multiplier: default_ci_multiplier(),
            confidence_level: None,
        }
    }
}

fn default_ci_multiplier() -> f64 {
    peakweight_gls::DEFAULT_CI_MULTIPLIER
}

impl PeakweightConfig {
    /// Reads `path`, or `peakweight.toml` in the working directory if it
    /// exists, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}
