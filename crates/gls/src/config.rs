//! Configuration for weighting.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::WeightError;

/// Default multiplier applied to SEPZ to get the confidence half-width.
pub const DEFAULT_CI_MULTIPLIER: f64 = 1.64;

/// How the confidence half-width `CI` is derived from `SEPZ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    /// `CI = multiplier * SEPZ`.
    Multiplier(f64),
    /// Two-sided confidence level in `(0, 1)`; the multiplier is the
    /// standard-normal quantile at `(1 + level) / 2`.
    Level(f64),
}

/// Configuration for a weighting computation.
///
/// # Example
///
/// ```
/// use peakweight_gls::WeightConfig;
///
/// let config = WeightConfig::new().with_confidence_level(0.95);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightConfig {
    confidence: Confidence,
}

impl WeightConfig {
    /// Creates a configuration with the default multiplier of 1.64.
    pub fn new() -> Self {
        Self {
            confidence: Confidence::Multiplier(DEFAULT_CI_MULTIPLIER),
        }
    }

    /// Uses a fixed confidence multiplier.
    pub fn with_ci_multiplier(mut self, multiplier: f64) -> Self {
        self.confidence = Confidence::Multiplier(multiplier);
        self
    }

    /// Derives the multiplier from a two-sided confidence level.
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence = Confidence::Level(level);
        self
    }

    /// Returns the confidence setting.
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Returns the multiplier applied to SEPZ.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn ci_multiplier(&self) -> Result<f64, WeightError> {
        self.validate()?;
        match self.confidence {
            Confidence::Multiplier(m) => Ok(m),
            Confidence::Level(level) => {
                let normal = Normal::new(0.0, 1.0).map_err(|e| WeightError::InvalidConfig {
                    reason: e.to_string(),
                })?;
                Ok(normal.inverse_cdf(0.5 + level / 2.0))
            }
        }
    }

    /// Validates this configuration.
    ///
    /// A multiplier must be finite and positive; a level must lie strictly
    /// between 0 and 1.
    pub fn validate(&self) -> Result<(), WeightError> {
        match self.confidence {
            Confidence::Multiplier(m) if !m.is_finite() || m <= 0.0 => {
                Err(WeightError::InvalidConfig {
                    reason: format!("confidence multiplier must be finite and positive, got {m}"),
                })
            }
            Confidence::Level(level) if !(level > 0.0 && level < 1.0) => {
                Err(WeightError::InvalidConfig {
                    reason: format!("confidence level must be in (0, 1), got {level}"),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::new()
    }
}
