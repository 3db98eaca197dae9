//! Result type for a weighted combination.

use crate::bounds::Advisory;

/// The output of a weighting computation.
///
/// `z`, `pil` and `piu` are in the units of the input values; `sepz` and
/// `ci` stay in log10 units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedResult {
    z_log: f64,
    sepz: f64,
    ci: f64,
    /// GLS weight per used estimate, in `used` order.
    weights: Vec<f64>,
    /// 0-based input positions of the estimates that were weighted.
    used: Vec<usize>,
    advisories: Vec<Advisory>,
}

impl WeightedResult {
    /// Creates a result from the log-space solution.
    pub(crate) fn new(
        z_log: f64,
        sepz: f64,
        ci_multiplier: f64,
        weights: Vec<f64>,
        used: Vec<usize>,
        advisories: Vec<Advisory>,
    ) -> Self {
        Self {
            z_log,
            sepz,
            ci: ci_multiplier * sepz,
            weights,
            used,
            advisories,
        }
    }

    /// Appends an advisory after any already present.
    pub(crate) fn push_advisory(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }

    /// Weighted estimate in original units, `10^Z_log`.
    pub fn z(&self) -> f64 {
        10f64.powf(self.z_log)
    }

    /// Weighted estimate in log10 units.
    pub fn z_log(&self) -> f64 {
        self.z_log
    }

    /// Standard error of prediction of the weighted estimate (log10 units).
    pub fn sepz(&self) -> f64 {
        self.sepz
    }

    /// Confidence half-width (log10 units).
    pub fn ci(&self) -> f64 {
        self.ci
    }

    /// Lower prediction-interval bound, `10^(Z_log - CI)`.
    pub fn pil(&self) -> f64 {
        10f64.powf(self.z_log - self.ci)
    }

    /// Upper prediction-interval bound, `10^(Z_log + CI)`.
    pub fn piu(&self) -> f64 {
        10f64.powf(self.z_log + self.ci)
    }

    /// GLS weights, one per used estimate. They sum to 1.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Input positions of the estimates that were weighted, ascending.
    pub fn used(&self) -> &[usize] {
        &self.used
    }

    /// Returns the advisories in the order they were raised.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Returns all advisories joined into one message, or `None`.
    pub fn warning(&self) -> Option<String> {
        if self.advisories.is_empty() {
            return None;
        }
        Some(
            self.advisories
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}
