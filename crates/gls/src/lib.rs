//! # peakweight-gls
//!
//! Generalized-least-squares weighting of 2-4 correlated peak-flow
//! estimates for one site and one AEP.
//!
//! Values are weighted in log10 space. The weights minimise the variance of
//! the combined error given each estimate's SEP and the pairwise
//! correlations of the method residuals, subject to summing to 1.
//!
//! ```mermaid
//! graph LR
//!     A["weight2 / weight3 / weight4"] -->|"caller's r"| C["combine"]
//!     B["Weighter::weight_est*"] -->|"ReferenceTables::pairwise"| C
//!     C -->|"4 estimates: drop max SEP"| D["GLS solve (2 or 3)"]
//!     D --> E["WeightedResult + advisories"]
//! ```
//!
//! ## Result
//!
//! | Accessor | Units | Meaning |
//! |----------|-------|---------|
//! | [`WeightedResult::z()`] | original | `10^Z_log`, the weighted estimate |
//! | [`WeightedResult::sepz()`] | log10 | standard error of the weighted estimate |
//! | [`WeightedResult::ci()`] | log10 | `multiplier * SEPZ` (1.64 by default) |
//! | [`WeightedResult::pil()`] / [`WeightedResult::piu()`] | original | `10^(Z_log -/+ CI)` |
//! | [`WeightedResult::warning()`] | - | advisories, never an error |
//!
//! ```
//! use peakweight_gls::weight3;
//!
//! let result = weight3(
//!     [549.54, 281.84, 316.23],
//!     [0.234, 0.262, 0.283],
//!     [0.553, 0.518, 0.907],
//! )
//! .unwrap();
//! let sum: f64 = result.weights().iter().sum();
//! assert!((sum - 1.0).abs() < 1e-12);
//! assert!(result.pil() < result.z() && result.z() < result.piu());
//! ```

mod bounds;
mod combine;
mod config;
mod error;
mod estimate;
mod result;
mod weight;

pub(crate) mod small_linalg;
pub(crate) mod solver;

pub use bounds::{Advisory, outside_input_range};
pub use combine::{MAX_ESTIMATES, combine};
pub use config::{Confidence, DEFAULT_CI_MULTIPLIER, WeightConfig};
pub use error::WeightError;
pub use estimate::{CodedEstimate, Estimate};
pub use result::WeightedResult;
pub use weight::{
    Weighter, weight_est, weight_est2, weight_est3, weight_est4, weight2, weight3, weight4,
};
