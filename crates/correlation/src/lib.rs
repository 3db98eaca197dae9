//! # peakweight-correlation
//!
//! Cross-correlation coefficients between the residuals of peak-flow
//! estimation methods.
//!
//! Coefficients are tabulated per hydrologic region, so a lookup first maps
//! the regression-region code to its hydrologic region and then reads the
//! coefficient for the unordered method pair at the shared AEP:
//!
//! ```text
//! correlation("GC1851", "PK1AEP", "ACPK1AEP")
//!   ├─ parse codes            -> (BC, Q1), (AC, Q1)
//!   ├─ RegionTable::resolve   -> "Southwest"
//!   └─ CorrelationTable::get  -> ("Southwest", {BC,AC}, Q1)
//! ```
//!
//! Pairs are unordered ([`MethodPair`]), so `BC,AC` and `AC,BC` are the same
//! key however the reference document spells them.
//!
//! ```
//! use peakweight_correlation::ReferenceTables;
//!
//! let tables = ReferenceTables::bundled().unwrap();
//! let r = tables.correlation("GC1851", "PK1AEP", "ACPK1AEP").unwrap();
//! assert!((-1.0..=1.0).contains(&r));
//! ```

mod error;
pub mod load;
mod pair;
mod region;
mod resolver;
mod table;

pub use error::CorrelationError;
pub use pair::MethodPair;
pub use region::RegionTable;
pub use resolver::ReferenceTables;
pub use table::CorrelationTable;
