//! Data quality module: missing-value analysis.

mod missing;

pub use missing::{missing_overview, missing_stats};
