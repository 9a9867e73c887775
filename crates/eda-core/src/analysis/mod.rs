//! Analysis module: value distributions and correlations.
//!
//! - [`distribution`] builds a histogram or a frequency table for one column
//! - [`correlation_matrix`] computes pairwise Pearson coefficients between
//!   numeric columns

mod correlation;
mod distribution;

pub use correlation::{correlation_matrix, pearson};
pub use distribution::{distribution, distribution_of_cells, distribution_with_config};
