//! Exploratory Data Analysis Library
//!
//! Statistical profiling of tabular data held in memory.
//!
//! # Overview
//!
//! Given a [`Table`] of rows keyed by column name, the library computes four
//! independent artifacts:
//!
//! - **Missing values**: per-column missing counts and percentages
//!   ([`missing_stats`])
//! - **Summary statistics**: kind, missing and distinct counts, and for
//!   numeric columns min, max, mean, median and population standard deviation
//!   ([`summarize`])
//! - **Distributions**: equal-width histograms for numeric columns and
//!   top-N frequency tables for categorical ones ([`distribution`])
//! - **Correlation**: a pairwise-complete Pearson matrix over the numeric
//!   columns ([`correlation_matrix`])
//!
//! Every column is classified by one rule ([`classify`]): numeric if it has at
//! least one non-missing value and every non-missing value parses as a finite
//! number, categorical otherwise.
//!
//! The engines never fail. Malformed values, unknown columns and empty tables
//! degrade to defined outputs, and no artifact ever contains `NaN` or an
//! infinity.
//!
//! # Quick Start
//!
//! ```rust
//! use eda_core::{DataProfiler, RawValue, Table, correlation_matrix, summarize};
//!
//! let table = Table::from_records(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         vec![RawValue::from("1"), RawValue::from("2")],
//!         vec![RawValue::from("2"), RawValue::from("4")],
//!         vec![RawValue::from("3"), RawValue::from("6")],
//!     ],
//! );
//!
//! let summary = summarize(&table, table.columns());
//! assert_eq!(summary[0].numeric.unwrap().median, 2.0);
//!
//! let matrix = correlation_matrix(&table, table.columns());
//! assert_eq!(matrix.get("a", "b"), Some(1.0));
//!
//! // Or everything at once
//! let report = DataProfiler::profile_table(&table);
//! assert_eq!(report.row_count, 3);
//! ```
//!
//! # Loading CSV
//!
//! [`load_csv`] and [`parse_csv_str`] read CSV data through polars with every
//! column kept as text, so classification is left to the library:
//!
//! ```rust
//! use eda_core::{ColumnKind, classify, parse_csv_str};
//!
//! let table = parse_csv_str("city,zip\nNY,10001\nLA,\n").unwrap();
//! assert_eq!(classify(&table, "city"), ColumnKind::Categorical);
//! assert_eq!(classify(&table, "zip"), ColumnKind::Numeric);
//! ```
//!
//! # Configuration
//!
//! Use [`AnalysisConfig`] to change histogram bins, category limits and label
//! precision:
//!
//! ```rust
//! use eda_core::AnalysisConfig;
//!
//! let config = AnalysisConfig::builder()
//!     .histogram_bins(20)
//!     .top_categories(5)
//!     .label_precision(1)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.histogram_bins, 20);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod table;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use analysis::{correlation_matrix, distribution, distribution_with_config, pearson};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use loader::{load_csv, parse_csv_str};
pub use profiler::{DataProfiler, classify, summarize};
pub use quality::{missing_overview, missing_stats};
pub use reporting::{AnalysisReport, ReportGenerator, ReportOverview};
pub use table::{Cell, RawValue, Row, Table};
pub use types::{
    ColumnDistribution, ColumnKind, CorrelationMatrix, CorrelationPair, DistributionBin,
    EdaReport, MissingOverview, MissingStat, NumericSummary, SummaryRecord,
};
