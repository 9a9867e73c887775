//! Report generation module.
//!
//! Wraps an [`EdaReport`](crate::types::EdaReport) with run metadata and
//! writes it as pretty JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::time::Instant;
//!
//! use eda_core::{DataProfiler, ReportGenerator, load_csv};
//!
//! # fn main() -> eda_core::EdaResult<()> {
//! let table = load_csv("data/cities.csv")?;
//! let start = Instant::now();
//! let profile = DataProfiler::profile_table(&table);
//!
//! let report = ReportGenerator::build_report(
//!     Some(Path::new("data/cities.csv")),
//!     start.elapsed(),
//!     profile,
//! );
//!
//! // Print as JSON
//! println!("{}", ReportGenerator::to_json(&report)?);
//!
//! // Or write to outputs/cities_report.json
//! ReportGenerator::new("outputs").write_report_to_file(&report, "cities")?;
//! # Ok(())
//! # }
//! ```

mod generator;

pub use generator::{AnalysisReport, ReportGenerator, ReportOverview};
