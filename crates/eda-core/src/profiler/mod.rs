//! Data profiling module for table analysis.
//!
//! This module provides:
//! - Column kind inference ([`classify`], [`infer_kind`])
//! - Per-column summary statistics ([`summarize`])
//! - The [`DataProfiler`] facade that runs every engine over a table

mod statistics;
mod type_inference;

use std::time::Instant;

use tracing::{debug, info};

use crate::analysis::{correlation_matrix, distribution_with_config};
use crate::config::AnalysisConfig;
use crate::quality::missing_overview;
use crate::table::Table;
use crate::types::{ColumnDistribution, EdaReport};

pub use statistics::{summarize, summarize_column};
pub use type_inference::{classify, infer_kind};

/// Data profiler that assembles every artifact for a table snapshot.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile all columns of `table` with the default configuration.
    pub fn profile_table(table: &Table) -> EdaReport {
        Self::profile_table_with_config(table, &AnalysisConfig::default())
    }

    /// Profile all columns of `table`.
    ///
    /// Each artifact is computed independently from the same snapshot; the
    /// distribution of every column is included.
    pub fn profile_table_with_config(table: &Table, config: &AnalysisConfig) -> EdaReport {
        let start = Instant::now();
        let columns = table.columns();
        info!(
            "Profiling table: {} rows x {} columns",
            table.row_count(),
            table.column_count()
        );

        let missing = missing_overview(table, columns);
        debug!(
            "Missing values: {} of {} cells",
            missing.total_missing, missing.total_cells
        );

        let summary = summarize(table, columns);

        let distributions = columns
            .iter()
            .map(|column| ColumnDistribution {
                column: column.clone(),
                bins: distribution_with_config(table, column, config),
            })
            .collect();

        let correlation = correlation_matrix(table, columns);
        debug!("Correlation matrix over {} numeric columns", correlation.len());
        let strongest_correlations = correlation.strongest_pairs(config.strong_correlation_limit);

        info!("Profiling finished in {:?}", start.elapsed());

        EdaReport {
            row_count: table.row_count(),
            column_count: table.column_count(),
            columns: columns.to_vec(),
            missing,
            summary,
            distributions,
            correlation,
            strongest_correlations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawValue;
    use crate::types::ColumnKind;

    fn sample_table() -> Table {
        Table::from_records(
            vec!["a".to_string(), "b".to_string(), "city".to_string()],
            vec![
                vec!["1".into(), "2".into(), "NY".into()],
                vec!["2".into(), "4".into(), "NY".into()],
                vec!["3".into(), "6".into(), "LA".into()],
                vec!["4".into(), "8".into(), RawValue::Null],
            ],
        )
    }

    #[test]
    fn test_profile_table() {
        let report = DataProfiler::profile_table(&sample_table());

        assert_eq!(report.row_count, 4);
        assert_eq!(report.column_count, 3);
        assert_eq!(report.summary.len(), 3);
        assert_eq!(report.summary[2].kind, ColumnKind::Categorical);
        assert_eq!(report.distributions.len(), 3);
        assert_eq!(report.correlation.columns, vec!["a", "b"]);
        assert_eq!(report.missing.total_missing, 1);
        assert_eq!(report.strongest_correlations.len(), 1);
        assert_eq!(report.strongest_correlations[0].coefficient, 1.0);
    }

    #[test]
    fn test_profile_respects_config() {
        let config = AnalysisConfig::builder().histogram_bins(4).build().unwrap();
        let report = DataProfiler::profile_table_with_config(&sample_table(), &config);
        assert_eq!(report.distributions[0].bins.len(), 4);
    }

    #[test]
    fn test_profile_empty_table() {
        let report = DataProfiler::profile_table(&Table::default());
        assert_eq!(report.row_count, 0);
        assert!(report.summary.is_empty());
        assert!(report.correlation.is_empty());
        assert_eq!(report.missing.missing_percentage, 0.0);
    }
}
