//! Integration tests for the EDA library.
//!
//! These tests load CSV fixtures from disk and verify end-to-end behavior of
//! every analysis engine and of the report generator.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use eda_core::{
    AnalysisConfig, ColumnKind, DataProfiler, DistributionBin, RawValue, ReportGenerator, Table,
    classify, correlation_matrix, distribution, distribution_with_config, load_csv, missing_stats,
    summarize,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> Table {
    load_csv(fixtures_path().join(filename)).expect("Failed to load fixture")
}

fn names(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_cities_fixture() {
    let table = load_fixture("cities.csv");

    assert_eq!(table.columns(), names(&["id", "city", "age", "income", "signup"]));
    assert_eq!(table.row_count(), 8);
    assert!(table.cell(3, "signup").is_missing());
    assert!(table.cell(6, "city").is_missing());
}

#[test]
fn test_load_header_only_fixture() {
    let table = load_fixture("header_only.csv");
    assert_eq!(table.column_count(), 2);
    assert!(table.is_empty());

    let report = DataProfiler::profile_table(&table);
    assert!(report.summary.is_empty());
    assert_eq!(report.missing.missing_percentage, 0.0);
    assert!(report.distributions.iter().all(|d| d.bins.is_empty()));
}

#[test]
fn test_load_empty_file_fails() {
    assert!(load_csv(fixtures_path().join("empty.csv")).is_err());
}

#[test]
fn test_unknown_column_is_reported() {
    let table = load_fixture("cities.csv");
    let err = table.require_column("salary").unwrap_err();
    assert_eq!(err.error_code(), "COLUMN_NOT_FOUND");
    assert!(err.is_recoverable());
}

// ============================================================================
// Classification and Summary
// ============================================================================

#[test]
fn test_classification_of_fixture_columns() {
    let table = load_fixture("cities.csv");

    let kinds: Vec<ColumnKind> = table
        .columns()
        .iter()
        .map(|column| classify(&table, column))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ColumnKind::Numeric,
            ColumnKind::Categorical,
            ColumnKind::Numeric,
            ColumnKind::Numeric,
            ColumnKind::Categorical,
        ]
    );
}

#[test]
fn test_summary_of_fixture() {
    let table = load_fixture("cities.csv");
    let summary = summarize(&table, table.columns());
    assert_eq!(summary.len(), 5);

    let age = &summary[2];
    assert_eq!(age.name, "age");
    assert_eq!(age.missing_count, 1);
    assert_eq!(age.unique_count, 7);
    let stats = age.numeric.expect("age is numeric");
    assert_eq!(stats.min, 23.0);
    assert_eq!(stats.max, 51.0);
    assert_eq!(stats.median, 34.0);
    assert!((stats.mean - 250.0 / 7.0).abs() < 1e-9);
    assert!(stats.std_dev > 0.0);

    let city = &summary[1];
    assert_eq!(city.kind, ColumnKind::Categorical);
    assert_eq!(city.missing_count, 1);
    assert_eq!(city.unique_count, 3);
    assert!(city.numeric.is_none());
}

#[test]
fn test_mixed_column_counts_raw_text() {
    let table = load_fixture("mixed.csv");
    let summary = summarize(&table, &names(&["score"]));

    assert_eq!(summary[0].kind, ColumnKind::Categorical);
    assert_eq!(summary[0].unique_count, 4);
}

// ============================================================================
// Missing Values
// ============================================================================

#[test]
fn test_missing_stats_of_fixture() {
    let table = load_fixture("cities.csv");
    let stats = missing_stats(&table, table.columns());

    let by_column: HashMap<&str, (usize, f64)> = stats
        .iter()
        .map(|s| (s.column.as_str(), (s.missing_count, s.percentage)))
        .collect();
    assert_eq!(by_column["id"], (0, 0.0));
    assert_eq!(by_column["city"], (1, 12.5));
    assert_eq!(by_column["signup"], (1, 12.5));

    let overview = DataProfiler::profile_table(&table).missing;
    assert_eq!(overview.total_cells, 40);
    assert_eq!(overview.total_missing, 4);
    assert!((overview.missing_percentage - 10.0).abs() < 1e-9);
}

// ============================================================================
// Distributions
// ============================================================================

#[test]
fn test_numeric_distribution_of_fixture() {
    let table = load_fixture("cities.csv");
    let bins = distribution(&table, "age");

    assert_eq!(bins.len(), 10);
    assert_eq!(bins.iter().map(DistributionBin::count).sum::<usize>(), 7);
    assert_eq!(bins[0].label(), "23.00 - 25.80");
}

#[test]
fn test_numeric_distribution_with_three_bins() {
    let table = load_fixture("cities.csv");
    let config = AnalysisConfig::builder().histogram_bins(3).build().unwrap();
    let bins = distribution_with_config(&table, "age", &config);

    let counts: Vec<usize> = bins.iter().map(DistributionBin::count).collect();
    assert_eq!(counts, vec![3, 2, 2]);
    assert_eq!(bins[0].label(), "23.00 - 32.33");
    assert_eq!(bins[2].label(), "41.67 - 51.00");
}

#[test]
fn test_categorical_distribution_of_fixture() {
    let table = load_fixture("cities.csv");
    let bins = distribution(&table, "city");

    assert_eq!(
        bins,
        vec![
            DistributionBin::Category {
                label: "NY".to_string(),
                count: 3
            },
            DistributionBin::Category {
                label: "LA".to_string(),
                count: 2
            },
            DistributionBin::Category {
                label: "SF".to_string(),
                count: 2
            },
        ]
    );
}

#[test]
fn test_constant_column_distribution() {
    let table = load_fixture("mixed.csv");
    let bins = distribution(&table, "constant");
    assert_eq!(
        bins,
        vec![DistributionBin::Range {
            label: "5.00".to_string(),
            start: 5.0,
            end: 5.0,
            count: 4,
        }]
    );
}

// ============================================================================
// Correlation
// ============================================================================

#[test]
fn test_correlation_of_fixture() {
    let table = load_fixture("cities.csv");
    let matrix = correlation_matrix(&table, table.columns());

    assert_eq!(matrix.columns, names(&["id", "age", "income"]));
    for i in 0..matrix.len() {
        assert_eq!(matrix.values[i][i], Some(1.0));
        for j in 0..matrix.len() {
            let (a, b) = (matrix.values[i][j], matrix.values[j][i]);
            assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits));
            let r = a.expect("every pair overlaps");
            assert!((-1.0..=1.0).contains(&r));
        }
    }
}

#[test]
fn test_constant_column_correlates_to_zero() {
    let table = load_fixture("mixed.csv");
    let matrix = correlation_matrix(&table, table.columns());

    assert_eq!(matrix.columns, names(&["constant"]));
    assert_eq!(matrix.get("constant", "constant"), Some(0.0));
}

// ============================================================================
// Input Boundary
// ============================================================================

#[test]
fn test_rows_from_json_records() {
    let rows: Vec<HashMap<String, RawValue>> = serde_json::from_str(
        r#"[
            {"a": "1", "b": 2},
            {"a": "2", "b": 4, "c": "ignored"},
            {"a": null, "b": 6},
            {"b": 8}
        ]"#,
    )
    .unwrap();
    let table = Table::new(names(&["a", "b"]), rows);

    let summary = summarize(&table, table.columns());
    assert_eq!(summary[0].kind, ColumnKind::Numeric);
    assert_eq!(summary[0].missing_count, 2);
    assert_eq!(summary[1].numeric.unwrap().mean, 5.0);
    assert_eq!(correlation_matrix(&table, table.columns()).get("a", "b"), Some(1.0));
}

#[test]
fn test_small_linear_table() {
    let table = Table::from_records(
        names(&["a", "b"]),
        vec![
            vec![RawValue::from("1"), RawValue::from("2")],
            vec![RawValue::from("2"), RawValue::from("4")],
            vec![RawValue::from("3"), RawValue::from("6")],
        ],
    );

    let stats = summarize(&table, table.columns())[0].numeric.unwrap();
    assert_eq!((stats.min, stats.max, stats.mean, stats.median), (1.0, 3.0, 2.0, 2.0));
    assert!((stats.std_dev - 0.816).abs() < 1e-3);
    assert_eq!(correlation_matrix(&table, table.columns()).get("a", "b"), Some(1.0));
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_profile_and_write_report() {
    let table = load_fixture("cities.csv");
    let config = AnalysisConfig::builder()
        .strong_correlation_limit(2)
        .build()
        .unwrap();
    let profile = DataProfiler::profile_table_with_config(&table, &config);
    assert_eq!(profile.strongest_correlations.len(), 2);

    let input = fixtures_path().join("cities.csv");
    let report = ReportGenerator::build_report(Some(input.as_path()), Duration::from_millis(3), profile);
    assert_eq!(report.overview.numeric_columns, 3);
    assert_eq!(report.overview.categorical_columns, 2);

    let dir = std::env::temp_dir().join(format!("eda_core_it_{}", std::process::id()));
    let path = ReportGenerator::new(&dir)
        .write_report_to_file(&report, "cities")
        .unwrap();
    assert!(path.ends_with("cities_report.json"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["report"]["row_count"], 8);
    assert_eq!(json["report"]["summary"][1]["kind"], "categorical");
    assert!(json["report"]["summary"][1].get("mean").is_none());
    assert_eq!(json["report"]["summary"][2]["median"], 34.0);

    let _ = std::fs::remove_dir_all(&dir);
}
