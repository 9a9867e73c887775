//! Summary statistics for table columns.

use std::collections::HashSet;

use crate::table::{Cell, Table};
use crate::types::{ColumnKind, NumericSummary, SummaryRecord};
use crate::utils::{finite_mean, max_abs};

use super::type_inference::classify;

/// Summarize each of `columns`, preserving their order.
///
/// An empty table or an empty column list yields an empty sequence.
pub fn summarize(table: &Table, columns: &[String]) -> Vec<SummaryRecord> {
    if table.is_empty() || columns.is_empty() {
        return Vec::new();
    }

    columns
        .iter()
        .map(|column| summarize_column(table, column))
        .collect()
}

/// Summarize a single column.
pub fn summarize_column(table: &Table, column: &str) -> SummaryRecord {
    let kind = classify(table, column);

    let mut missing_count = 0;
    let mut distinct: HashSet<&str> = HashSet::new();
    let mut numbers: Vec<f64> = Vec::new();

    for cell in table.column_cells(column) {
        match cell {
            Cell::Missing => missing_count += 1,
            Cell::Numeric { value, raw } => {
                distinct.insert(raw);
                numbers.push(*value);
            }
            Cell::Text(text) => {
                distinct.insert(text);
            }
        }
    }

    let numeric = match kind {
        ColumnKind::Numeric => Some(describe(&mut numbers)),
        ColumnKind::Categorical => None,
    };

    SummaryRecord {
        name: column.to_string(),
        kind,
        missing_count,
        unique_count: distinct.len(),
        numeric,
    }
}

/// Describe a set of finite numbers. Sorts `values` in place.
///
/// An empty slice describes as all zeros.
fn describe(values: &mut [f64]) -> NumericSummary {
    if values.is_empty() {
        return NumericSummary {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
        };
    }

    values.sort_by(f64::total_cmp);
    let mean = finite_mean(values);

    NumericSummary {
        min: values[0],
        max: values[values.len() - 1],
        mean,
        median: median_sorted(values),
        std_dev: population_std(values, mean),
    }
}

/// Median of an ascending slice, 0 for an empty slice.
fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        let (lo, hi) = (sorted[mid - 1], sorted[mid]);
        let sum = lo + hi;
        if sum.is_finite() {
            sum / 2.0
        } else {
            lo / 2.0 + hi / 2.0
        }
    } else {
        sorted[mid]
    }
}

/// Population standard deviation around a precomputed mean.
///
/// Falls back to working in units of the largest magnitude when the squared
/// deviations overflow, so the result stays finite for finite input.
fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let n = values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if variance.is_finite() {
        return variance.sqrt();
    }

    let scale = max_abs(values);
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    let scaled_mean = finite_mean(&scaled);
    let variance = scaled
        .iter()
        .map(|v| (v - scaled_mean).powi(2))
        .sum::<f64>()
        / n;
    (variance.sqrt() * scale).min(f64::MAX)
}
