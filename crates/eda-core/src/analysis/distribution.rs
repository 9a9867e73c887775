//! Histograms and frequency tables for a single column.
//!
//! The column kind is re-derived from the values handed in rather than taken
//! from a prior classification, so callers may pass any pre-filtered subset.
//! The derivation goes through [`infer_kind`], the same rule the classifier
//! uses.

use std::collections::HashMap;

use crate::config::AnalysisConfig;
use crate::profiler::infer_kind;
use crate::table::{Cell, Table};
use crate::types::{ColumnKind, DistributionBin};
use crate::utils::{format_fixed, format_range};

/// Distribution of `column` with the default configuration: ten histogram
/// bins, at most ten categories, labels with two decimals.
pub fn distribution(table: &Table, column: &str) -> Vec<DistributionBin> {
    distribution_with_config(table, column, &AnalysisConfig::default())
}

/// Distribution of `column` using the bin count, category limit and label
/// precision of `config`.
pub fn distribution_with_config(
    table: &Table,
    column: &str,
    config: &AnalysisConfig,
) -> Vec<DistributionBin> {
    let cells: Vec<&Cell> = table.column_cells(column).collect();
    distribution_of_cells(&cells, config)
}

/// Distribution of an arbitrary set of cells. Missing cells are skipped.
///
/// Returns an empty sequence when no value is present.
pub fn distribution_of_cells(cells: &[&Cell], config: &AnalysisConfig) -> Vec<DistributionBin> {
    let present: Vec<&Cell> = cells.iter().copied().filter(|c| !c.is_missing()).collect();
    if present.is_empty() {
        return Vec::new();
    }

    match infer_kind(present.iter().copied()) {
        ColumnKind::Numeric => {
            let values: Vec<f64> = present.iter().filter_map(|c| c.as_number()).collect();
            histogram(&values, config.histogram_bins.max(1), config.label_precision)
        }
        ColumnKind::Categorical => frequency_table(&present, config.top_categories),
    }
}

/// Equal-width histogram over `[min, max]`.
///
/// All `bins` bins are returned, empty ones included. A constant series
/// collapses into one bin labeled with its value. A span too narrow to split
/// into nonzero widths gives one bin covering `[min, max]`.
fn histogram(values: &[f64], bins: usize, precision: usize) -> Vec<DistributionBin> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min == max {
        return vec![DistributionBin::Range {
            label: format_fixed(min, precision),
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let bin_count = bins as f64;
    let mut width = (max - min) / bin_count;
    if !width.is_finite() {
        // The span itself overflowed; divide before subtracting.
        width = max / bin_count - min / bin_count;
    }
    if width == 0.0 || !width.is_finite() {
        return vec![DistributionBin::Range {
            label: format_range(min, max, precision),
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let mut counts = vec![0usize; bins];
    for &value in values {
        // Float casts saturate, so an over-large quotient lands in the last bin.
        let index = (((value - min) / width).floor() as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| {
            let start = min + idx as f64 * width;
            let end = min + (idx as f64 + 1.0) * width;
            DistributionBin::Range {
                label: format_range(start, end, precision),
                start,
                end,
                count,
            }
        })
        .collect()
}

/// Top `limit` categories by descending count.
///
/// Accumulation keeps first-seen order and the sort is stable, so ties stay
/// in the order they were first encountered.
fn frequency_table(cells: &[&Cell], limit: usize) -> Vec<DistributionBin> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for label in cells.iter().filter_map(|c| c.raw_text()) {
        match positions.get(label) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    counts
        .into_iter()
        .map(|(label, count)| DistributionBin::Category {
            label: label.to_string(),
            count,
        })
        .collect()
}
