//! Pearson correlation matrix across numeric columns.
//!
//! Columns enter the matrix when the classifier marks them numeric over the
//! whole column. Each pair uses pairwise-complete rows: a row counts for a
//! pair only if both of its cells are numeric.
//!
//! | Pair data | Cell |
//! |-----------|------|
//! | no overlapping numeric rows | `None` |
//! | zero variance in either series | `Some(0.0)` |
//! | otherwise | `Some(r)`, `r` in `[-1, 1]` |

use tracing::debug;

use crate::profiler::classify;
use crate::table::{Cell, Table};
use crate::types::{ColumnKind, CorrelationMatrix};
use crate::utils::{finite_mean, max_abs};

/// Correlation matrix over the numeric subset of `columns`.
///
/// Every unordered pair is computed once and mirrored, so `(i, j)` and
/// `(j, i)` hold bit-identical values.
pub fn correlation_matrix(table: &Table, columns: &[String]) -> CorrelationMatrix {
    let numeric: Vec<String> = columns
        .iter()
        .filter(|column| classify(table, column) == ColumnKind::Numeric)
        .cloned()
        .collect();

    let series: Vec<Vec<Option<f64>>> = numeric
        .iter()
        .map(|column| table.column_cells(column).map(Cell::as_number).collect())
        .collect();

    let size = numeric.len();
    let mut values = vec![vec![None; size]; size];
    for i in 0..size {
        for j in i..size {
            let coefficient = pairwise_pearson(&series[i], &series[j]);
            values[i][j] = coefficient;
            values[j][i] = coefficient;
        }
    }

    debug!(
        "Computed {} correlation cells over {} numeric columns",
        size * size,
        size
    );

    CorrelationMatrix {
        columns: numeric,
        values,
    }
}

/// Pearson coefficient over the rows where both series have a value.
fn pairwise_pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let (x, y): (Vec<f64>, Vec<f64>) = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip();
    pearson(&x, &y)
}

/// Pearson correlation coefficient of two paired series.
///
/// Returns `None` when there are no pairs and `Some(0.0)` when either series
/// has zero variance. Only the common prefix is used if the lengths differ.
///
/// Sums run over deviations from the mean, so large offsets such as epoch
/// timestamps keep their precision. A series paired with itself gives exactly
/// `1.0`.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let len = x.len().min(y.len());
    if len == 0 {
        return None;
    }
    let (x, y) = (&x[..len], &y[..len]);

    if is_constant(x) || is_constant(y) {
        return Some(0.0);
    }

    let dx = normalized_deviations(x);
    let dy = normalized_deviations(y);

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (&a, &b) in dx.iter().zip(&dy) {
        sxx += a * a;
        syy += b * b;
        sxy += a * b;
    }
    if sxx <= 0.0 || syy <= 0.0 {
        return Some(0.0);
    }

    let denominator = (sxx * syy).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return Some(0.0);
    }

    let r = sxy / denominator;
    if r.is_finite() {
        Some(r.clamp(-1.0, 1.0))
    } else {
        Some(0.0)
    }
}

/// Deviations from the mean divided by the largest deviation, so every
/// element lies in `[-1, 1]` and no square can overflow.
fn normalized_deviations(values: &[f64]) -> Vec<f64> {
    let mean = finite_mean(values);
    let mut deviations: Vec<f64> = values.iter().map(|v| v - mean).collect();

    if deviations.iter().any(|d| !d.is_finite()) {
        // The spread itself overflows; center in units of the largest value.
        let scale = max_abs(values);
        let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
        let scaled_mean = finite_mean(&scaled);
        deviations = scaled.iter().map(|v| v - scaled_mean).collect();
    }

    let largest = max_abs(&deviations);
    if largest > 0.0 {
        for d in &mut deviations {
            *d /= largest;
        }
    }
    deviations
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
