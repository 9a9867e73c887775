//! Output artifacts produced by the analysis engines.
//!
//! Every type here is plain data: fully evaluated, `Serialize`, and ready to
//! be rendered or written as JSON without further computation.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Column kind
// ============================================================================

/// Inferred kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Every non-missing value is a finite number.
    Numeric,
    /// Anything else, including all-missing columns.
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        };
        f.pad(name)
    }
}

// ============================================================================
// Missing values
// ============================================================================

/// Missing-value count for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingStat {
    pub column: String,
    pub missing_count: usize,
    /// Share of rows that are missing, in percent. 0 for an empty table.
    pub percentage: f64,
}

/// Dataset-level missingness with the per-column breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingOverview {
    pub total_cells: usize,
    pub total_missing: usize,
    pub missing_percentage: f64,
    pub per_column: Vec<MissingStat>,
}

// ============================================================================
// Summary statistics
// ============================================================================

/// Descriptive statistics of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Per-column summary record.
///
/// The numeric fields are flattened into the record and only present for
/// [`ColumnKind::Numeric`] columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub name: String,
    pub kind: ColumnKind,
    pub missing_count: usize,
    /// Distinct non-missing raw values.
    pub unique_count: usize,
    #[serde(flatten)]
    pub numeric: Option<NumericSummary>,
}

// ============================================================================
// Distributions
// ============================================================================

/// One entry of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistributionBin {
    /// Histogram bin of a numeric column, half-open `[start, end)` except
    /// for the last bin which also holds `end`.
    Range {
        label: String,
        start: f64,
        end: f64,
        count: usize,
    },
    /// Frequency of one category.
    Category { label: String, count: usize },
}

impl DistributionBin {
    /// Display label: `"lo - hi"` for ranges, the raw value for categories.
    pub fn label(&self) -> &str {
        match self {
            Self::Range { label, .. } | Self::Category { label, .. } => label,
        }
    }

    /// Number of values that fell into this entry.
    pub fn count(&self) -> usize {
        match self {
            Self::Range { count, .. } | Self::Category { count, .. } => *count,
        }
    }
}

/// Distribution of one column, as stored in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDistribution {
    pub column: String,
    pub bins: Vec<DistributionBin>,
}

// ============================================================================
// Correlation
// ============================================================================

/// Square, symmetric Pearson correlation matrix over numeric columns.
///
/// `None` marks a pair without a single row where both values are numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// A pair of columns and their correlation coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub column_x: String,
    pub column_y: String,
    pub coefficient: f64,
}

impl CorrelationMatrix {
    /// Number of numeric columns in the matrix.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no numeric columns were found.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a coefficient by column names.
    ///
    /// Returns `None` both for unknown columns and for pairs without data.
    pub fn get(&self, column_a: &str, column_b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == column_a)?;
        let j = self.columns.iter().position(|c| c == column_b)?;
        self.values[i][j]
    }

    /// Off-diagonal pairs ordered by descending absolute coefficient.
    ///
    /// Pairs without data are skipped. Equal magnitudes keep matrix order.
    pub fn strongest_pairs(&self, limit: usize) -> Vec<CorrelationPair> {
        let mut pairs: Vec<CorrelationPair> = Vec::new();
        for i in 0..self.columns.len() {
            for j in (i + 1)..self.columns.len() {
                if let Some(coefficient) = self.values[i][j] {
                    pairs.push(CorrelationPair {
                        column_x: self.columns[i].clone(),
                        column_y: self.columns[j].clone(),
                        coefficient,
                    });
                }
            }
        }

        pairs.sort_by(|a, b| b.coefficient.abs().total_cmp(&a.coefficient.abs()));
        pairs.truncate(limit);
        pairs
    }
}

// ============================================================================
// Report
// ============================================================================

/// Every artifact computed for one table snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdaReport {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    pub missing: MissingOverview,
    pub summary: Vec<SummaryRecord>,
    pub distributions: Vec<ColumnDistribution>,
    pub correlation: CorrelationMatrix,
    pub strongest_correlations: Vec<CorrelationPair>,
}
