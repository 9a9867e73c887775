//! In-memory table model consumed by every analysis engine.
//!
//! Raw values arrive from a parser as [`RawValue`]s and are resolved exactly
//! once, when the [`Table`] is built, into [`Cell`]s:
//!
//! | Raw value | Cell |
//! |-----------|------|
//! | null, absent key, `""` | [`Cell::Missing`] |
//! | finite number, or text that parses as one | [`Cell::Numeric`] |
//! | anything else | [`Cell::Text`] |
//!
//! # Example
//!
//! ```rust
//! use eda_core::table::{Cell, RawValue, Table};
//!
//! let table = Table::from_records(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         vec![RawValue::from("1"), RawValue::Null],
//!         vec![RawValue::from(2.5), RawValue::from("x")],
//!     ],
//! );
//!
//! assert_eq!(table.row_count(), 2);
//! assert!(table.cell(0, "b").is_missing());
//! assert_eq!(table.cell(1, "a").as_number(), Some(2.5));
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EdaError, Result};
use crate::utils::{number_to_text, parse_finite_number};

// ============================================================================
// Raw input values
// ============================================================================

/// A value as delivered by the parsing collaborator.
///
/// An absent key in a row map is the fourth form and behaves like `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Explicit null.
    Null,
    /// A native number.
    Number(f64),
    /// Text as read from the file.
    Text(String),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

// ============================================================================
// Resolved cells
// ============================================================================

/// A resolved table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    /// Null, absent or empty string.
    Missing,
    /// A finite number together with the text it was read from.
    ///
    /// The text is the identity used for distinct-value counting, so `"1"`
    /// and `"1.0"` stay two different values.
    Numeric { value: f64, raw: String },
    /// Any non-empty value that is not a finite number.
    Text(String),
}

static MISSING: Cell = Cell::Missing;

impl Cell {
    /// Resolve a raw value into a cell.
    pub fn from_raw(raw: &RawValue) -> Self {
        match raw {
            RawValue::Null => Cell::Missing,
            RawValue::Number(value) if value.is_finite() => Cell::Numeric {
                value: *value,
                raw: number_to_text(*value),
            },
            RawValue::Number(value) => Cell::Text(value.to_string()),
            RawValue::Text(text) => Cell::from_text(text),
        }
    }

    /// Resolve a piece of text into a cell.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Cell::Missing;
        }
        match parse_finite_number(text) {
            Some(value) => Cell::Numeric {
                value,
                raw: text.to_string(),
            },
            None => Cell::Text(text.to_string()),
        }
    }

    /// Returns `true` for [`Cell::Missing`].
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns the numeric value, if this cell holds one.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns the raw text of a non-missing cell.
    #[inline]
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Cell::Missing => None,
            Cell::Numeric { raw, .. } => Some(raw),
            Cell::Text(text) => Some(text),
        }
    }
}

// ============================================================================
// Rows and tables
// ============================================================================

/// One table row: cells in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Returns the cell at column `position`, or [`Cell::Missing`] past the end.
    pub fn get(&self, position: usize) -> &Cell {
        self.cells.get(position).unwrap_or(&MISSING)
    }

    /// All cells of the row in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// An immutable snapshot of tabular data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

// Engines may be fanned out across threads over a shared snapshot.
static_assertions::assert_impl_all!(Table: Send, Sync);

impl Table {
    /// Build a table from row maps.
    ///
    /// Duplicate column names keep their first occurrence. Row keys that are
    /// not listed in `columns` are dropped.
    pub fn new<I>(columns: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = HashMap<String, RawValue>>,
    {
        let (columns, _) = dedupe_columns(columns);

        let rows = rows
            .into_iter()
            .map(|values| {
                let cells = columns
                    .iter()
                    .map(|column| values.get(column).map_or(Cell::Missing, Cell::from_raw))
                    .collect();
                Row { cells }
            })
            .collect();

        Self { columns, rows }
    }

    /// Build a table from positional records aligned with `columns`.
    ///
    /// Short records leave the trailing columns absent; extra values are
    /// ignored. Values under a duplicate column name are dropped along with
    /// the name.
    pub fn from_records<I, R>(columns: Vec<String>, records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = RawValue>,
    {
        let (columns, keep) = dedupe_columns(columns);

        let rows = records
            .into_iter()
            .map(|record| {
                let mut cells: Vec<Cell> = keep
                    .iter()
                    .zip(record)
                    .filter(|(kept, _)| **kept)
                    .map(|(_, raw)| Cell::from_raw(&raw))
                    .collect();
                cells.resize(columns.len(), Cell::Missing);
                Row { cells }
            })
            .collect();

        Self { columns, rows }
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if `column` is one of the table's columns.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Fail with [`EdaError::ColumnNotFound`] unless `column` exists.
    pub fn require_column(&self, column: &str) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(EdaError::ColumnNotFound(column.to_string()))
        }
    }

    /// Position of `column` in the column order.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// The cell at `row` under `column`.
    ///
    /// An unknown row or column reads as [`Cell::Missing`].
    pub fn cell(&self, row: usize, column: &str) -> &Cell {
        match (self.rows.get(row), self.column_index(column)) {
            (Some(row), Some(position)) => row.get(position),
            _ => &MISSING,
        }
    }

    /// Iterate over the cells of one column, one per row.
    ///
    /// An unknown column yields a [`Cell::Missing`] for every row.
    pub fn column_cells<'a>(
        &'a self,
        column: &str,
    ) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let position = self.column_index(column);
        self.rows.iter().map(move |row| match position {
            Some(position) => row.get(position),
            None => &MISSING,
        })
    }

    /// The first `n` rows rendered as text, with missing cells left empty.
    pub fn head(&self, n: usize) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .take(n)
            .map(|row| {
                row.cells()
                    .iter()
                    .map(|cell| cell.raw_text().unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }
}

/// Unique column names in first-seen order, plus a keep flag per input name.
fn dedupe_columns(columns: Vec<String>) -> (Vec<String>, Vec<bool>) {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(columns.len());
    let mut keep = Vec::with_capacity(columns.len());
    for column in columns {
        if seen.insert(column.clone()) {
            unique.push(column);
            keep.push(true);
        } else {
            warn!("Duplicate column name '{}' ignored", column);
            keep.push(false);
        }
    }
    (unique, keep)
}
