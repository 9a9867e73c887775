//! Column kind inference.
//!
//! A single rule decides whether a column is numeric, and every engine goes
//! through [`infer_kind`] so no two engines can disagree on a column.

use crate::table::{Cell, Table};
use crate::types::ColumnKind;

/// Classify one column of `table`.
///
/// Unknown columns read as all-missing and are therefore categorical.
pub fn classify(table: &Table, column: &str) -> ColumnKind {
    infer_kind(table.column_cells(column))
}

/// Infer the kind of any sequence of cells.
///
/// Numeric iff at least one cell is non-missing and every non-missing cell is
/// numeric. Missing cells carry no evidence either way.
pub fn infer_kind<'a, I>(cells: I) -> ColumnKind
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut seen_value = false;
    for cell in cells {
        match cell {
            Cell::Missing => {}
            Cell::Numeric { .. } => seen_value = true,
            Cell::Text(_) => return ColumnKind::Categorical,
        }
    }

    if seen_value {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}
