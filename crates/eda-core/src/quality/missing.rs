//! Missing-value counts per column and across the table.

use crate::table::Table;
use crate::types::{MissingOverview, MissingStat};
use crate::utils::percentage;

/// Missing-value statistics for each of `columns`, in input order.
///
/// The percentage is relative to the table's row count and is 0 for an empty
/// table.
pub fn missing_stats(table: &Table, columns: &[String]) -> Vec<MissingStat> {
    let row_count = table.row_count();

    columns
        .iter()
        .map(|column| {
            let missing_count = table
                .column_cells(column)
                .filter(|cell| cell.is_missing())
                .count();
            MissingStat {
                column: column.clone(),
                missing_count,
                percentage: percentage(missing_count, row_count),
            }
        })
        .collect()
}

/// Table-level missingness over `columns` together with the per-column stats.
pub fn missing_overview(table: &Table, columns: &[String]) -> MissingOverview {
    let per_column = missing_stats(table, columns);
    let total_cells = table.row_count().saturating_mul(columns.len());
    let total_missing: usize = per_column.iter().map(|stat| stat.missing_count).sum();

    MissingOverview {
        total_cells,
        total_missing,
        missing_percentage: percentage(total_missing, total_cells),
        per_column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawValue;
    use pretty_assertions::assert_eq;

    fn city_table() -> Table {
        Table::from_records(
            vec!["city".to_string(), "zip".to_string()],
            vec![
                vec!["NY".into(), "10001".into()],
                vec!["NY".into(), "".into()],
                vec!["LA".into(), RawValue::Null],
                vec![RawValue::Null, "90001".into()],
            ],
        )
    }

    #[test]
    fn test_missing_stats() {
        let stats = missing_stats(&city_table(), &["city".to_string(), "zip".to_string()]);
        assert_eq!(
            stats,
            vec![
                MissingStat {
                    column: "city".to_string(),
                    missing_count: 1,
                    percentage: 25.0,
                },
                MissingStat {
                    column: "zip".to_string(),
                    missing_count: 2,
                    percentage: 50.0,
                },
            ]
        );
    }

    #[test]
    fn test_empty_table_has_zero_percentage() {
        let table = Table::from_records(vec!["a".to_string()], Vec::<Vec<RawValue>>::new());
        let stats = missing_stats(&table, &["a".to_string()]);
        assert_eq!(stats[0].missing_count, 0);
        assert_eq!(stats[0].percentage, 0.0);
        assert!(!stats[0].percentage.is_nan());
    }

    #[test]
    fn test_unknown_column_is_fully_missing() {
        let stats = missing_stats(&city_table(), &["nope".to_string()]);
        assert_eq!(stats[0].missing_count, 4);
        assert_eq!(stats[0].percentage, 100.0);
    }

    #[test]
    fn test_overview_totals() {
        let table = city_table();
        let overview = missing_overview(&table, table.columns());
        assert_eq!(overview.total_cells, 8);
        assert_eq!(overview.total_missing, 3);
        assert_eq!(overview.missing_percentage, 37.5);
        assert_eq!(overview.per_column.len(), 2);
    }

    #[test]
    fn test_overview_without_cells() {
        let overview = missing_overview(&Table::default(), &[]);
        assert_eq!(overview.total_cells, 0);
        assert_eq!(overview.missing_percentage, 0.0);
    }
}
