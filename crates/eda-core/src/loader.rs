//! CSV loading through polars.
//!
//! Every column is read as text so that cell resolution stays with
//! [`Cell`](crate::table::Cell): polars never gets a chance to coerce a
//! column to a numeric dtype and drop values it cannot parse.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{EdaError, Result, ResultExt};
use crate::table::{RawValue, Table};

/// Load a CSV file with a header row into a [`Table`].
pub fn load_csv(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    info!("Loading CSV: {}", path.display());

    let reader = text_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .context(format!("Failed to open '{}'", path.display()))?;
    let df = finish(reader.finish())?;

    Table::from_dataframe(&df)
}

/// Parse CSV text with a header row into a [`Table`].
pub fn parse_csv_str(text: &str) -> Result<Table> {
    let reader = text_options().into_reader_with_file_handle(Cursor::new(text.to_owned()));
    let df = finish(reader.finish())?;
    Table::from_dataframe(&df)
}

fn text_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
}

fn finish(read: PolarsResult<DataFrame>) -> Result<DataFrame> {
    let df = match read {
        Ok(df) => df,
        Err(PolarsError::NoData(msg)) => return Err(EdaError::EmptyInput(msg.to_string())),
        Err(e) => return Err(e.into()),
    };

    if df.width() == 0 {
        return Err(EdaError::EmptyInput("no header row".to_string()));
    }

    debug!("Read {} rows x {} columns", df.height(), df.width());
    Ok(df)
}

impl Table {
    /// Convert a polars frame into a table.
    ///
    /// Columns of any dtype are rendered to text first and then resolved
    /// like any other raw value; nulls become missing cells.
    pub fn from_dataframe(df: &DataFrame) -> Result<Table> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut records: Vec<Vec<RawValue>> = vec![Vec::with_capacity(df.width()); df.height()];
        for column in df.get_columns() {
            let series = column
                .as_materialized_series()
                .cast(&DataType::String)
                .context(format!("Failed to read column '{}' as text", column.name()))?;
            let values = series.str()?;
            for (record, value) in records.iter_mut().zip(values) {
                record.push(RawValue::from(value));
            }
        }

        Ok(Table::from_records(columns, records))
    }
}
