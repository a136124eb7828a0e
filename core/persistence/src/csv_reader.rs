//! FILENAME: core/persistence/src/csv_reader.rs

use crate::PersistenceError;
use csv::ReaderBuilder;
use model::{Field, StockRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a dataset from a CSV file with Japanese column headers.
pub fn load_records(path: &Path) -> Result<Vec<StockRecord>, PersistenceError> {
    let file = File::open(path)?;
    read_records(file)
}

/// Decode a dataset from any reader. The header row maps to fields by exact
/// column name; unknown columns are ignored. Cell-level problems degrade to
/// null values so one bad cell never fails the whole load.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<StockRecord>, PersistenceError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns = map_columns(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = StockRecord::new(String::new(), String::new());

        for (index, field) in &columns {
            let cell = row.get(*index).unwrap_or("");
            if field.is_numeric() {
                record.set_number(*field, parse_number(cell));
            } else {
                record.set_text(*field, parse_text(cell));
            }
        }

        records.push(record);
    }

    Ok(records)
}

/// Resolve each header cell to a field. Both identity columns must be
/// present; every other column is optional.
fn map_columns(headers: &csv::StringRecord) -> Result<Vec<(usize, Field)>, PersistenceError> {
    let mut columns = Vec::new();

    for (index, header) in headers.iter().enumerate() {
        // Excel exports prefix the first header with a UTF-8 BOM.
        let header = header.trim_start_matches('\u{feff}').trim();
        if let Some(field) = Field::from_label(header) {
            columns.push((index, field));
        }
    }

    for required in [Field::CompanyName, Field::TickerCode] {
        if !columns.iter().any(|(_, field)| *field == required) {
            return Err(PersistenceError::MissingColumn(
                required.label().to_string(),
            ));
        }
    }

    Ok(columns)
}

fn parse_text(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

/// Numeric cells may carry embedded thousands separators. Anything that
/// still does not parse is treated as missing.
fn parse_number(cell: &str) -> Option<f64> {
    let cell = cell.trim().replace(',', "");
    if cell.is_empty() {
        return None;
    }
    cell.parse().ok()
}
