//! FILENAME: core/persistence/src/csv_writer.rs

use crate::PersistenceError;
use csv::WriterBuilder;
use model::{Field, FieldValue, StockRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a dataset to a CSV file with the full Japanese header row.
pub fn save_records(path: &Path, records: &[StockRecord]) -> Result<(), PersistenceError> {
    let file = File::create(path)?;
    write_records(file, records)
}

/// Encode records with one column per field, in `Field::ALL` order. Null
/// cells are written empty, so the output reads back to the same records.
pub fn write_records<W: Write>(
    writer: W,
    records: &[StockRecord],
) -> Result<(), PersistenceError> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    csv_writer.write_record(Field::ALL.iter().map(|field| field.label()))?;

    for record in records {
        let row: Vec<String> = Field::ALL
            .iter()
            .map(|field| match record.value(*field) {
                FieldValue::Text(value) => value.unwrap_or("").to_string(),
                FieldValue::Number(value) => value.map(|v| v.to_string()).unwrap_or_default(),
            })
            .collect();
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Merge several datasets into one, deduplicating on ticker code. When the
/// same ticker appears more than once, the LAST occurrence's data wins but
/// the record keeps the position of its FIRST occurrence. Records without a
/// ticker have no identity and are never merged.
pub fn combine_datasets(datasets: Vec<Vec<StockRecord>>) -> Vec<StockRecord> {
    let mut combined: Vec<StockRecord> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in datasets.into_iter().flatten() {
        if record.ticker_code.is_empty() {
            combined.push(record);
            continue;
        }
        match positions.get(&record.ticker_code) {
            Some(&index) => combined[index] = record,
            None => {
                positions.insert(record.ticker_code.clone(), combined.len());
                combined.push(record);
            }
        }
    }

    combined
}
