//! FILENAME: core/screener-engine/src/summary.rs
//! Summary Aggregation - Dataset-level counts and averages.
//!
//! The averages are taken over the FULL record list so they describe the
//! dataset, not the current filter; only `filtered_count` tracks the active
//! screen. Means skip null values, and a field that is null everywhere
//! yields 0.0 rather than null so downstream display never branches.

use serde::{Deserialize, Serialize};

use model::{Field, StockRecord};

/// Counts and headline averages shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySnapshot {
    pub total_count: usize,
    pub filtered_count: usize,
    /// Mean market cap in yen over records that report one.
    pub avg_market_cap: f64,
    #[serde(rename = "avgPBR")]
    pub avg_pbr: f64,
    #[serde(rename = "avgROE")]
    pub avg_roe: f64,
}

/// Build the summary for the dataset and the current filtered count.
pub fn summarize(records: &[StockRecord], filtered_count: usize) -> SummarySnapshot {
    SummarySnapshot {
        total_count: records.len(),
        filtered_count,
        avg_market_cap: mean_non_null(records, Field::MarketCap),
        avg_pbr: mean_non_null(records, Field::Pbr),
        avg_roe: mean_non_null(records, Field::Roe),
    }
}

/// Arithmetic mean over the non-null values of one numeric field.
/// An all-null field yields 0.0.
pub fn mean_non_null(records: &[StockRecord], field: Field) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records {
        if let Some(value) = record.numeric_value(field) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
