//! FILENAME: core/screener-engine/src/facets.rs
//! Derived Facets - Distinct classification values for filter choices.
//!
//! Facets are computed from the FULL record list, not the filtered subset:
//! they enumerate every possible choice, so a selection that empties the
//! result can still be widened again. Recomputed on load only.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use model::{Field, StockRecord};

/// One distinct value of a classification field with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetValue {
    pub value: String,
    pub count: u32,
}

/// The facet lists for every classification field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub industries: Vec<FacetValue>,
    pub markets: Vec<FacetValue>,
    pub prefectures: Vec<FacetValue>,
}

/// Compute the facets for the classification fields.
pub fn collect_facets(records: &[StockRecord]) -> Facets {
    Facets {
        industries: unique_values(records, Field::Industry),
        markets: unique_values(records, Field::Market),
        prefectures: unique_values(records, Field::Prefecture),
    }
}

/// Distinct non-null values of one text field, with counts, sorted by value
/// for stable display order.
pub fn unique_values(records: &[StockRecord], field: Field) -> Vec<FacetValue> {
    let mut value_counts: FxHashMap<&str, u32> = FxHashMap::default();
    for record in records {
        if let Some(value) = record.text_value(field) {
            if !value.is_empty() {
                *value_counts.entry(value).or_insert(0) += 1;
            }
        }
    }

    let mut values: Vec<FacetValue> = value_counts
        .into_iter()
        .map(|(value, count)| FacetValue {
            value: value.to_string(),
            count,
        })
        .collect();

    // Sort by value
    values.sort_by(|a, b| a.value.cmp(&b.value));
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_industry(ticker: &str, industry: Option<&str>) -> StockRecord {
        let mut record = StockRecord::new("社名", ticker);
        record.industry = industry.map(str::to_string);
        record
    }

    #[test]
    fn test_unique_values_are_distinct_sorted_and_counted() {
        let records = vec![
            record_with_industry("1", Some("小売業")),
            record_with_industry("2", Some("銀行業")),
            record_with_industry("3", Some("小売業")),
            record_with_industry("4", None),
        ];

        let values = unique_values(&records, Field::Industry);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value, "小売業");
        assert_eq!(values[0].count, 2);
        assert_eq!(values[1].value, "銀行業");
        assert_eq!(values[1].count, 1);
    }

    #[test]
    fn test_null_values_produce_no_facet() {
        let records = vec![
            record_with_industry("1", None),
            record_with_industry("2", None),
        ];
        assert!(unique_values(&records, Field::Industry).is_empty());
    }

    #[test]
    fn test_collect_facets_covers_all_classification_fields() {
        let mut record = StockRecord::new("社名", "1234");
        record.industry = Some("小売業".to_string());
        record.market = Some("プライム（内国株式）".to_string());
        record.prefecture = Some("東京都".to_string());
        let records = vec![record];

        let facets = collect_facets(&records);
        assert_eq!(facets.industries.len(), 1);
        assert_eq!(facets.markets.len(), 1);
        assert_eq!(facets.prefectures.len(), 1);
        assert_eq!(facets.markets[0].value, "プライム（内国株式）");
    }
}
