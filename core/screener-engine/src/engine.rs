//! FILENAME: core/screener-engine/src/engine.rs
//! Screener Engine - The filter/sort core over the record list.
//!
//! This module takes the record list and a ScreenFilters/SortConfig pair and
//! produces the ordered list of visible record indices.
//!
//! Algorithm:
//! 1. Lower the company-name pattern once and collect the active numeric
//!    ranges, rescaling each bound from user units to raw record units
//! 2. Scan the records once, keeping the indices that pass every predicate
//!    (logical AND; unset filter fields impose no constraint)
//! 3. When a sort is set, stable-sort the surviving indices with nulls
//!    ordered last in both directions
//!
//! The engine never fails: absent values count as null, and a range keyed
//! to a text field is skipped the way an unknown sort key would be.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use model::{Field, FieldValue, StockRecord};

use crate::definition::{ScreenFilters, SortConfig, SortDirection};

/// One active numeric constraint with its bounds already rescaled to raw
/// record units. A handful of these exist per apply call.
#[derive(Debug, Clone, Copy)]
struct ActiveRange {
    field: Field,
    min: Option<f64>,
    max: Option<f64>,
}

// ============================================================================
// APPLY
// ============================================================================

/// Apply filters and sort to the record list, returning the indices of the
/// visible records in display order. The input list is never modified;
/// calling this twice with the same state yields the same result.
pub fn apply(
    records: &[StockRecord],
    filters: &ScreenFilters,
    sort: Option<SortConfig>,
) -> Vec<usize> {
    let pattern = filters.company_name.to_lowercase();
    let ranges = collect_active_ranges(filters);

    let mut visible: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_passes(record, filters, &pattern, &ranges))
        .map(|(index, _)| index)
        .collect();

    if let Some(config) = sort {
        // Vec::sort_by is stable, so equal records keep their filtered order.
        visible.sort_by(|&a, &b| compare_records(&records[a], &records[b], config));
    }

    visible
}

/// Rescale and gather the ranges that actually constrain something.
/// Ranges keyed to text fields are dropped here.
fn collect_active_ranges(filters: &ScreenFilters) -> SmallVec<[ActiveRange; 8]> {
    let mut active = SmallVec::new();
    for (&field, range) in &filters.ranges {
        if !field.is_numeric() || !range.is_active() {
            continue;
        }
        let scale = field.input_scale();
        active.push(ActiveRange {
            field,
            min: range.min.map(|v| v * scale),
            max: range.max.map(|v| v * scale),
        });
    }
    active
}

/// Logical AND over every active predicate.
fn record_passes(
    record: &StockRecord,
    filters: &ScreenFilters,
    pattern: &str,
    ranges: &[ActiveRange],
) -> bool {
    if !pattern.is_empty() && !record.company_name.to_lowercase().contains(pattern) {
        return false;
    }

    if !filters.industries.is_empty() && !selection_contains(&filters.industries, &record.industry)
    {
        return false;
    }
    if !filters.markets.is_empty() && !selection_contains(&filters.markets, &record.market) {
        return false;
    }
    if !filters.prefectures.is_empty()
        && !selection_contains(&filters.prefectures, &record.prefecture)
    {
        return false;
    }

    for range in ranges {
        // A null metric never qualifies once a bound is active.
        let value = match record.numeric_value(range.field) {
            Some(value) => value,
            None => return false,
        };
        if let Some(min) = range.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = range.max {
            if value > max {
                return false;
            }
        }
    }

    true
}

fn selection_contains(selection: &FxHashSet<String>, value: &Option<String>) -> bool {
    match value {
        Some(v) => selection.contains(v),
        None => false,
    }
}

// ============================================================================
// ORDERING
// ============================================================================

/// Compare two records under the given sort. Nulls order last regardless of
/// direction; the direction only reverses non-null comparisons. Text fields
/// compare by code point, numeric fields by value.
pub fn compare_records(a: &StockRecord, b: &StockRecord, config: SortConfig) -> Ordering {
    let a_value = a.value(config.field);
    let b_value = b.value(config.field);

    match (a_value.is_null(), b_value.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let ordering = match (a_value, b_value) {
        (FieldValue::Text(Some(x)), FieldValue::Text(Some(y))) => x.cmp(y),
        (FieldValue::Number(Some(x)), FieldValue::Number(Some(y))) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    };

    match config.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
