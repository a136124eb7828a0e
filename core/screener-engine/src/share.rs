//! FILENAME: core/screener-engine/src/share.rs
//! Share Links - Query-string codec for the filter state.
//!
//! The encoding emits one `key=value` pair per ACTIVE filter, using the
//! same camelCase names as the filter state itself: `companyName`,
//! `industries`/`markets`/`prefectures` (comma-joined, sorted), and
//! `<field>Min`/`<field>Max` with bounds in user units. Decoding is
//! forgiving: unknown keys and unparsable numbers are skipped, so a stale
//! or hand-edited link still yields a usable state.

use rustc_hash::FxHashSet;
use url::form_urlencoded;

use model::Field;

use crate::definition::{RangeFilter, ScreenFilters};

// ============================================================================
// ENCODE
// ============================================================================

/// Encode the active filters as a URL query string (no leading '?').
/// The default state encodes to an empty string.
pub fn encode_filters(filters: &ScreenFilters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !filters.company_name.is_empty() {
        serializer.append_pair(Field::CompanyName.query_key(), &filters.company_name);
    }

    append_selection(&mut serializer, "industries", &filters.industries);
    append_selection(&mut serializer, "markets", &filters.markets);
    append_selection(&mut serializer, "prefectures", &filters.prefectures);

    // Field::ALL order keeps the encoding deterministic.
    for field in Field::ALL {
        let range = match filters.ranges.get(&field) {
            Some(range) => range,
            None => continue,
        };
        if let Some(min) = range.min {
            serializer.append_pair(&format!("{}Min", field.query_key()), &format_bound(min));
        }
        if let Some(max) = range.max {
            serializer.append_pair(&format!("{}Max", field.query_key()), &format_bound(max));
        }
    }

    serializer.finish()
}

fn append_selection(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    key: &str,
    selection: &FxHashSet<String>,
) {
    if selection.is_empty() {
        return;
    }
    let mut values: Vec<&str> = selection.iter().map(String::as_str).collect();
    values.sort_unstable();
    serializer.append_pair(key, &values.join(","));
}

/// Print a bound without a trailing ".0" on whole numbers.
fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// DECODE
// ============================================================================

/// Decode a query string (with or without a leading '?') back into a
/// filter state. Pairs that do not correspond to a filter are ignored.
pub fn decode_filters(query: &str) -> ScreenFilters {
    let mut filters = ScreenFilters::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        apply_pair(&mut filters, &key, &value);
    }

    filters
}

fn apply_pair(filters: &mut ScreenFilters, key: &str, value: &str) {
    if key == Field::CompanyName.query_key() {
        filters.company_name = value.to_string();
        return;
    }

    match key {
        "industries" => {
            filters.industries = split_selection(value);
            return;
        }
        "markets" => {
            filters.markets = split_selection(value);
            return;
        }
        "prefectures" => {
            filters.prefectures = split_selection(value);
            return;
        }
        _ => {}
    }

    if let Some(field_key) = key.strip_suffix("Min") {
        if let Some((field, bound)) = parse_bound(field_key, value) {
            let mut range = filters.range(field).unwrap_or_default();
            range.min = Some(bound);
            filters.set_range(field, range);
        }
        return;
    }

    if let Some(field_key) = key.strip_suffix("Max") {
        if let Some((field, bound)) = parse_bound(field_key, value) {
            let mut range = filters.range(field).unwrap_or_default();
            range.max = Some(bound);
            filters.set_range(field, range);
        }
    }
}

fn parse_bound(field_key: &str, value: &str) -> Option<(Field, f64)> {
    let field = Field::from_query_key(field_key)?;
    if !field.is_numeric() {
        return None;
    }
    let bound: f64 = value.trim().parse().ok()?;
    if !bound.is_finite() {
        return None;
    }
    Some((field, bound))
}

fn split_selection(value: &str) -> FxHashSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
