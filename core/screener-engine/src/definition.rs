//! FILENAME: core/screener-engine/src/definition.rs
//! Screen Definition - The serializable filter, sort, and pagination state.
//!
//! This module contains all the types needed to DESCRIBE a screen over the
//! dataset. These structures are designed to be:
//! - Serializable (camelCase, so they match the share-link query keys)
//! - Immutable snapshots of user intent, replaced wholesale on each update
//! - Free of any reference to the record list they will be applied to
//!
//! All numeric bounds are stored in USER units (億円 for currency fields,
//! percent for percentage fields). Rescaling to raw record units happens
//! inside the engine, never here.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use model::Field;

/// Page size choices offered to the user.
pub const ITEMS_PER_PAGE_OPTIONS: [usize; 3] = [50, 100, 200];

/// Page size applied before the user picks one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 50;

// ============================================================================
// RANGE FILTER
// ============================================================================

/// Inclusive numeric bounds for one metric. Either bound may be unset,
/// meaning unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        RangeFilter { min, max }
    }

    /// An inactive range imposes no constraint.
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

impl Default for RangeFilter {
    fn default() -> Self {
        RangeFilter {
            min: None,
            max: None,
        }
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

/// The complete filter state. Every field's zero value means "no
/// constraint", so the default state passes every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenFilters {
    /// Case-insensitive substring over company names; empty = inactive.
    #[serde(default)]
    pub company_name: String,

    /// Selected industries; empty set = no restriction.
    #[serde(default)]
    pub industries: FxHashSet<String>,

    /// Selected market tiers; empty set = no restriction.
    #[serde(default)]
    pub markets: FxHashSet<String>,

    /// Selected prefectures; empty set = no restriction.
    #[serde(default)]
    pub prefectures: FxHashSet<String>,

    /// Per-metric bounds, keyed by field. Entries keyed to a text field
    /// are ignored by the engine.
    #[serde(default)]
    pub ranges: FxHashMap<Field, RangeFilter>,
}

impl ScreenFilters {
    pub fn new() -> Self {
        ScreenFilters {
            company_name: String::new(),
            industries: FxHashSet::default(),
            markets: FxHashSet::default(),
            prefectures: FxHashSet::default(),
            ranges: FxHashMap::default(),
        }
    }

    /// Check if any filter field currently constrains the result.
    pub fn is_active(&self) -> bool {
        !self.company_name.is_empty()
            || !self.industries.is_empty()
            || !self.markets.is_empty()
            || !self.prefectures.is_empty()
            || self.ranges.values().any(|r| r.is_active())
    }

    /// Set or clear the bounds for one metric. Inactive ranges are removed
    /// so `is_active` and the share encoding stay minimal.
    pub fn set_range(&mut self, field: Field, range: RangeFilter) {
        if range.is_active() {
            self.ranges.insert(field, range);
        } else {
            self.ranges.remove(&field);
        }
    }

    pub fn range(&self, field: Field) -> Option<RangeFilter> {
        self.ranges.get(&field).copied()
    }

    /// Reset every filter field to its unconstrained default.
    pub fn clear(&mut self) {
        *self = ScreenFilters::new();
    }
}

impl Default for ScreenFilters {
    fn default() -> Self {
        ScreenFilters::new()
    }
}

// ============================================================================
// SORT STATE
// ============================================================================

/// Sort direction. Nulls sort last in BOTH directions; the direction only
/// flips comparisons between non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// The active sort, if any. At most one field sorts at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: Field, direction: SortDirection) -> Self {
        SortConfig { field, direction }
    }

    /// Advance the three-state cycle for `field`:
    /// unsorted -> ascending -> descending -> unsorted. Toggling a field
    /// other than the current one starts that field at ascending.
    pub fn toggled(current: Option<SortConfig>, field: Field) -> Option<SortConfig> {
        match current {
            Some(config) if config.field == field => match config.direction {
                SortDirection::Ascending => {
                    Some(SortConfig::new(field, SortDirection::Descending))
                }
                SortDirection::Descending => None,
            },
            _ => Some(SortConfig::new(field, SortDirection::Ascending)),
        }
    }
}

// ============================================================================
// PAGINATION STATE
// ============================================================================

/// Where the user is in the filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    /// 1-based page number.
    pub current_page: usize,
    pub items_per_page: usize,
    /// Length of the filtered result this pagination applies to.
    pub total_items: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        PaginationConfig {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            total_items: 0,
        }
    }

    /// Number of pages needed for `total_items` (at least 1).
    pub fn page_count(&self) -> usize {
        if self.total_items == 0 {
            1
        } else {
            (self.total_items + self.items_per_page - 1) / self.items_per_page
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_are_inactive() {
        let filters = ScreenFilters::default();
        assert!(!filters.is_active());
    }

    #[test]
    fn test_set_range_removes_inactive_entries() {
        let mut filters = ScreenFilters::default();
        filters.set_range(Field::Pbr, RangeFilter::new(Some(0.5), None));
        assert!(filters.is_active());

        filters.set_range(Field::Pbr, RangeFilter::default());
        assert!(filters.ranges.is_empty());
        assert!(!filters.is_active());
    }

    #[test]
    fn test_sort_cycle() {
        let first = SortConfig::toggled(None, Field::Pbr);
        assert_eq!(first, Some(SortConfig::new(Field::Pbr, SortDirection::Ascending)));

        let second = SortConfig::toggled(first, Field::Pbr);
        assert_eq!(
            second,
            Some(SortConfig::new(Field::Pbr, SortDirection::Descending))
        );

        let third = SortConfig::toggled(second, Field::Pbr);
        assert_eq!(third, None);
    }

    #[test]
    fn test_sort_cycle_switches_field_at_ascending() {
        let on_pbr = SortConfig::toggled(None, Field::Pbr);
        let on_roe = SortConfig::toggled(on_pbr, Field::Roe);
        assert_eq!(on_roe, Some(SortConfig::new(Field::Roe, SortDirection::Ascending)));
    }

    #[test]
    fn test_page_count() {
        let mut pagination = PaginationConfig::new();
        assert_eq!(pagination.page_count(), 1);

        pagination.total_items = 120;
        pagination.items_per_page = 50;
        assert_eq!(pagination.page_count(), 3);

        pagination.total_items = 100;
        assert_eq!(pagination.page_count(), 2);
    }

    #[test]
    fn test_filters_serialize_with_camel_case_keys() {
        let mut filters = ScreenFilters::default();
        filters.company_name = "トヨタ".to_string();
        filters.set_range(Field::MarketCap, RangeFilter::new(Some(100.0), None));

        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["companyName"], "トヨタ");
        assert!(json["ranges"]["marketCap"]["min"].is_number());
    }
}
