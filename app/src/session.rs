//! FILENAME: app/src/session.rs
//! PURPOSE: Owns one loaded dataset and the screen state applied to it.
//! CONTEXT: The engine itself is stateless; this is the stateful shell that
//! applies each discrete update, re-runs the engine eagerly, and keeps the
//! pagination bookkeeping consistent with the filtered result.

use model::{Field, StockRecord};
use screener_engine::{
    apply, collect_facets, slice_page, summarize, Facets, PaginationConfig, RangeFilter,
    ScreenFilters, SortConfig, SummarySnapshot, ITEMS_PER_PAGE_OPTIONS,
};

// ============================================================================
// SCREEN VIEW
// ============================================================================

/// One renderable page of the screen: the page's records in display order,
/// the pagination state they were sliced with, and the headline numbers.
pub struct ScreenView<'a> {
    pub records: Vec<&'a StockRecord>,
    pub pagination: PaginationConfig,
    pub summary: SummarySnapshot,
    pub facets: &'a Facets,
}

// ============================================================================
// SCREENER SESSION
// ============================================================================

/// The record list never changes after load; only the screen state does.
/// Facets are computed once at load for the same reason.
pub struct ScreenerSession {
    records: Vec<StockRecord>,
    facets: Facets,
    filters: ScreenFilters,
    sort: Option<SortConfig>,
    pagination: PaginationConfig,
    visible: Vec<usize>,
}

impl ScreenerSession {
    pub fn new(records: Vec<StockRecord>) -> Self {
        let facets = collect_facets(&records);
        let mut session = ScreenerSession {
            records,
            facets,
            filters: ScreenFilters::default(),
            sort: None,
            pagination: PaginationConfig::new(),
            visible: Vec::new(),
        };
        session.recompute();
        crate::log_info!("SYS", "Session ready: {} records", session.records.len());
        session
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filters(&self) -> &ScreenFilters {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub fn pagination(&self) -> PaginationConfig {
        self.pagination
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The current page plus the headline numbers, ready to render.
    pub fn view(&self) -> ScreenView<'_> {
        let page = slice_page(&self.visible, &self.pagination);
        ScreenView {
            records: page.iter().map(|&index| &self.records[index]).collect(),
            pagination: self.pagination,
            summary: summarize(&self.records, self.visible.len()),
            facets: &self.facets,
        }
    }

    // ========================================================================
    // FILTER UPDATES (each one resets the page)
    // ========================================================================

    pub fn set_company_name(&mut self, pattern: impl Into<String>) {
        self.filters.company_name = pattern.into();
        self.after_filter_change();
    }

    pub fn set_industries(&mut self, values: impl IntoIterator<Item = String>) {
        self.filters.industries = values.into_iter().collect();
        self.after_filter_change();
    }

    pub fn toggle_industry(&mut self, value: &str) {
        if !self.filters.industries.remove(value) {
            self.filters.industries.insert(value.to_string());
        }
        self.after_filter_change();
    }

    pub fn set_markets(&mut self, values: impl IntoIterator<Item = String>) {
        self.filters.markets = values.into_iter().collect();
        self.after_filter_change();
    }

    pub fn toggle_market(&mut self, value: &str) {
        if !self.filters.markets.remove(value) {
            self.filters.markets.insert(value.to_string());
        }
        self.after_filter_change();
    }

    pub fn set_prefectures(&mut self, values: impl IntoIterator<Item = String>) {
        self.filters.prefectures = values.into_iter().collect();
        self.after_filter_change();
    }

    pub fn toggle_prefecture(&mut self, value: &str) {
        if !self.filters.prefectures.remove(value) {
            self.filters.prefectures.insert(value.to_string());
        }
        self.after_filter_change();
    }

    /// Bounds arrive in user units (see `Field::input_scale`). Passing two
    /// `None` bounds removes the range.
    pub fn set_range(&mut self, field: Field, min: Option<f64>, max: Option<f64>) {
        self.filters.set_range(field, RangeFilter::new(min, max));
        self.after_filter_change();
    }

    /// Install a whole filter state at once, e.g. one decoded from a share
    /// link.
    pub fn set_filters(&mut self, filters: ScreenFilters) {
        self.filters = filters;
        self.after_filter_change();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.after_filter_change();
    }

    // ========================================================================
    // SORT & PAGINATION
    // ========================================================================

    /// Advance the sort cycle for `field` (ascending, descending, off).
    /// Sorting reorders the same result set, so the page is kept.
    pub fn toggle_sort(&mut self, field: Field) {
        self.sort = SortConfig::toggled(self.sort, field);
        self.recompute();
    }

    /// Restore a sort state directly, bypassing the cycle.
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
        self.recompute();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.current_page = page.max(1);
    }

    /// Sizes outside `ITEMS_PER_PAGE_OPTIONS` are rejected.
    pub fn set_page_size(&mut self, size: usize) {
        if !ITEMS_PER_PAGE_OPTIONS.contains(&size) {
            crate::log_warn!("SCREEN", "Rejected page size {}", size);
            return;
        }
        self.pagination.items_per_page = size;
        self.pagination.current_page = 1;
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn after_filter_change(&mut self) {
        self.pagination.current_page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = apply(&self.records, &self.filters, self.sort);
        self.pagination.total_items = self.visible.len();
        crate::log_debug!(
            "SCREEN",
            "Recomputed: {} of {} records visible",
            self.visible.len(),
            self.records.len()
        );
    }
}
