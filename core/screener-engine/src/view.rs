//! FILENAME: core/screener-engine/src/view.rs
//! Pagination Slicing - The window of the filtered result on display.
//!
//! Pure projection of the engine's visible indices: no state, no errors.
//! Out-of-range pages clamp to an empty slice rather than failing.

use std::ops::Range;

use crate::definition::PaginationConfig;

/// The half-open index range `[(page-1)*size, (page-1)*size + size)`
/// clamped to `[0, total_items]`. Pages below 1 are treated as page 1.
pub fn page_bounds(total_items: usize, current_page: usize, items_per_page: usize) -> Range<usize> {
    let page = current_page.max(1);
    let start = (page - 1).saturating_mul(items_per_page).min(total_items);
    let end = start.saturating_add(items_per_page).min(total_items);
    start..end
}

/// The slice of visible indices for the current page.
pub fn slice_page<'a>(visible: &'a [usize], pagination: &PaginationConfig) -> &'a [usize] {
    let bounds = page_bounds(
        visible.len(),
        pagination.current_page,
        pagination.items_per_page,
    );
    &visible[bounds]
}
