//! FILENAME: tests/test_session.rs
//! Integration tests for session state: page resets, facets and summary.

mod common;

use common::{numbered_records, MarketFixture};
use kabuscreen::ScreenerSession;
use model::{Field, StockRecord};
use screener_engine::FacetValue;

// ============================================================================
// PAGE RESET TESTS
// ============================================================================

#[test]
fn test_filter_change_resets_to_the_first_page() {
    let mut session = ScreenerSession::new(numbered_records(120));
    session.set_page(3);
    assert_eq!(session.pagination().current_page, 3);

    session.set_company_name("会社");
    assert_eq!(session.pagination().current_page, 1);
}

#[test]
fn test_selection_change_resets_to_the_first_page() {
    let mut session = ScreenerSession::new(numbered_records(120));
    session.set_page(2);
    session.toggle_industry("電気機器");
    assert_eq!(session.pagination().current_page, 1);
}

#[test]
fn test_range_change_resets_to_the_first_page() {
    let mut session = ScreenerSession::new(numbered_records(120));
    session.set_page(2);
    session.set_range(Field::Pbr, Some(1.0), None);
    assert_eq!(session.pagination().current_page, 1);
}

#[test]
fn test_page_size_change_resets_to_the_first_page() {
    let mut session = ScreenerSession::new(numbered_records(120));
    session.set_page(2);
    session.set_page_size(100);
    assert_eq!(session.pagination().current_page, 1);
    assert_eq!(session.pagination().items_per_page, 100);
}

// ============================================================================
// SELECTION TOGGLE TESTS
// ============================================================================

#[test]
fn test_toggling_a_selection_adds_then_removes() {
    let mut session = MarketFixture::session();
    session.toggle_industry("電気機器");
    assert_eq!(session.visible_count(), 3);
    session.toggle_industry("銀行業");
    assert_eq!(session.visible_count(), 4);
    session.toggle_industry("電気機器");
    assert_eq!(session.visible_count(), 1);
    session.toggle_industry("銀行業");
    assert_eq!(session.visible_count(), 8);
}

#[test]
fn test_market_and_prefecture_toggles() {
    let mut session = MarketFixture::session();
    session.toggle_market("プライム");
    assert_eq!(session.visible_count(), 6);
    session.toggle_prefecture("東京都");
    assert_eq!(session.visible_count(), 3);
    session.toggle_market("プライム");
    session.toggle_prefecture("東京都");
    assert_eq!(session.visible_count(), 8);
}

// ============================================================================
// FACET TESTS
// ============================================================================

fn facet_count(values: &[FacetValue], value: &str) -> Option<u32> {
    values.iter().find(|f| f.value == value).map(|f| f.count)
}

#[test]
fn test_facets_cover_the_full_universe() {
    let session = MarketFixture::session();
    let facets = session.facets();

    // The record without an industry contributes no facet value.
    assert_eq!(facets.industries.len(), 5);
    assert_eq!(facet_count(&facets.industries, "電気機器"), Some(3));
    assert_eq!(facet_count(&facets.industries, "銀行業"), Some(1));

    assert_eq!(facets.markets.len(), 2);
    assert_eq!(facet_count(&facets.markets, "プライム"), Some(6));
    assert_eq!(facet_count(&facets.markets, "スタンダード"), Some(2));

    assert_eq!(facets.prefectures.len(), 6);
    assert_eq!(facet_count(&facets.prefectures, "東京都"), Some(3));
}

#[test]
fn test_facet_values_are_sorted_for_display() {
    let session = MarketFixture::session();
    let markets: Vec<&str> = session
        .facets()
        .markets
        .iter()
        .map(|f| f.value.as_str())
        .collect();
    assert_eq!(markets, vec!["スタンダード", "プライム"]);
}

#[test]
fn test_facets_ignore_active_filters() {
    let mut session = MarketFixture::session();
    session.set_industries(vec!["銀行業".to_string()]);
    assert_eq!(session.visible_count(), 1);
    // Facets still enumerate every choice so the selection can be widened.
    assert_eq!(session.facets().industries.len(), 5);
}

// ============================================================================
// SUMMARY TESTS
// ============================================================================

#[test]
fn test_summary_averages_cover_the_full_universe() {
    let mut session = MarketFixture::session();
    session.set_range(Field::Roe, Some(14.0), None);

    let view = session.view();
    assert_eq!(view.summary.total_count, 8);
    assert_eq!(view.summary.filtered_count, 2);

    // Averages ignore the filter but skip the all-null record.
    let expected_pbr = (1.10 + 2.30 + 3.10 + 5.20 + 0.85 + 2.10 + 1.90) / 7.0;
    let expected_roe = (0.092 + 0.131 + 0.152 + 0.142 + 0.078 + 0.101 + 0.105) / 7.0;
    let expected_cap = (3.5e13 + 1.5e13 + 9.0e12 + 1.6e13 + 1.2e13 + 2.8e11 + 8.0e12) / 7.0;
    assert!((view.summary.avg_pbr - expected_pbr).abs() < 1e-9);
    assert!((view.summary.avg_roe - expected_roe).abs() < 1e-9);
    assert!((view.summary.avg_market_cap - expected_cap).abs() < 1.0);
}

#[test]
fn test_summary_is_zero_when_no_record_reports_a_metric() {
    let session = ScreenerSession::new(vec![
        StockRecord::new("アルファ", "0001"),
        StockRecord::new("ベータ", "0002"),
    ]);
    let view = session.view();
    assert_eq!(view.summary.avg_market_cap, 0.0);
    assert_eq!(view.summary.avg_pbr, 0.0);
    assert_eq!(view.summary.avg_roe, 0.0);
}

// ============================================================================
// VIEW CONSISTENCY TESTS
// ============================================================================

#[test]
fn test_view_pagination_tracks_the_filtered_total() {
    let mut session = MarketFixture::session();
    session.set_industries(vec!["電気機器".to_string()]);
    let view = session.view();
    assert_eq!(view.pagination.total_items, 3);
    assert_eq!(view.records.len(), 3);
    assert_eq!(view.summary.filtered_count, 3);
}

#[test]
fn test_set_filters_replaces_the_whole_filter_state() {
    let mut session = MarketFixture::session();
    session.set_company_name("トヨタ");
    assert_eq!(session.visible_count(), 1);

    session.set_filters(Default::default());
    assert_eq!(session.visible_count(), 8);
    assert!(!session.filters().is_active());
}
