//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for KabuScreen integration tests.

use kabuscreen::ScreenerSession;
use model::{Field, StockRecord};

// ============================================================================
// RECORD BUILDER
// ============================================================================

/// Fluent builder for assembling test records field by field.
pub struct StockBuilder {
    record: StockRecord,
}

impl StockBuilder {
    pub fn new(name: &str, ticker: &str) -> Self {
        StockBuilder {
            record: StockRecord::new(name, ticker),
        }
    }

    pub fn text(mut self, field: Field, value: &str) -> Self {
        self.record.set_text(field, Some(value.to_string()));
        self
    }

    pub fn number(mut self, field: Field, value: f64) -> Self {
        self.record.set_number(field, Some(value));
        self
    }

    pub fn build(self) -> StockRecord {
        self.record
    }
}

// ============================================================================
// TEST DATA FIXTURES
// ============================================================================

/// A small listed-company universe with known screening outcomes.
///
/// Index reference:
///   0 トヨタ自動車                     7203 輸送用機器 プライム     愛知県 35.0兆 PBR 1.10 ROE  9.2%
///   1 ソニーグループ                   6758 電気機器   プライム     東京都 15.0兆 PBR 2.30 ROE 13.1%
///   2 任天堂                           7974 その他製品 プライム     京都府  9.0兆 PBR 3.10 ROE 15.2%
///   3 キーエンス                       6861 電気機器   プライム     大阪府 16.0兆 PBR 5.20 ROE 14.2%
///   4 三菱UFJフィナンシャル・グループ  8306 銀行業     プライム     東京都 12.0兆 PBR 0.85 ROE  7.8%
///   5 サイゼリヤ                       7581 小売業     スタンダード 埼玉県 2800億 PBR 2.10 ROE 10.1%
///   6 TDK                              6762 電気機器   プライム     東京都  8.0兆 PBR 1.90 ROE 10.5%
///   7 アルファ精機                     9999 (null)     スタンダード 北海道   null PBR null ROE  null
pub struct MarketFixture;

impl MarketFixture {
    pub fn records() -> Vec<StockRecord> {
        vec![
            StockBuilder::new("トヨタ自動車", "7203")
                .text(Field::Industry, "輸送用機器")
                .text(Field::Market, "プライム")
                .text(Field::Prefecture, "愛知県")
                .number(Field::MarketCap, 3.5e13)
                .number(Field::Pbr, 1.10)
                .number(Field::Roe, 0.092)
                .build(),
            StockBuilder::new("ソニーグループ", "6758")
                .text(Field::Industry, "電気機器")
                .text(Field::Market, "プライム")
                .text(Field::Prefecture, "東京都")
                .number(Field::MarketCap, 1.5e13)
                .number(Field::Pbr, 2.30)
                .number(Field::Roe, 0.131)
                .build(),
            StockBuilder::new("任天堂", "7974")
                .text(Field::Industry, "その他製品")
                .text(Field::Market, "プライム")
                .text(Field::Prefecture, "京都府")
                .number(Field::MarketCap, 9.0e12)
                .number(Field::Pbr, 3.10)
                .number(Field::Roe, 0.152)
                .build(),
            StockBuilder::new("キーエンス", "6861")
                .text(Field::Industry, "電気機器")
                .text(Field::Market, "プライム")
                .text(Field::Prefecture, "大阪府")
                .number(Field::MarketCap, 1.6e13)
                .number(Field::Pbr, 5.20)
                .number(Field::Roe, 0.142)
                .build(),
            StockBuilder::new("三菱UFJフィナンシャル・グループ", "8306")
                .text(Field::Industry, "銀行業")
                .text(Field::Market, "プライム")
                .text(Field::Prefecture, "東京都")
                .number(Field::MarketCap, 1.2e13)
                .number(Field::Pbr, 0.85)
                .number(Field::Roe, 0.078)
                .build(),
            StockBuilder::new("サイゼリヤ", "7581")
                .text(Field::Industry, "小売業")
                .text(Field::Market, "スタンダード")
                .text(Field::Prefecture, "埼玉県")
                .number(Field::MarketCap, 2.8e11)
                .number(Field::Pbr, 2.10)
                .number(Field::Roe, 0.101)
                .build(),
            StockBuilder::new("TDK", "6762")
                .text(Field::Industry, "電気機器")
                .text(Field::Market, "プライム")
                .text(Field::Prefecture, "東京都")
                .number(Field::MarketCap, 8.0e12)
                .number(Field::Pbr, 1.90)
                .number(Field::Roe, 0.105)
                .build(),
            StockBuilder::new("アルファ精機", "9999")
                .text(Field::Market, "スタンダード")
                .text(Field::Prefecture, "北海道")
                .build(),
        ]
    }

    /// Session over the fixture universe, no filters active.
    pub fn session() -> ScreenerSession {
        ScreenerSession::new(Self::records())
    }
}

/// A uniform universe for pagination tests: `count` records named 会社000,
/// 会社001, ... with tickers counting up from 1000.
pub fn numbered_records(count: usize) -> Vec<StockRecord> {
    (0..count)
        .map(|i| StockRecord::new(format!("会社{:03}", i), format!("{}", 1000 + i)))
        .collect()
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert the current page lists exactly these companies, in order.
pub fn assert_page_names(session: &ScreenerSession, expected: &[&str]) {
    let view = session.view();
    let names: Vec<&str> = view
        .records
        .iter()
        .map(|record| record.company_name.as_str())
        .collect();
    assert_eq!(names, expected, "visible page mismatch");
}

/// Assert the current page lists exactly these tickers, in order.
pub fn assert_page_tickers(session: &ScreenerSession, expected: &[&str]) {
    let view = session.view();
    let tickers: Vec<&str> = view
        .records
        .iter()
        .map(|record| record.ticker_code.as_str())
        .collect();
    assert_eq!(tickers, expected, "visible page mismatch");
}
