//! FILENAME: core/model/src/field.rs
//! Dataset Columns - The closed set of fields a record carries.
//!
//! Every column of the source CSV is enumerated here together with its
//! semantic kind, its Japanese header, and the fixed scale factor between
//! user-entered bounds and the raw stored value. Consumers dispatch on
//! `FieldKind` instead of matching on header substrings.

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD KIND
// ============================================================================

/// Semantic kind of a field, driving input scaling and display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain text (names, codes, classifications).
    Text,
    /// Yen amount; entered and displayed in hundred-million yen (億円).
    Currency,
    /// Stored as a fraction (0.05 = 5%); entered and displayed in percent.
    Percentage,
    /// Dimensionless multiple (PBR, PER); no rescaling.
    Ratio,
}

// ============================================================================
// FIELD ENUMERATION
// ============================================================================

/// One column of the dataset, in source CSV order.
///
/// The serde names double as share-link query keys, so they follow the
/// filter-state naming of the source application (負債 appears there as
/// `totalLiabilities` and 総負債 as `totalDebt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CompanyName,
    TickerCode,
    Industry,
    Market,
    FiscalMonth,
    AccountingStandard,
    Prefecture,
    MarketCap,
    Pbr,
    Revenue,
    OperatingProfit,
    OperatingMargin,
    NetProfit,
    NetMargin,
    Roe,
    EquityRatio,
    #[serde(rename = "forwardPE")]
    ForwardPe,
    TotalLiabilities,
    CurrentLiabilities,
    CurrentAssets,
    TotalDebt,
    Cash,
    Investments,
    NetCash,
    NetCashRatio,
}

impl Field {
    /// All fields in source CSV column order.
    pub const ALL: [Field; 25] = [
        Field::CompanyName,
        Field::TickerCode,
        Field::Industry,
        Field::Market,
        Field::FiscalMonth,
        Field::AccountingStandard,
        Field::Prefecture,
        Field::MarketCap,
        Field::Pbr,
        Field::Revenue,
        Field::OperatingProfit,
        Field::OperatingMargin,
        Field::NetProfit,
        Field::NetMargin,
        Field::Roe,
        Field::EquityRatio,
        Field::ForwardPe,
        Field::TotalLiabilities,
        Field::CurrentLiabilities,
        Field::CurrentAssets,
        Field::TotalDebt,
        Field::Cash,
        Field::Investments,
        Field::NetCash,
        Field::NetCashRatio,
    ];

    /// The classification fields that produce filter facets.
    pub const FACETED: [Field; 3] = [Field::Industry, Field::Market, Field::Prefecture];

    /// The Japanese column header as it appears in the source CSV.
    pub fn label(self) -> &'static str {
        match self {
            Field::CompanyName => "会社名",
            Field::TickerCode => "銘柄コード",
            Field::Industry => "業種",
            Field::Market => "優先市場",
            Field::FiscalMonth => "決算月",
            Field::AccountingStandard => "会計基準",
            Field::Prefecture => "都道府県",
            Field::MarketCap => "時価総額",
            Field::Pbr => "PBR",
            Field::Revenue => "売上高",
            Field::OperatingProfit => "営業利益",
            Field::OperatingMargin => "営業利益率",
            Field::NetProfit => "当期純利益",
            Field::NetMargin => "純利益率",
            Field::Roe => "ROE",
            Field::EquityRatio => "自己資本比率",
            Field::ForwardPe => "PER(会予)",
            Field::TotalLiabilities => "負債",
            Field::CurrentLiabilities => "流動負債",
            Field::CurrentAssets => "流動資産",
            Field::TotalDebt => "総負債",
            Field::Cash => "現金及び現金同等物",
            Field::Investments => "投資有価証券",
            Field::NetCash => "ネットキャッシュ（流動資産-負債）",
            Field::NetCashRatio => "ネットキャッシュ比率",
        }
    }

    /// Semantic kind, the static replacement for header-substring matching.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::CompanyName
            | Field::TickerCode
            | Field::Industry
            | Field::Market
            | Field::FiscalMonth
            | Field::AccountingStandard
            | Field::Prefecture => FieldKind::Text,
            Field::MarketCap
            | Field::Revenue
            | Field::OperatingProfit
            | Field::NetProfit
            | Field::TotalLiabilities
            | Field::CurrentLiabilities
            | Field::CurrentAssets
            | Field::TotalDebt
            | Field::Cash
            | Field::Investments
            | Field::NetCash => FieldKind::Currency,
            Field::OperatingMargin
            | Field::NetMargin
            | Field::Roe
            | Field::EquityRatio
            | Field::NetCashRatio => FieldKind::Percentage,
            Field::Pbr | Field::ForwardPe => FieldKind::Ratio,
        }
    }

    /// Factor applied to a user-entered bound before comparing it with the
    /// raw record value: 億円 input over yen storage, percent input over
    /// fractional storage.
    pub fn input_scale(self) -> f64 {
        match self.kind() {
            FieldKind::Currency => 1e8,
            FieldKind::Percentage => 0.01,
            FieldKind::Text | FieldKind::Ratio => 1.0,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.kind() != FieldKind::Text
    }

    /// The camelCase key used in share links and CLI field arguments.
    /// Must agree with the serde rename of the variant.
    pub fn query_key(self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::TickerCode => "tickerCode",
            Field::Industry => "industry",
            Field::Market => "market",
            Field::FiscalMonth => "fiscalMonth",
            Field::AccountingStandard => "accountingStandard",
            Field::Prefecture => "prefecture",
            Field::MarketCap => "marketCap",
            Field::Pbr => "pbr",
            Field::Revenue => "revenue",
            Field::OperatingProfit => "operatingProfit",
            Field::OperatingMargin => "operatingMargin",
            Field::NetProfit => "netProfit",
            Field::NetMargin => "netMargin",
            Field::Roe => "roe",
            Field::EquityRatio => "equityRatio",
            Field::ForwardPe => "forwardPE",
            Field::TotalLiabilities => "totalLiabilities",
            Field::CurrentLiabilities => "currentLiabilities",
            Field::CurrentAssets => "currentAssets",
            Field::TotalDebt => "totalDebt",
            Field::Cash => "cash",
            Field::Investments => "investments",
            Field::NetCash => "netCash",
            Field::NetCashRatio => "netCashRatio",
        }
    }

    /// Inverse of `query_key`. Unknown keys yield `None`.
    pub fn from_query_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.query_key() == key)
    }

    /// Inverse of `label`. Unknown headers yield `None`.
    pub fn from_label(label: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keys_match_serde_names() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.query_key()));
        }
    }

    #[test]
    fn test_query_key_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_query_key(field.query_key()), Some(field));
        }
        assert_eq!(Field::from_query_key("unknown"), None);
    }

    #[test]
    fn test_label_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_label(field.label()), Some(field));
        }
    }

    #[test]
    fn test_input_scale_per_kind() {
        assert_eq!(Field::MarketCap.input_scale(), 1e8);
        assert_eq!(Field::Roe.input_scale(), 0.01);
        assert_eq!(Field::Pbr.input_scale(), 1.0);
        assert_eq!(Field::CompanyName.input_scale(), 1.0);
    }

    #[test]
    fn test_kind_coverage() {
        let numeric = Field::ALL.iter().filter(|f| f.is_numeric()).count();
        assert_eq!(numeric, 18);
        assert_eq!(Field::ALL.len() - numeric, 7);
    }
}
