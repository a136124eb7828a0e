//! FILENAME: core/model/src/record.rs
//! PURPOSE: Defines one company's row of financial data.
//! CONTEXT: This file contains the `StockRecord` struct and the `FieldValue`
//! enum used to read any column through a single dispatch point. Records are
//! immutable once loaded; every consumer works on shared references.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A borrowed view of one column of a record.
/// `Text(None)` and `Number(None)` both mean the cell was empty in the
/// source; the distinction only carries the column's type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
}

impl<'a> FieldValue<'a> {
    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Text(v) => v.is_none(),
            FieldValue::Number(v) => v.is_none(),
        }
    }
}

/// One row of the dataset. Identity fields are always present; everything
/// else is optional because not every company reports every metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub company_name: String,
    pub ticker_code: String,
    pub industry: Option<String>,
    pub market: Option<String>,
    pub fiscal_month: Option<String>,
    pub accounting_standard: Option<String>,
    pub prefecture: Option<String>,
    /// Yen.
    pub market_cap: Option<f64>,
    pub pbr: Option<f64>,
    /// Yen.
    pub revenue: Option<f64>,
    /// Yen.
    pub operating_profit: Option<f64>,
    /// Fraction (0.05 = 5%).
    pub operating_margin: Option<f64>,
    /// Yen.
    pub net_profit: Option<f64>,
    /// Fraction.
    pub net_margin: Option<f64>,
    /// Fraction.
    pub roe: Option<f64>,
    /// Fraction.
    pub equity_ratio: Option<f64>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    /// Yen.
    pub total_liabilities: Option<f64>,
    /// Yen.
    pub current_liabilities: Option<f64>,
    /// Yen.
    pub current_assets: Option<f64>,
    /// Yen.
    pub total_debt: Option<f64>,
    /// Yen.
    pub cash: Option<f64>,
    /// Yen.
    pub investments: Option<f64>,
    /// Yen.
    pub net_cash: Option<f64>,
    /// Fraction.
    pub net_cash_ratio: Option<f64>,
}

impl StockRecord {
    /// An empty record carrying only the identity fields.
    pub fn new(company_name: impl Into<String>, ticker_code: impl Into<String>) -> Self {
        StockRecord {
            company_name: company_name.into(),
            ticker_code: ticker_code.into(),
            industry: None,
            market: None,
            fiscal_month: None,
            accounting_standard: None,
            prefecture: None,
            market_cap: None,
            pbr: None,
            revenue: None,
            operating_profit: None,
            operating_margin: None,
            net_profit: None,
            net_margin: None,
            roe: None,
            equity_ratio: None,
            forward_pe: None,
            total_liabilities: None,
            current_liabilities: None,
            current_assets: None,
            total_debt: None,
            cash: None,
            investments: None,
            net_cash: None,
            net_cash_ratio: None,
        }
    }

    /// Reads any column of the record by field.
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::CompanyName => FieldValue::Text(Some(self.company_name.as_str())),
            Field::TickerCode => FieldValue::Text(Some(self.ticker_code.as_str())),
            Field::Industry => FieldValue::Text(self.industry.as_deref()),
            Field::Market => FieldValue::Text(self.market.as_deref()),
            Field::FiscalMonth => FieldValue::Text(self.fiscal_month.as_deref()),
            Field::AccountingStandard => FieldValue::Text(self.accounting_standard.as_deref()),
            Field::Prefecture => FieldValue::Text(self.prefecture.as_deref()),
            Field::MarketCap => FieldValue::Number(self.market_cap),
            Field::Pbr => FieldValue::Number(self.pbr),
            Field::Revenue => FieldValue::Number(self.revenue),
            Field::OperatingProfit => FieldValue::Number(self.operating_profit),
            Field::OperatingMargin => FieldValue::Number(self.operating_margin),
            Field::NetProfit => FieldValue::Number(self.net_profit),
            Field::NetMargin => FieldValue::Number(self.net_margin),
            Field::Roe => FieldValue::Number(self.roe),
            Field::EquityRatio => FieldValue::Number(self.equity_ratio),
            Field::ForwardPe => FieldValue::Number(self.forward_pe),
            Field::TotalLiabilities => FieldValue::Number(self.total_liabilities),
            Field::CurrentLiabilities => FieldValue::Number(self.current_liabilities),
            Field::CurrentAssets => FieldValue::Number(self.current_assets),
            Field::TotalDebt => FieldValue::Number(self.total_debt),
            Field::Cash => FieldValue::Number(self.cash),
            Field::Investments => FieldValue::Number(self.investments),
            Field::NetCash => FieldValue::Number(self.net_cash),
            Field::NetCashRatio => FieldValue::Number(self.net_cash_ratio),
        }
    }

    /// Numeric read; `None` for text columns and for empty numeric cells.
    pub fn numeric_value(&self, field: Field) -> Option<f64> {
        match self.value(field) {
            FieldValue::Number(v) => v,
            FieldValue::Text(_) => None,
        }
    }

    /// Text read; `None` for numeric columns and for empty text cells.
    pub fn text_value(&self, field: Field) -> Option<&str> {
        match self.value(field) {
            FieldValue::Text(v) => v,
            FieldValue::Number(_) => None,
        }
    }

    /// Writes any column of the record by field. Numeric text is ignored for
    /// text fields and vice versa; identity fields treat `None` as empty.
    pub fn set_text(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::CompanyName => self.company_name = value.unwrap_or_default(),
            Field::TickerCode => self.ticker_code = value.unwrap_or_default(),
            Field::Industry => self.industry = value,
            Field::Market => self.market = value,
            Field::FiscalMonth => self.fiscal_month = value,
            Field::AccountingStandard => self.accounting_standard = value,
            Field::Prefecture => self.prefecture = value,
            _ => {}
        }
    }

    pub fn set_number(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::MarketCap => self.market_cap = value,
            Field::Pbr => self.pbr = value,
            Field::Revenue => self.revenue = value,
            Field::OperatingProfit => self.operating_profit = value,
            Field::OperatingMargin => self.operating_margin = value,
            Field::NetProfit => self.net_profit = value,
            Field::NetMargin => self.net_margin = value,
            Field::Roe => self.roe = value,
            Field::EquityRatio => self.equity_ratio = value,
            Field::ForwardPe => self.forward_pe = value,
            Field::TotalLiabilities => self.total_liabilities = value,
            Field::CurrentLiabilities => self.current_liabilities = value,
            Field::CurrentAssets => self.current_assets = value,
            Field::TotalDebt => self.total_debt = value,
            Field::Cash => self.cash = value,
            Field::Investments => self.investments = value,
            Field::NetCash => self.net_cash = value,
            Field::NetCashRatio => self.net_cash_ratio = value,
            _ => {}
        }
    }
}
