//! FILENAME: core/model/src/number_format.rs
//! PURPOSE: Display formatting for record values.
//! CONTEXT: This module converts raw record values to display strings based
//! on the field's semantic kind. Raw yen become hundred-million yen (億円),
//! fractions become percentages, ratios keep two decimals. Null values
//! render as a dash.

use crate::field::FieldKind;
use crate::record::FieldValue;

/// Placeholder shown for absent values.
pub const NULL_DISPLAY: &str = "-";

/// Format any record value for display.
pub fn format_value(value: &FieldValue<'_>, kind: FieldKind) -> String {
    match value {
        FieldValue::Text(None) | FieldValue::Number(None) => NULL_DISPLAY.to_string(),
        FieldValue::Text(Some(s)) => (*s).to_string(),
        FieldValue::Number(Some(n)) => format_number(*n, kind),
    }
}

/// Format a raw numeric value according to the field kind.
pub fn format_number(value: f64, kind: FieldKind) -> String {
    match kind {
        FieldKind::Currency => format_currency(value),
        FieldKind::Percentage => format_percentage(value, 2),
        FieldKind::Ratio => format!("{:.2}", value),
        // Numeric value in a text column cannot happen through the record
        // accessors; fall back to a bare print.
        FieldKind::Text => format!("{}", value),
    }
}

/// Format a yen amount in whole 億円 with thousands separators.
pub fn format_currency(value: f64) -> String {
    let oku = value / 1e8;
    format!("{}億円", add_thousands_separator(&format!("{:.0}", oku)))
}

/// Format a fractional value as a percentage.
pub fn format_percentage(value: f64, decimal_places: u8) -> String {
    let percentage = value * 100.0;
    format!("{:.prec$}%", percentage, prec = decimal_places as usize)
}

/// Add thousands separators to a numeric string.
pub fn add_thousands_separator(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}
