//! FILENAME: core/model/src/lib.rs
//! PURPOSE: Main library entry point for the dataset model.
//! CONTEXT: Re-exports the record shape, field enumeration, and display
//! formatting for use by other crates.

pub mod field;
pub mod number_format;
pub mod record;

// Re-export commonly used types at the crate root
pub use field::{Field, FieldKind};
pub use number_format::{
    add_thousands_separator, format_currency, format_number, format_percentage, format_value,
    NULL_DISPLAY,
};
pub use record::{FieldValue, StockRecord};
