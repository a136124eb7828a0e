//! FILENAME: core/screener-engine/src/lib.rs
//! Screening subsystem for KabuScreen.
//!
//! This crate turns a loaded record list plus a serializable screen state
//! into the row set the user actually sees. It depends on `model` only for
//! shared types (Field, StockRecord, FieldValue).
//!
//! Layers:
//! - `definition`: Serializable filter/sort/pagination state (what the screen IS)
//! - `engine`: Filter and sort evaluation (HOW we compute the visible rows)
//! - `facets`: Distinct classification values with counts (what is selectable)
//! - `summary`: Dataset-wide averages (the headline numbers)
//! - `view`: Page slicing over the visible rows (WHAT we display)
//! - `share`: Query-string codec for the filter state (how screens travel)

pub mod definition;
pub mod engine;
pub mod facets;
pub mod share;
pub mod summary;
pub mod view;

pub use definition::*;
pub use engine::{apply, compare_records};
pub use facets::{collect_facets, unique_values, FacetValue, Facets};
pub use share::{decode_filters, encode_filters};
pub use summary::{summarize, SummarySnapshot};
pub use view::{page_bounds, slice_page};
