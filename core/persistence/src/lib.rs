//! FILENAME: core/persistence/src/lib.rs
//! KabuScreen Persistence Module
//!
//! Handles loading and saving datasets as CSV with Japanese column headers,
//! and the `files.json` manifest that points at the newest snapshot.

mod csv_reader;
mod csv_writer;
mod error;
mod manifest;

pub use csv_reader::{load_records, read_records};
pub use csv_writer::{combine_datasets, save_records, write_records};
pub use error::PersistenceError;
pub use manifest::{build_manifest, load_manifest, save_manifest, DatasetFile, DatasetManifest};
