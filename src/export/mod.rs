//! Export module for fintrack
//!
//! Provides the JSON backup document used for both export and import.

pub mod json;

pub use json::{
    default_export_path, export_json, parse_import, read_import_file, write_export_file,
    LedgerExport, EXPORT_VERSION,
};
