//! Export module for folio-dash
//!
//! - CSV: parsed rows in header order (spreadsheet-compatible)
//! - JSON: rows, total and metadata (machine-readable)
//! - YAML: the same structure, human-readable
//! - Original: byte-for-byte copy of an uploaded file

pub mod csv;
pub mod json;
pub mod original;
pub mod yaml;

pub use self::csv::export_rows_csv;
pub use json::{export_rows_json, RowsExport, EXPORT_SCHEMA_VERSION};
pub use original::save_copy;
pub use yaml::export_rows_yaml;
