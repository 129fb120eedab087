//! JSON Export functionality
//!
//! Exports one loaded source, with its total and a small metadata envelope.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::models::{LoadResult, Row, Source};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A loaded source ready for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowsExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Which export the rows came from
    pub source: Source,

    /// Aggregated total for the source
    pub total: f64,

    /// Header names in file order
    pub headers: Vec<String>,

    /// Parsed rows
    pub rows: Vec<Row>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of rows
    pub row_count: usize,

    /// Number of columns
    pub column_count: usize,
}

impl RowsExport {
    /// Build an export from a successful load
    pub fn from_result(source: Source, result: &LoadResult) -> FolioResult<Self> {
        if !result.success {
            return Err(FolioError::Export(format!(
                "Cannot export a failed load: {}",
                result.error.as_deref().unwrap_or("unknown error")
            )));
        }

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source,
            total: result.total,
            headers: result.headers.clone(),
            rows: result.rows.clone(),
            metadata: ExportMetadata {
                row_count: result.rows.len(),
                column_count: result.headers.len(),
            },
        })
    }
}

/// Export a loaded source to JSON
pub fn export_rows_json<W: Write>(
    export: &RowsExport,
    writer: &mut W,
    pretty: bool,
) -> FolioResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| FolioError::Export(e.to_string()))?;

    Ok(())
}
