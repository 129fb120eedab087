//! CLI command for exporting parsed rows
//!
//! Reads a user file the same way `upload` does and writes its rows in the
//! chosen format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use super::parse_source;
use crate::config::{FolioPaths, Settings};
use crate::error::{FolioError, FolioResult};
use crate::export::{export_rows_csv, export_rows_json, export_rows_yaml, RowsExport};
use crate::services::DataLoader;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (rows only)
    Csv,
    /// JSON format (rows, total and metadata)
    Json,
    /// YAML format (rows, total and metadata, human-readable)
    Yaml,
}

/// Handle `folio export`
pub async fn handle_export_command(
    paths: &FolioPaths,
    settings: &Settings,
    source: &str,
    file: &Path,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> FolioResult<()> {
    let source = parse_source(source)?;

    let loader = DataLoader::from_settings(paths.clone(), settings);
    let result = loader.load_from_user_file(file, source).await?;

    let out = File::create(&output).map_err(|e| {
        FolioError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(out);

    match format {
        ExportFormat::Csv => export_rows_csv(&result.headers, &result.rows, &mut writer)?,
        ExportFormat::Json => {
            let export = RowsExport::from_result(source, &result)?;
            export_rows_json(&export, &mut writer, pretty)?;
        }
        ExportFormat::Yaml => {
            let export = RowsExport::from_result(source, &result)?;
            export_rows_yaml(&export, &mut writer)?;
        }
    }
    writer
        .flush()
        .map_err(|e| FolioError::Export(e.to_string()))?;

    println!(
        "Exported {} row(s) from {} to {}",
        result.rows.len(),
        source,
        output.display()
    );
    Ok(())
}
