//! Parse command: show how a file splits into rows

use std::path::Path;

use crate::display::format_rows;
use crate::error::{FolioError, FolioResult};
use crate::services::csv_parser;

/// Handle `folio parse`
pub fn handle_parse_command(file: &Path, lenient: bool, json: bool) -> FolioResult<()> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| FolioError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

    let parsed = if lenient {
        csv_parser::parse_lenient(&text)
    } else {
        csv_parser::parse(&text)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print!("{}", format_rows(&parsed.headers, &parsed.rows));
    }

    Ok(())
}
