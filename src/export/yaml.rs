//! YAML Export functionality

use std::io::Write;

use crate::error::{FolioError, FolioResult};
use crate::export::json::RowsExport;

/// Export a loaded source to YAML, with a short header comment
pub fn export_rows_yaml<W: Write>(export: &RowsExport, writer: &mut W) -> FolioResult<()> {
    writeln!(writer, "# folio-dash {} export", export.source)
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| FolioError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;
    use crate::services::loader::analyze;

    #[test]
    fn test_yaml_export() {
        let result = analyze(
            Source::MutualFund,
            "Type,Market Value\nMutual Fund,\"1,000\"\n",
        );
        let export = RowsExport::from_result(Source::MutualFund, &result).unwrap();

        let mut buf = Vec::new();
        export_rows_yaml(&export, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# folio-dash Mutual Funds export"));
        let body: RowsExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(body.total, 1000.0);
        assert_eq!(body.rows[0].value("Market Value"), "1,000");
    }
}
