//! CSV Export functionality
//!
//! Writes parsed rows back out as standard CSV, columns in header order.
//! Missing cells are written as empty fields.

use std::io::Write;

use crate::error::FolioResult;
use crate::models::Row;

/// Export rows to CSV
pub fn export_rows_csv<W: Write>(headers: &[String], rows: &[Row], writer: W) -> FolioResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(headers)?;
    for row in rows {
        csv_writer.write_record(headers.iter().map(|h| row.value(h)))?;
    }
    csv_writer.flush()?;

    Ok(())
}
