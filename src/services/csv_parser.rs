//! CSV parsing for the two dashboard sources
//!
//! Two independent entry points, one per export format:
//!
//! - [`parse`]: quote-aware. Double quotes toggle a "quoted" state in which
//!   commas are kept inside the field. A quote directly after a backslash is
//!   kept literally and does not toggle; the backslash itself is kept too.
//!   This is narrower than RFC 4180 (no `""` escapes) and intentionally so.
//! - [`parse_lenient`]: splits on `\n` and on every comma, no quoting at all.
//!
//! Neither mode fails on malformed lines.

use tracing::debug;

use crate::models::{ParsedCsv, Row};

/// Parse quote-aware CSV text into headers and rows
///
/// The text is trimmed, then split on `\r\n` or `\n`. Fewer than two lines
/// (no header plus at least one data line) yields an empty result. Headers and
/// values are trimmed; a line with fewer fields than headers gets empty
/// strings for the missing columns.
pub fn parse(text: &str) -> ParsedCsv {
    let lines: Vec<&str> = text
        .trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() < 2 {
        return ParsedCsv::empty();
    }

    let headers: Vec<String> = split_quoted_line(lines[0])
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let rows: Vec<Row> = lines[1..]
        .iter()
        .map(|line| {
            let values = split_quoted_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).map(|v| v.trim()).unwrap_or("");
                    (header.clone(), value.to_string())
                })
                .collect::<Row>()
        })
        .collect();

    debug!(headers = headers.len(), rows = rows.len(), "parsed quoted csv");
    ParsedCsv { headers, rows }
}

/// Split one line into fields, honoring double quotes
///
/// Toggling quotes are dropped from the output; escaped quotes (`\"`) are
/// kept along with their backslash. The last field is always emitted.
pub fn split_quoted_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut prev: Option<char> = None;

    for c in line.chars() {
        match c {
            '"' if prev != Some('\\') => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
        prev = Some(c);
    }
    fields.push(current);

    fields
}

/// Parse plain comma-separated text with no quote handling
///
/// Splits on `\n` only and drops blank lines. Header names are trimmed.
/// Each data line is zipped pairwise against the headers: present values
/// are trimmed, and columns past the end of a short line are left out of
/// the row entirely.
pub fn parse_lenient(text: &str) -> ParsedCsv {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return ParsedCsv::empty();
    };

    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let rows: Vec<Row> = data_lines
        .iter()
        .map(|line| {
            headers
                .iter()
                .zip(line.split(','))
                .map(|(header, value)| (header.clone(), value.trim().to_string()))
                .collect::<Row>()
        })
        .collect();

    debug!(headers = headers.len(), rows = rows.len(), "parsed lenient csv");
    ParsedCsv { headers, rows }
}
