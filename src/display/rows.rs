//! Parsed row tables

use crate::models::Row;

/// Format parsed rows as a column-aligned table, in header order
pub fn format_rows(headers: &[String], rows: &[Row]) -> String {
    if headers.is_empty() {
        return "No rows found.".to_string();
    }

    let widths: Vec<usize> = headers
        .iter()
        .map(|h| {
            rows.iter()
                .map(|r| r.value(h).chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    push_line(&mut output, headers.iter().map(String::as_str), &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut output, rule.iter().map(String::as_str), &widths);

    for row in rows {
        push_line(&mut output, headers.iter().map(|h| row.value(h)), &widths);
    }

    output.push_str(&format!("\n{} row(s)\n", rows.len()));
    output
}

fn push_line<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    output.push_str(line.join("  ").trim_end());
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_rows(&[], &[]), "No rows found.");
    }

    #[test]
    fn test_columns_align() {
        let headers = vec!["Symbol".to_string(), "TradeMoney".to_string()];
        let rows: Vec<Row> = vec![
            [("Symbol", "AAPL"), ("TradeMoney", "-500")].into_iter().collect(),
            [("Symbol", "GOOGL")].into_iter().collect(),
        ];

        let output = format_rows(&headers, &rows);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Symbol  TradeMoney");
        assert_eq!(lines[1], "------  ----------");
        assert_eq!(lines[2], "AAPL    -500");
        assert_eq!(lines[3], "GOOGL");
        assert!(output.ends_with("2 row(s)\n"));
    }
}
