//! Transaction aggregation
//!
//! The two sources have unrelated schemas and sign conventions, so each gets
//! its own named total instead of one parameterized sum. Unparseable or
//! missing numbers count as zero; totals are never `NaN`.

use tracing::debug;

use crate::models::Row;

/// Column holding the holding type in the mutual-fund export
pub const TYPE_COLUMN: &str = "Type";
/// Column holding the current value in the mutual-fund export
pub const MARKET_VALUE_COLUMN: &str = "Market Value";
/// Column holding the signed trade amount in the brokerage export
pub const TRADE_MONEY_COLUMN: &str = "TradeMoney";

/// Sum the market value of every mutual-fund holding
///
/// Keeps rows whose `Type` contains "mutual" (case-insensitive); rows with a
/// missing or empty `Type` are skipped. Everything except digits, `-` and `.`
/// is stripped from `Market Value` before parsing, which removes currency
/// symbols and thousands separators.
pub fn mutual_fund_total(rows: &[Row]) -> f64 {
    let mut counted = 0usize;
    let total: f64 = rows
        .iter()
        .filter(|row| {
            row.get(TYPE_COLUMN)
                .is_some_and(|t| !t.is_empty() && t.to_lowercase().contains("mutual"))
        })
        .map(|row| {
            counted += 1;
            let cleaned: String = row
                .value(MARKET_VALUE_COLUMN)
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
                .collect();
            parse_number(&cleaned)
        })
        .sum();

    debug!(rows = rows.len(), counted, total, "mutual fund total");
    total
}

/// Sum the absolute trade amount of every row
pub fn total_trade_value(rows: &[Row]) -> f64 {
    let total: f64 = rows
        .iter()
        .map(|row| parse_number(row.value(TRADE_MONEY_COLUMN)).abs())
        .sum();

    debug!(rows = rows.len(), total, "total trade value");
    total
}

/// Parse the longest leading decimal number in `s`, or zero if there is none
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12.5 USD"`
/// reads as 12.5 and `"1.2.3"` as 1.2.
pub fn parse_number(s: &str) -> f64 {
    leading_number(s.trim_start())
        .and_then(|n| n.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_mutual_fund_total_filters_and_strips() {
        let rows = vec![
            row(&[("Type", "Mutual Fund"), ("Market Value", "₹1,234.50")]),
            row(&[("Type", "Equity"), ("Market Value", "999")]),
        ];
        assert_eq!(mutual_fund_total(&rows), 1234.5);
    }

    #[test]
    fn test_mutual_fund_total_is_case_insensitive() {
        let rows = vec![
            row(&[("Type", "MUTUAL FUND - DEBT"), ("Market Value", "100")]),
            row(&[("Type", "hybrid mutual"), ("Market Value", "50.25")]),
        ];
        assert_eq!(mutual_fund_total(&rows), 150.25);
    }

    #[test]
    fn test_missing_market_value_counts_as_zero() {
        let rows = vec![
            row(&[("Type", "Mutual Fund")]),
            row(&[("Type", "Mutual Fund"), ("Market Value", "N/A")]),
            row(&[("Type", "Mutual Fund"), ("Market Value", "10")]),
        ];
        let total = mutual_fund_total(&rows);
        assert!(!total.is_nan());
        assert_eq!(total, 10.0);
    }

    #[test]
    fn test_rows_without_type_are_excluded() {
        let rows = vec![
            row(&[("Market Value", "500")]),
            row(&[("Type", ""), ("Market Value", "500")]),
        ];
        assert_eq!(mutual_fund_total(&rows), 0.0);
    }

    #[test]
    fn test_negative_market_value() {
        let rows = vec![row(&[("Type", "Mutual Fund"), ("Market Value", "-₹2,000")])];
        assert_eq!(mutual_fund_total(&rows), -2000.0);
    }

    #[test]
    fn test_total_trade_value_sums_magnitudes() {
        let rows = vec![row(&[("TradeMoney", "-500")]), row(&[("TradeMoney", "300")])];
        assert_eq!(total_trade_value(&rows), 800.0);
    }

    #[test]
    fn test_total_trade_value_defaults_to_zero() {
        let rows = vec![
            row(&[("TradeMoney", "")]),
            row(&[("Symbol", "AAPL")]),
            row(&[("TradeMoney", "abc")]),
            row(&[("TradeMoney", " 12.5 USD")]),
        ];
        assert_eq!(total_trade_value(&rows), 12.5);
    }

    #[test]
    fn test_parse_number_prefix_rules() {
        assert_eq!(parse_number("1.2.3"), 1.2);
        assert_eq!(parse_number("1-2"), 1.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("-1e3x"), -1000.0);
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("+7"), 7.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }
}
