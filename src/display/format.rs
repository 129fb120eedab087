//! Amount and progress formatting
//!
//! All currency rendering goes through [`AmountFormatter`] so no locale state
//! reaches the computation code.

use crate::config::Settings;
use crate::models::Currency;

/// Formats amounts with a currency symbol and thousands separators
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    base_code: String,
    base_symbol: String,
}

impl AmountFormatter {
    /// Create a formatter for the given base currency
    pub fn new(base_code: impl Into<String>, base_symbol: impl Into<String>) -> Self {
        Self {
            base_code: base_code.into(),
            base_symbol: base_symbol.into(),
        }
    }

    /// Create a formatter for the configured base currency
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.base_currency, &settings.base_currency_symbol)
    }

    /// ISO code for a currency
    pub fn code<'a>(&'a self, currency: &'a Currency) -> &'a str {
        currency.code(&self.base_code)
    }

    /// Symbol prefix for a currency
    pub fn symbol(&self, currency: &Currency) -> String {
        match currency {
            Currency::Base => self.base_symbol.clone(),
            Currency::Usd => "$".to_string(),
            Currency::Eur => "€".to_string(),
            Currency::Other(code) => format!("{} ", code),
        }
    }

    /// Format an amount, e.g. `-₹1,234.50`
    ///
    /// Infinite and NaN amounts render as `n/a`.
    pub fn format(&self, amount: f64, currency: &Currency) -> String {
        if !amount.is_finite() {
            return "n/a".to_string();
        }

        let digits = format!("{:.2}", amount.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if amount < 0.0 && digits != "0.00" {
            "-"
        } else {
            ""
        };

        format!(
            "{}{}{}.{}",
            sign,
            self.symbol(currency),
            group_thousands(whole),
            fraction
        )
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if !pct.is_finite() {
        "n/a".to_string()
    } else if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple progress bar
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
