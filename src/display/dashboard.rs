//! Dashboard and single-figure cards

use super::format::{double_separator, format_bar, format_percentage, separator, AmountFormatter};
use crate::models::{Currency, ExchangeRates, LoadResult, Source};
use crate::services::DashboardSnapshot;

const WIDTH: usize = 48;

/// Format the full dashboard
pub fn format_dashboard(snapshot: &DashboardSnapshot, formatter: &AmountFormatter) -> String {
    let mut output = String::new();

    output.push_str("Portfolio Dashboard\n");
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&format_source_card(
        Source::MutualFund,
        &snapshot.mutual_funds,
        &Currency::Base,
        formatter,
    ));
    output.push_str(&format_source_card(
        Source::Brokerage,
        &snapshot.brokerage,
        &Currency::Usd,
        formatter,
    ));
    output.push_str(&format_rates_card(&snapshot.rates, formatter));

    output.push('\n');
    output.push_str("Net Worth\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<16}{:>32}\n",
        formatter.code(&snapshot.currency),
        formatter.format(snapshot.net_worth, &snapshot.currency)
    ));
    if snapshot.fell_back() {
        output.push_str(&format!(
            "(no exchange rates; shown in {} instead of {})\n",
            formatter.code(&snapshot.currency),
            formatter.code(&snapshot.requested_currency)
        ));
    }

    output.push('\n');
    output.push_str("Goal\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<16}{:>32}\n",
        "Target",
        formatter.format(snapshot.goal.target, &snapshot.currency)
    ));
    match snapshot.goal.percent {
        Some(percent) => output.push_str(&format!(
            "{} {}\n",
            format_bar(percent, 100.0, 30),
            format_percentage(percent)
        )),
        None => output.push_str("Progress unavailable\n"),
    }

    output
}

/// Format one source's load outcome as a card
pub fn format_source_card(
    source: Source,
    result: &LoadResult,
    currency: &Currency,
    formatter: &AmountFormatter,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", source));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if result.success {
        output.push_str(&format!(
            "{:<16}{:>32}\n",
            "Total",
            formatter.format(result.total, currency)
        ));
        output.push_str(&format!("{:<16}{:>32}\n", "Rows", result.rows.len()));
    } else {
        output.push_str(&format!(
            "Failed to load: {}\n",
            result.error.as_deref().unwrap_or("unknown error")
        ));
    }

    output
}

/// Format a rate snapshot as a card
pub fn format_rates_card(rates: &ExchangeRates, formatter: &AmountFormatter) -> String {
    let mut output = String::new();
    output.push_str("\nExchange Rates\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    match (rates.success, rates.usd_to_base, rates.euro_to_base) {
        (true, Some(usd), Some(euro)) => {
            output.push_str(&format!(
                "{:<16}{:>32}\n",
                "1 USD",
                formatter.format(usd, &Currency::Base)
            ));
            output.push_str(&format!(
                "{:<16}{:>32}\n",
                "1 EUR",
                formatter.format(euro, &Currency::Base)
            ));
        }
        _ => output.push_str(&format!(
            "Unavailable: {}\n",
            rates.error.as_deref().unwrap_or("unknown error")
        )),
    }

    output
}
