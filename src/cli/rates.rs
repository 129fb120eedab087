//! CLI commands for exchange rates and conversions

use clap::Args;

use crate::config::Settings;
use crate::display::{format_rates_card, AmountFormatter};
use crate::error::FolioResult;
use crate::models::{Balances, ExchangeRates};
use crate::services::{converter, RateFetcher};

/// Fixed rates that replace the live feed when both are given
#[derive(Args, Debug, Clone, Default)]
pub struct RateOverrides {
    /// Base currency per US dollar (skips the live feed)
    #[arg(long, requires = "eur_rate")]
    pub usd_rate: Option<f64>,
    /// Base currency per euro (skips the live feed)
    #[arg(long, requires = "usd_rate")]
    pub eur_rate: Option<f64>,
}

impl RateOverrides {
    /// Use the overrides, or fetch a fresh snapshot
    pub async fn resolve(&self, settings: &Settings) -> ExchangeRates {
        match (self.usd_rate, self.eur_rate) {
            (Some(usd), Some(euro)) => ExchangeRates::fetched(usd, euro),
            _ => RateFetcher::from_settings(settings).fetch().await,
        }
    }
}

/// Handle `folio rates`
pub async fn handle_rates_command(settings: &Settings, json: bool) -> FolioResult<()> {
    let rates = RateFetcher::from_settings(settings).fetch().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&rates)?);
    } else {
        let formatter = AmountFormatter::from_settings(settings);
        print!("{}", format_rates_card(&rates, &formatter));
    }

    Ok(())
}

/// Handle `folio net-worth`
///
/// Balances default to the configured cash balances. Conversion uses the
/// unguarded formulas, so a missing rate shows up as `n/a` for USD/EUR.
pub async fn handle_net_worth_command(
    settings: &Settings,
    base: Option<f64>,
    usd: Option<f64>,
    euro: Option<f64>,
    currency: Option<String>,
    overrides: &RateOverrides,
) -> FolioResult<()> {
    let balances = Balances {
        base: base.unwrap_or(settings.balances.base),
        usd: usd.unwrap_or(settings.balances.usd),
        euro: euro.unwrap_or(settings.balances.euro),
    };
    let code = currency.unwrap_or_else(|| settings.display_currency.clone());
    let target = settings.currency(&code);

    let rates = overrides.resolve(settings).await;
    warn_if_failed(&rates);

    let value = converter::net_worth(&balances, &rates.conversion_rates(), &target);
    let formatter = AmountFormatter::from_settings(settings);
    println!(
        "Net worth ({}): {}",
        formatter.code(&target),
        formatter.format(value, &target)
    );

    Ok(())
}

/// Handle `folio goal`
pub async fn handle_goal_command(
    settings: &Settings,
    amount: Option<f64>,
    currency: Option<String>,
    overrides: &RateOverrides,
) -> FolioResult<()> {
    let amount = amount.unwrap_or(settings.goal_amount);
    let code = currency.unwrap_or_else(|| settings.display_currency.clone());
    let target = settings.currency(&code);

    let rates = overrides.resolve(settings).await;
    warn_if_failed(&rates);

    let value = converter::convert_goal(amount, &target, &rates.conversion_rates());
    let formatter = AmountFormatter::from_settings(settings);
    println!(
        "Goal ({}): {}",
        formatter.code(&target),
        formatter.format(value, &target)
    );

    Ok(())
}

fn warn_if_failed(rates: &ExchangeRates) {
    if !rates.success {
        eprintln!(
            "Warning: exchange rates unavailable: {}",
            rates.error.as_deref().unwrap_or("unknown error")
        );
    }
}
