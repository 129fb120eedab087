//! Currency conversion
//!
//! Rates are base currency per unit of foreign currency. The two operations
//! here treat bad rates differently and are kept apart on purpose:
//!
//! - [`net_worth`] applies its formulas as-is. A zero rate yields `inf` or
//!   `NaN` for USD/EUR targets; callers validate rates first.
//! - [`convert_goal`] returns `0.0` when the needed rate is not positive.

use crate::models::{Balances, ConversionRates, Currency};

/// Combine the three balances into one amount in `target`
///
/// Unrecognized targets use the base-currency formula.
pub fn net_worth(balances: &Balances, rates: &ConversionRates, target: &Currency) -> f64 {
    let Balances { base, usd, euro } = *balances;
    let ConversionRates {
        usd_to_base,
        euro_to_base,
    } = *rates;

    match target {
        Currency::Usd => base / usd_to_base + usd + euro * (usd_to_base / euro_to_base),
        Currency::Eur => base / euro_to_base + usd * (usd_to_base / euro_to_base) + euro,
        Currency::Base | Currency::Other(_) => {
            base + usd * usd_to_base + euro * euro_to_base
        }
    }
}

/// Convert a base-currency goal amount into `target`
///
/// Returns the amount unchanged for base and unrecognized targets, and zero
/// when the rate a USD/EUR conversion needs is not positive.
pub fn convert_goal(amount: f64, target: &Currency, rates: &ConversionRates) -> f64 {
    match target {
        Currency::Usd if rates.usd_to_base > 0.0 => amount / rates.usd_to_base,
        Currency::Eur if rates.euro_to_base > 0.0 => amount / rates.euro_to_base,
        Currency::Usd | Currency::Eur => 0.0,
        Currency::Base | Currency::Other(_) => amount,
    }
}
