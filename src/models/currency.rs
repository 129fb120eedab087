//! Currencies and multi-currency balances

use serde::{Deserialize, Serialize};

/// A conversion target
///
/// Only the base currency, USD and EUR take part in conversion. Any other
/// code is kept as `Other` and treated like the base currency by the
/// converter rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// The currency balances are denominated in (INR by default)
    Base,
    /// US dollar
    Usd,
    /// Euro
    Eur,
    /// Any unrecognized code
    Other(String),
}

impl Currency {
    /// Interpret a currency code relative to the configured base currency
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. The
    /// base currency wins when it is itself USD or EUR.
    pub fn from_code(code: &str, base_code: &str) -> Self {
        let code = code.trim().to_uppercase();
        if code == base_code.trim().to_uppercase() {
            Self::Base
        } else if code == "USD" {
            Self::Usd
        } else if code == "EUR" {
            Self::Eur
        } else {
            Self::Other(code)
        }
    }

    /// The ISO code for this currency, given the base currency's code
    pub fn code<'a>(&'a self, base_code: &'a str) -> &'a str {
        match self {
            Self::Base => base_code,
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Other(code) => code,
        }
    }

    /// Whether conversion into this currency needs no exchange rate
    pub fn is_base_like(&self) -> bool {
        matches!(self, Self::Base | Self::Other(_))
    }
}

/// Balances held in the three supported currencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    /// Amount in base currency
    #[serde(default)]
    pub base: f64,
    /// Amount in US dollars
    #[serde(default)]
    pub usd: f64,
    /// Amount in euros
    #[serde(default)]
    pub euro: f64,
}

impl Balances {
    /// Create a new set of balances
    pub const fn new(base: f64, usd: f64, euro: f64) -> Self {
        Self { base, usd, euro }
    }
}
