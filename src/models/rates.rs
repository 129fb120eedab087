//! Exchange-rate snapshots
//!
//! Rates are expressed as "base currency per one unit of foreign currency"
//! (e.g. 83.2 INR per USD). A snapshot is fresh on every fetch; nothing is
//! cached.

use serde::{Deserialize, Serialize};

/// Result of one rate fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Base currency per US dollar
    pub usd_to_base: Option<f64>,
    /// Base currency per euro
    pub euro_to_base: Option<f64>,
    /// Whether the fetch produced both rates
    pub success: bool,
    /// Failure description when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExchangeRates {
    /// A successful snapshot
    pub fn fetched(usd_to_base: f64, euro_to_base: f64) -> Self {
        Self {
            usd_to_base: Some(usd_to_base),
            euro_to_base: Some(euro_to_base),
            success: true,
            error: None,
        }
    }

    /// A failed snapshot; both rates are absent
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            usd_to_base: None,
            euro_to_base: None,
            success: false,
            error: Some(error.into()),
        }
    }

    /// Rates in the shape the converter consumes
    pub fn conversion_rates(&self) -> ConversionRates {
        ConversionRates::from(self)
    }
}

/// The two rates the converter works with
///
/// A missing rate reads as `0.0`, so dividing by it yields `inf`/`NaN`
/// exactly as the converter's unguarded formulas expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionRates {
    /// Base currency per US dollar
    pub usd_to_base: f64,
    /// Base currency per euro
    pub euro_to_base: f64,
}

impl ConversionRates {
    /// Create conversion rates
    pub const fn new(usd_to_base: f64, euro_to_base: f64) -> Self {
        Self {
            usd_to_base,
            euro_to_base,
        }
    }
}

impl From<&ExchangeRates> for ConversionRates {
    fn from(rates: &ExchangeRates) -> Self {
        Self {
            usd_to_base: rates.usd_to_base.unwrap_or(0.0),
            euro_to_base: rates.euro_to_base.unwrap_or(0.0),
        }
    }
}
