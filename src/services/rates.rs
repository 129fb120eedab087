//! Exchange-rate feed
//!
//! Fetches the latest rates for the base currency from an
//! exchangerate-api style endpoint. The provider quotes foreign units per one
//! unit of base (1 INR = 0.012 USD); the dashboard works in base per foreign
//! unit, so each rate is inverted.
//!
//! One attempt per call, no retry and no cache. Failures are reported in the
//! returned snapshot, never as an error.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{FolioError, FolioResult};
use crate::models::ExchangeRates;

/// Provider response body; only `rates` is read
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, serde_json::Value>,
}

/// Fetches exchange-rate snapshots from a remote endpoint
#[derive(Debug, Clone)]
pub struct RateFetcher {
    client: Client,
    url: String,
}

impl RateFetcher {
    /// Create a fetcher for a complete rate URL
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    /// Create a fetcher for the configured endpoint and base currency
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.rates_url(), settings.request_timeout())
    }

    /// The URL this fetcher requests
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch a fresh snapshot
    ///
    /// Never fails: network errors, non-success statuses and unusable bodies
    /// all produce a snapshot with `success: false` and no rates.
    pub async fn fetch(&self) -> ExchangeRates {
        match self.try_fetch().await {
            Ok(rates) => {
                info!(
                    url = %self.url,
                    usd_to_base = ?rates.usd_to_base,
                    euro_to_base = ?rates.euro_to_base,
                    "fetched exchange rates"
                );
                rates
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "exchange rate fetch failed");
                ExchangeRates::failed(e.to_string())
            }
        }
    }

    async fn try_fetch(&self) -> FolioResult<ExchangeRates> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Http(format!(
                "{} returned status {}",
                self.url, status
            )));
        }

        let body = response.text().await?;
        decode_rates(&body)
    }
}

/// Decode a provider body into a successful snapshot
///
/// The body must hold a `rates` object with positive numeric `USD` and `EUR`
/// entries.
pub fn decode_rates(body: &str) -> FolioResult<ExchangeRates> {
    let response: RatesResponse = serde_json::from_str(body)?;

    let usd = invert_rate(&response.rates, "USD")?;
    let euro = invert_rate(&response.rates, "EUR")?;

    Ok(ExchangeRates::fetched(usd, euro))
}

fn invert_rate(rates: &HashMap<String, serde_json::Value>, code: &str) -> FolioResult<f64> {
    let rate = rates
        .get(code)
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| FolioError::Rates(format!("missing {} rate", code)))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(FolioError::Rates(format!("invalid {} rate: {}", code, rate)));
    }

    Ok(1.0 / rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::serve_once;

    #[test]
    fn test_decode_inverts_rates() {
        let rates = decode_rates(r#"{"base":"INR","rates":{"INR":1,"USD":0.015625,"EUR":0.0078125}}"#)
            .unwrap();
        assert!(rates.success);
        assert_eq!(rates.usd_to_base, Some(64.0));
        assert_eq!(rates.euro_to_base, Some(128.0));
        assert_eq!(rates.error, None);
    }

    #[test]
    fn test_decode_missing_usd() {
        let err = decode_rates(r#"{"rates":{"EUR":0.01}}"#).unwrap_err();
        assert!(matches!(err, FolioError::Rates(_)));
        assert_eq!(err.to_string(), "Exchange rate error: missing USD rate");
    }

    #[test]
    fn test_decode_rejects_unusable_values() {
        assert!(decode_rates(r#"{"rates":{"USD":"0.0125","EUR":0.01}}"#).is_err());
        assert!(decode_rates(r#"{"rates":{"USD":0,"EUR":0.01}}"#).is_err());
        assert!(decode_rates(r#"{"result":"error"}"#).is_err());
        assert!(decode_rates("<html>").is_err());
    }

    #[tokio::test]
    async fn test_fetch_missing_usd_reports_failure() {
        let url = serve_once("200 OK", r#"{"rates":{"EUR":0.01}}"#).await;
        let rates = RateFetcher::new(url, None).fetch().await;

        assert!(!rates.success);
        assert_eq!(rates.usd_to_base, None);
        assert_eq!(rates.euro_to_base, None);
        assert!(rates.error.unwrap().contains("USD"));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", r#"{"rates":{"USD":0.015625,"EUR":0.0078125}}"#).await;
        let rates = RateFetcher::new(url, Some(Duration::from_secs(5)))
            .fetch()
            .await;

        assert!(rates.success);
        assert_eq!(rates.usd_to_base, Some(64.0));
        assert_eq!(rates.euro_to_base, Some(128.0));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once("503 Service Unavailable", "{}").await;
        let rates = RateFetcher::new(url, None).fetch().await;

        assert!(!rates.success);
        assert!(rates.error.unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_endpoint() {
        let rates = RateFetcher::new("http://127.0.0.1:9/latest/INR", None)
            .fetch()
            .await;

        assert!(!rates.success);
        assert!(rates.error.unwrap().starts_with("HTTP error"));
    }

    #[test]
    fn test_from_settings_builds_url() {
        let settings = Settings::default();
        let fetcher = RateFetcher::from_settings(&settings);
        assert_eq!(
            fetcher.url(),
            "https://api.exchangerate-api.com/v4/latest/INR"
        );
    }
}
