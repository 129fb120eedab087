//! User settings for folio-dash
//!
//! Manages the base currency, the exchange-rate endpoint, where the two CSV
//! sources live, cash balances and the net-worth goal.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::FolioPaths;
use crate::error::FolioError;
use crate::models::{Balances, Currency};

/// User settings for folio-dash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO code of the currency balances are denominated in
    #[serde(default = "default_base_currency")]
    pub base_currency: String,

    /// Symbol used when formatting base-currency amounts
    #[serde(default = "default_base_currency_symbol")]
    pub base_currency_symbol: String,

    /// Exchange-rate endpoint; the base currency code is appended as a path segment
    #[serde(default = "default_rates_endpoint")]
    pub rates_endpoint: String,

    /// Optional request timeout for outbound fetches (none by default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Location of the mutual-fund export (data-dir relative path or URL)
    #[serde(default = "default_mutual_fund_file")]
    pub mutual_fund_file: String,

    /// Location of the brokerage trade export (data-dir relative path or URL)
    #[serde(default = "default_brokerage_file")]
    pub brokerage_file: String,

    /// Cash balances held outside the two sources
    #[serde(default)]
    pub balances: Balances,

    /// Net-worth goal, in base currency
    #[serde(default = "default_goal_amount")]
    pub goal_amount: f64,

    /// Currency the dashboard reports in
    #[serde(default = "default_display_currency")]
    pub display_currency: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_currency() -> String {
    "INR".to_string()
}

fn default_base_currency_symbol() -> String {
    "₹".to_string()
}

fn default_rates_endpoint() -> String {
    "https://api.exchangerate-api.com/v4/latest".to_string()
}

fn default_mutual_fund_file() -> String {
    "mutual_funds.csv".to_string()
}

fn default_brokerage_file() -> String {
    "trades.csv".to_string()
}

fn default_goal_amount() -> f64 {
    10_000_000.0
}

fn default_display_currency() -> String {
    default_base_currency()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            base_currency: default_base_currency(),
            base_currency_symbol: default_base_currency_symbol(),
            rates_endpoint: default_rates_endpoint(),
            request_timeout_secs: None,
            mutual_fund_file: default_mutual_fund_file(),
            brokerage_file: default_brokerage_file(),
            balances: Balances::default(),
            goal_amount: default_goal_amount(),
            display_currency: default_display_currency(),
        }
    }
}

impl Settings {
    /// Full URL of the rate feed for the configured base currency
    pub fn rates_url(&self) -> String {
        format!(
            "{}/{}",
            self.rates_endpoint.trim_end_matches('/'),
            self.base_currency
        )
    }

    /// Outbound request timeout, if one was configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Interpret a currency code relative to the configured base currency
    pub fn currency(&self, code: &str) -> Currency {
        Currency::from_code(code, &self.base_currency)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FolioPaths) -> Result<Self, FolioError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FolioError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FolioError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FolioPaths) -> Result<(), FolioError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FolioError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FolioError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.base_currency, "INR");
        assert_eq!(settings.display_currency, "INR");
        assert!(settings.request_timeout().is_none());
        assert_eq!(settings.balances, Balances::default());
    }

    #[test]
    fn test_rates_url_appends_base() {
        let mut settings = Settings::default();
        settings.rates_endpoint = "http://localhost:8080/latest/".into();
        settings.base_currency = "GBP".into();
        assert_eq!(settings.rates_url(), "http://localhost:8080/latest/GBP");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FolioPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.balances = Balances::new(100.0, 10.0, 5.0);
        settings.display_currency = "USD".into();
        settings.request_timeout_secs = Some(15);

        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.balances, Balances::new(100.0, 10.0, 5.0));
        assert_eq!(loaded.display_currency, "USD");
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"goal_amount": 500.0}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.goal_amount, 500.0);
        assert_eq!(loaded.brokerage_file, "trades.csv");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
