//! Data loading
//!
//! Gets raw CSV text for a source, runs it through that source's parser and
//! aggregator, and wraps the outcome in a [`LoadResult`].
//!
//! The two entry points report failure differently:
//!
//! - [`DataLoader::load_from_url`] never fails. Fetch and read errors become
//!   a `LoadResult` with `success: false`.
//! - [`DataLoader::load_from_user_file`] returns `Err` when the file cannot be
//!   read; callers handle it themselves.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use super::{aggregator, csv_parser};
use crate::config::{FolioPaths, Settings};
use crate::error::{FolioError, FolioResult};
use crate::models::{LoadResult, ParsedCsv, Source};

/// Run text through the parser and aggregator belonging to `source`
pub fn analyze(source: Source, text: &str) -> LoadResult {
    let (ParsedCsv { headers, rows }, total) = match source {
        Source::MutualFund => {
            let parsed = csv_parser::parse(text);
            let total = aggregator::mutual_fund_total(&parsed.rows);
            (parsed, total)
        }
        Source::Brokerage => {
            let parsed = csv_parser::parse_lenient(text);
            let total = aggregator::total_trade_value(&parsed.rows);
            (parsed, total)
        }
    };

    LoadResult::loaded(headers, rows, total)
}

/// Whether a location should be fetched over HTTP rather than read from disk
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Loads source exports from bundled locations or user files
#[derive(Debug, Clone)]
pub struct DataLoader {
    client: Client,
    paths: FolioPaths,
}

impl DataLoader {
    /// Create a loader resolving bundled files against `paths`
    pub fn new(paths: FolioPaths, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self { client, paths }
    }

    /// Create a loader using the configured request timeout
    pub fn from_settings(paths: FolioPaths, settings: &Settings) -> Self {
        Self::new(paths, settings.request_timeout())
    }

    /// Load a bundled export
    ///
    /// `location` is an `http(s)://` URL or a path relative to the data
    /// directory. Never fails; errors are reported in the result.
    pub async fn load_from_url(&self, location: &str, source: Source) -> LoadResult {
        match self.read_location(location).await {
            Ok(text) => {
                let result = analyze(source, &text);
                info!(
                    %source,
                    location,
                    rows = result.rows.len(),
                    total = result.total,
                    "loaded bundled export"
                );
                result
            }
            Err(e) => {
                warn!(%source, location, error = %e, "failed to load bundled export");
                LoadResult::failed(e.to_string())
            }
        }
    }

    /// Load an export the user picked
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub async fn load_from_user_file(
        &self,
        path: &Path,
        source: Source,
    ) -> FolioResult<LoadResult> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            FolioError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let result = analyze(source, &text);
        info!(
            %source,
            file = %path.display(),
            rows = result.rows.len(),
            total = result.total,
            "loaded user file"
        );
        Ok(result)
    }

    async fn read_location(&self, location: &str) -> FolioResult<String> {
        if is_remote(location) {
            let response = self.client.get(location).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FolioError::Http(format!(
                    "{} returned status {}",
                    location, status
                )));
            }
            Ok(response.text().await?)
        } else {
            let path = self.paths.resolve_data_file(location);
            tokio::fs::read_to_string(&path).await.map_err(|e| {
                FolioError::Io(format!("Failed to read {}: {}", path.display(), e))
            })
        }
    }
}
