//! CLI commands for loading a single source
//!
//! `load` reads a bundled export and always exits cleanly, printing the
//! failure if there was one. `upload` reads a user-picked file and fails the
//! command when the file cannot be read.

use std::path::{Path, PathBuf};

use super::parse_source;
use crate::config::{FolioPaths, Settings};
use crate::display::{format_rows, format_source_card, AmountFormatter};
use crate::error::FolioResult;
use crate::export::save_copy;
use crate::models::{Currency, LoadResult, Source};
use crate::services::DataLoader;

/// Handle `folio load`
pub async fn handle_load_command(
    paths: &FolioPaths,
    settings: &Settings,
    source: &str,
    location: Option<String>,
    show_rows: bool,
) -> FolioResult<()> {
    let source = parse_source(source)?;
    let location = location.unwrap_or_else(|| default_location(settings, source).to_string());

    let loader = DataLoader::from_settings(paths.clone(), settings);
    let result = loader.load_from_url(&location, source).await;

    print_result(settings, source, &result, show_rows);
    Ok(())
}

/// Handle `folio upload`
pub async fn handle_upload_command(
    paths: &FolioPaths,
    settings: &Settings,
    source: &str,
    file: &Path,
    save_copy_to: Option<PathBuf>,
    show_rows: bool,
) -> FolioResult<()> {
    let source = parse_source(source)?;

    let loader = DataLoader::from_settings(paths.clone(), settings);
    let result = loader.load_from_user_file(file, source).await?;

    print_result(settings, source, &result, show_rows);

    if let Some(destination) = save_copy_to {
        let bytes = save_copy(file, &destination)?;
        println!("Saved copy to {} ({} bytes)", destination.display(), bytes);
    }

    Ok(())
}

fn default_location(settings: &Settings, source: Source) -> &str {
    match source {
        Source::MutualFund => &settings.mutual_fund_file,
        Source::Brokerage => &settings.brokerage_file,
    }
}

/// Brokerage trade amounts are reported in USD, everything else in base
pub(crate) fn source_currency(source: Source) -> Currency {
    match source {
        Source::MutualFund => Currency::Base,
        Source::Brokerage => Currency::Usd,
    }
}

fn print_result(settings: &Settings, source: Source, result: &LoadResult, show_rows: bool) {
    let formatter = AmountFormatter::from_settings(settings);
    print!(
        "{}",
        format_source_card(source, result, &source_currency(source), &formatter)
    );

    if show_rows && result.success {
        println!();
        print!("{}", format_rows(&result.headers, &result.rows));
    }
}
