//! Dashboard command

use crate::config::{FolioPaths, Settings};
use crate::display::{format_dashboard, AmountFormatter};
use crate::error::FolioResult;
use crate::services::DashboardSnapshot;

/// Load everything and print the dashboard
pub async fn handle_dashboard_command(
    paths: &FolioPaths,
    settings: &Settings,
    currency: Option<String>,
) -> FolioResult<()> {
    let code = currency.unwrap_or_else(|| settings.display_currency.clone());
    let currency = settings.currency(&code);

    let snapshot = DashboardSnapshot::load(paths, settings, currency).await;
    let formatter = AmountFormatter::from_settings(settings);

    print!("{}", format_dashboard(&snapshot, &formatter));
    Ok(())
}
