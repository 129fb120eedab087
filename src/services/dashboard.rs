//! Dashboard snapshot
//!
//! Loads both exports and the exchange rates concurrently, then folds them
//! with the configured cash balances into a net worth and goal progress.

use tracing::warn;

use super::{converter, DataLoader, RateFetcher};
use crate::config::{FolioPaths, Settings};
use crate::models::{Balances, Currency, ExchangeRates, LoadResult, Source};

/// Progress towards the net-worth goal
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Goal converted into the reporting currency
    pub target: f64,
    /// Percent of the goal reached, when the converted goal is positive
    pub percent: Option<f64>,
}

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Mutual-fund export load
    pub mutual_funds: LoadResult,
    /// Brokerage export load
    pub brokerage: LoadResult,
    /// Rate snapshot used for conversion
    pub rates: ExchangeRates,
    /// Cash balances plus the two source totals
    pub holdings: Balances,
    /// Currency that was asked for
    pub requested_currency: Currency,
    /// Currency the figures are actually in
    pub currency: Currency,
    /// Net worth in `currency`
    pub net_worth: f64,
    /// Goal progress in `currency`
    pub goal: GoalProgress,
}

impl DashboardSnapshot {
    /// Load both sources and the rates, then compute the snapshot
    pub async fn load(paths: &FolioPaths, settings: &Settings, currency: Currency) -> Self {
        let loader = DataLoader::from_settings(paths.clone(), settings);
        let fetcher = RateFetcher::from_settings(settings);

        let (mutual_funds, brokerage, rates) = tokio::join!(
            loader.load_from_url(&settings.mutual_fund_file, Source::MutualFund),
            loader.load_from_url(&settings.brokerage_file, Source::Brokerage),
            fetcher.fetch(),
        );

        Self::compute(settings, currency, mutual_funds, brokerage, rates)
    }

    /// Compute a snapshot from already-loaded parts
    ///
    /// The mutual-fund total counts towards the base balance and the
    /// brokerage total towards the USD balance. Without valid rates the
    /// snapshot reports in base currency, the only formula that does not
    /// divide by a rate.
    pub fn compute(
        settings: &Settings,
        requested_currency: Currency,
        mutual_funds: LoadResult,
        brokerage: LoadResult,
        rates: ExchangeRates,
    ) -> Self {
        let holdings = Balances {
            base: settings.balances.base + mutual_funds.total,
            usd: settings.balances.usd + brokerage.total,
            euro: settings.balances.euro,
        };

        let currency = if rates.success || requested_currency.is_base_like() {
            requested_currency.clone()
        } else {
            warn!(
                requested = requested_currency.code(&settings.base_currency),
                "no exchange rates, reporting in base currency"
            );
            Currency::Base
        };

        let conversion = rates.conversion_rates();
        let net_worth = converter::net_worth(&holdings, &conversion, &currency);

        let target = converter::convert_goal(settings.goal_amount, &currency, &conversion);
        let percent = (target > 0.0).then(|| net_worth / target * 100.0);

        Self {
            mutual_funds,
            brokerage,
            rates,
            holdings,
            requested_currency,
            currency,
            net_worth,
            goal: GoalProgress { target, percent },
        }
    }

    /// Whether the reporting currency differs from the requested one
    pub fn fell_back(&self) -> bool {
        self.currency != self.requested_currency
    }
}
