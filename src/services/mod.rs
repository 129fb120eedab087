//! Service layer for folio-dash
//!
//! Parsing, aggregation and conversion are pure functions over their inputs.
//! Only [`RateFetcher`] and [`DataLoader`] perform I/O, and neither shares
//! state with other calls.

pub mod aggregator;
pub mod converter;
pub mod csv_parser;
pub mod dashboard;
pub mod loader;
pub mod rates;

pub use dashboard::{DashboardSnapshot, GoalProgress};
pub use loader::DataLoader;
pub use rates::RateFetcher;
