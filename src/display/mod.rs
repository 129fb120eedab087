//! Display formatting for terminal output
//!
//! Cards for the dashboard, tables for parsed rows and the single currency
//! formatter everything renders amounts through.

pub mod dashboard;
pub mod format;
pub mod rows;

pub use dashboard::{format_dashboard, format_rates_card, format_source_card};
pub use format::AmountFormatter;
pub use rows::format_rows;
