//! folio-dash - Terminal personal-finance dashboard
//!
//! This library loads CSV exports from a mutual-fund platform and an
//! international brokerage, totals them, and folds them together with cash
//! balances into a single-currency net worth using a live exchange-rate feed.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Rows, currencies, exchange rates and load results
//! - `services`: Parsing, aggregation, conversion, rate fetching and loading
//! - `display`: Terminal formatting for cards and tables
//! - `export`: CSV/JSON/YAML export of parsed rows
//! - `cli`: Command handlers for the `folio` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_dash::services::{aggregator, csv_parser};
//!
//! let parsed = csv_parser::parse("Type,Market Value\nMutual Fund,\"1,200\"");
//! let total = aggregator::mutual_fund_total(&parsed.rows);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{FolioError, FolioResult};
