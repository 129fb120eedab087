//! Core data models for folio-dash
//!
//! Parsed CSV rows, currencies and balances, exchange-rate snapshots and the
//! result of loading one data source.

pub mod currency;
pub mod load;
pub mod rates;
pub mod row;

pub use currency::{Balances, Currency};
pub use load::{LoadResult, Source};
pub use rates::{ConversionRates, ExchangeRates};
pub use row::{ParsedCsv, Row};
