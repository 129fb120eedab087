//! Configuration module for folio-dash
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (currencies, data sources, balances, goal)

pub mod paths;
pub mod settings;

pub use paths::FolioPaths;
pub use settings::Settings;
