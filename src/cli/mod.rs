//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dashboard;
pub mod export;
pub mod load;
pub mod parse;
pub mod rates;

pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportFormat};
pub use load::{handle_load_command, handle_upload_command};
pub use parse::handle_parse_command;
pub use rates::{handle_goal_command, handle_net_worth_command, handle_rates_command, RateOverrides};

use crate::error::{FolioError, FolioResult};
use crate::models::Source;

/// Parse a source name, with a helpful error for unknown names
pub(crate) fn parse_source(name: &str) -> FolioResult<Source> {
    Source::parse(name).ok_or_else(|| {
        FolioError::Validation(format!(
            "Invalid source: '{}'. Valid sources: mutual-fund, brokerage",
            name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_error() {
        let err = parse_source("crypto").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("mutual-fund, brokerage"));
    }
}
