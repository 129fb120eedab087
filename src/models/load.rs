//! Data sources and load results

use std::fmt;

use serde::{Deserialize, Serialize};

use super::row::Row;

/// The two CSV exports the dashboard understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Mutual-fund platform holdings export (quote-aware CSV)
    MutualFund,
    /// International brokerage trade export (plain comma-split CSV)
    Brokerage,
}

impl Source {
    /// Parse a source name from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "mutual_fund" | "mutual_funds" | "mf" => Some(Self::MutualFund),
            "brokerage" | "trades" | "ibkr" => Some(Self::Brokerage),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MutualFund => write!(f, "Mutual Funds"),
            Self::Brokerage => write!(f, "Brokerage"),
        }
    }
}

/// Outcome of loading one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Header names in file order
    pub headers: Vec<String>,
    /// Parsed rows
    pub rows: Vec<Row>,
    /// Aggregated total for the source
    pub total: f64,
    /// Whether loading succeeded
    pub success: bool,
    /// Failure description when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoadResult {
    /// A successful load
    pub fn loaded(headers: Vec<String>, rows: Vec<Row>, total: f64) -> Self {
        Self {
            headers,
            rows,
            total,
            success: true,
            error: None,
        }
    }

    /// A failed load with no rows and a zero total
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            total: 0.0,
            success: false,
            error: Some(error.into()),
        }
    }
}
