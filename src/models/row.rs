//! Parsed CSV rows
//!
//! A row is an untyped mapping from column name to cell text. Column names and
//! presence vary between sources, so nothing here validates a schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One parsed transaction record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(HashMap<String, String>);

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell, if the column is present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Get a cell, treating a missing column as the empty string
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Whether the column is present
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Output of either CSV parsing mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCsv {
    /// Header names in file order
    pub headers: Vec<String>,
    /// One row per data line
    pub rows: Vec<Row>,
}

impl ParsedCsv {
    /// An empty parse result (no header, no rows)
    pub fn empty() -> Self {
        Self::default()
    }
}
