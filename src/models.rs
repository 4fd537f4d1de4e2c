//! Core data model for tabular format detection and conversion.
//!
//! A dataset is an ordered sequence of string-valued rows plus an explicit,
//! insertion-ordered column list (the CSV header order, or the first row's
//! key order when built from literal rows). Rows are uniform string-keyed
//! mappings: a key absent from a row models an undefined cell, while an
//! empty string models a present-but-empty cell.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier for a dataset column.
///
/// Column keys are plain strings at the boundary (CSV headers, CLI
/// arguments); the newtype keeps them from mixing with cell values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for ColumnKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ColumnKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single dataset row: a mapping from column key to cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: HashMap<ColumnKey, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell value for a column, or `None` if the row does not
    /// define that key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    /// Set the cell value for a column.
    pub fn set(&mut self, key: ColumnKey, value: impl Into<String>) {
        self.cells.insert(key, value.into());
    }

    /// Check whether the row defines a key at all (an empty string counts
    /// as defined).
    pub fn is_defined(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An in-memory tabular dataset.
///
/// `columns` carries the stable, insertion-ordered key set; rows may omit
/// keys but never introduce columns of their own as far as detection is
/// concerned. Keys that appear only on later rows are not considered by the
/// column-level detectors (a carried-over limitation of the first-row
/// sampling heuristic).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<ColumnKey>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Create an empty dataset with the given column order.
    pub fn new(columns: Vec<ColumnKey>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a dataset from literal rows of `(key, value)` pairs.
    ///
    /// The column order is taken from the pair order of the first row;
    /// later rows may define fewer or extra keys. Intended for tests and
    /// small in-memory datasets.
    pub fn from_rows(rows: Vec<Vec<(&str, &str)>>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.iter().map(|(key, _)| ColumnKey::from(*key)).collect())
            .unwrap_or_default();

        let mut dataset = Self::new(columns);
        for pairs in rows {
            let mut row = Row::new();
            for (key, value) in pairs {
                row.set(ColumnKey::from(key), value);
            }
            dataset.push_row(row);
        }
        dataset
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The sampling window: the first `min(sample_size, len)` rows.
    pub fn sample(&self, sample_size: usize) -> &[Row] {
        &self.rows[..self.rows.len().min(sample_size)]
    }
}

/// Per-column classification computed from a bounded row sample.
///
/// Transient output of the detectors; not stored on the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVerdict {
    /// Enough sampled values look numeric.
    pub is_numeric: bool,
    /// Enough numeric sampled values use the European convention.
    pub is_european: bool,
}

/// Target convention for dataset conversion.
///
/// Only English is supported; the reverse direction is out of scope. The
/// single-variant enum keeps the parameter explicit and closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFormat {
    #[default]
    English,
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetFormat::English => f.write_str("English"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_column_order() {
        let dataset = Dataset::from_rows(vec![
            vec![("name", "A"), ("price", "1,23"), ("qty", "10")],
            vec![("name", "B"), ("price", "4,56"), ("qty", "20")],
        ]);

        let keys: Vec<&str> = dataset.columns().iter().map(ColumnKey::as_str).collect();
        assert_eq!(keys, vec!["name", "price", "qty"]);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_from_rows_empty() {
        let dataset = Dataset::from_rows(vec![]);
        assert!(dataset.is_empty());
        assert!(dataset.columns().is_empty());
    }

    #[test]
    fn test_row_undefined_vs_empty() {
        let mut row = Row::new();
        row.set(ColumnKey::from("a"), "");

        assert!(row.is_defined("a"));
        assert_eq!(row.get("a"), Some(""));
        assert!(!row.is_defined("b"));
        assert_eq!(row.get("b"), None);
    }

    #[test]
    fn test_sample_window() {
        let mut dataset = Dataset::new(vec![ColumnKey::from("v")]);
        for i in 0..10 {
            let mut row = Row::new();
            row.set(ColumnKey::from("v"), i.to_string());
            dataset.push_row(row);
        }

        assert_eq!(dataset.sample(3).len(), 3);
        assert_eq!(dataset.sample(100).len(), 10);
        assert_eq!(dataset.sample(0).len(), 0);
    }

    #[test]
    fn test_column_key_borrow() {
        let mut cells: std::collections::HashMap<ColumnKey, String> =
            std::collections::HashMap::new();
        cells.insert(ColumnKey::from("price"), "1".to_string());
        assert!(cells.contains_key("price"));
    }
}
