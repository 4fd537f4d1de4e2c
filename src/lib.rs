//! Number-Format Processor Library
//!
//! A Rust library for deciding, per column of a string-valued tabular
//! dataset, whether values are numeric and whether they are written in the
//! European convention (dot as thousands separator, comma as decimal
//! separator), and for rewriting European values into English convention
//! (comma as thousands separator, dot as decimal separator).
//!
//! This library provides tools for:
//! - Classifying single cell values as numeric-looking and European/English
//! - Aggregating per-column verdicts from a bounded row sample
//! - Suggesting a default conversion selection for a dataset
//! - Rewriting selected columns into English convention without ever
//!   altering non-numeric cells
//! - Loading and writing CSV datasets from the command line
//!
//! Everything in [`detection`] and [`conversion`] is pure and total: no
//! I/O, no mutation of inputs, no error returns, no panics. The CLI layer
//! is the only place that touches the filesystem.

pub mod config;
pub mod constants;
pub mod conversion;
pub mod detection;
pub mod error;
pub mod models;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types and operations
pub use config::DetectionConfig;
pub use conversion::{
    convert_data_format, convert_european_to_english, convert_row, preview_conversion,
};
pub use detection::{
    column_verdicts, detect_european_format, detect_numeric_columns, is_european_format,
    is_numeric_value, suggest_conversion_columns,
};
pub use error::{Error, Result};
pub use models::{ColumnKey, ColumnVerdict, Dataset, Row, TargetFormat};
