//! Error handling for number-format processing operations.
//!
//! The detection and conversion core is total: it never returns an error and
//! never panics. The variants here cover the CLI layer (file access, CSV
//! decoding, argument validation) and the internal per-cell conversion
//! operation, whose failure path degrades to keeping the original value.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error in file '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Column '{column}' not found in input header")]
    ColumnNotFound { column: String },

    #[error("Output file already exists: {path} (use --force to overwrite)")]
    OutputExists { path: PathBuf },

    #[error("Value '{value}' is not convertible to English format")]
    CellNotConvertible { value: String },
}

impl Error {
    /// Create a CSV error with file context
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a column-not-found error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Create a per-cell conversion error
    pub fn cell_not_convertible(value: impl Into<String>) -> Self {
        Self::CellNotConvertible {
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
