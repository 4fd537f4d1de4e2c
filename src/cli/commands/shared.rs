//! Shared infrastructure for CLI commands
//!
//! Logging setup, CSV dataset loading/writing, and progress reporting used
//! by both the detect and convert commands.

use crate::models::{ColumnKey, Dataset, Row};
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::debug;

/// Set up the tracing subscriber for CLI output.
///
/// Honors `RUST_LOG` when set; otherwise filters to the crate at the level
/// derived from the verbosity flags. Safe to call more than once (later
/// calls are no-ops), which keeps command functions directly testable.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("numfmt_processor={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();

    Ok(())
}

/// Load a CSV file into a dataset.
///
/// The header record supplies the column order; every data record becomes a
/// row with each header key defined (CSV has no notion of an undefined
/// cell, so missing trailing fields come back as empty strings).
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::csv(path, e))?;

    let columns: Vec<ColumnKey> = reader
        .headers()
        .map_err(|e| Error::csv(path, e))?
        .iter()
        .map(ColumnKey::from)
        .collect();

    let mut dataset = Dataset::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| Error::csv(path, e))?;
        let mut row = Row::new();
        for (index, key) in dataset.columns().iter().enumerate() {
            row.set(key.clone(), record.get(index).unwrap_or(""));
        }
        dataset.push_row(row);
    }

    debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Write a dataset to a CSV file, header first, in column order.
///
/// Undefined cells are written as empty fields.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::csv(path, e))?;

    writer
        .write_record(dataset.columns().iter().map(ColumnKey::as_str))
        .map_err(|e| Error::csv(path, e))?;

    for row in dataset.rows() {
        writer
            .write_record(
                dataset
                    .columns()
                    .iter()
                    .map(|key| row.get(key.as_str()).unwrap_or("")),
            )
            .map_err(|e| Error::csv(path, e))?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = dataset.len(), "wrote dataset");
    Ok(())
}

/// Create a standardized progress bar for row-level operations
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    #[test]
    fn test_read_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "name,price").unwrap();
        writeln!(file, "Product A,\"1.234,56\"").unwrap();
        writeln!(file, "Product B,\"2.345,67\"").unwrap();
        drop(file);

        let dataset = read_dataset(&path).unwrap();

        let keys: Vec<&str> = dataset.columns().iter().map(ColumnKey::as_str).collect();
        assert_eq!(keys, vec!["name", "price"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].get("price"), Some("1.234,56"));
        assert_eq!(dataset.rows()[1].get("name"), Some("Product B"));
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let result = read_dataset(Path::new("/nonexistent/input.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");

        let dataset = Dataset::from_rows(vec![
            vec![("name", "A"), ("price", "1,234.56")],
            vec![("name", "B"), ("price", "2,345.67")],
        ]);

        write_dataset(&path, &dataset).unwrap();
        let reloaded = read_dataset(&path).unwrap();

        assert_eq!(reloaded, dataset);
    }
}
