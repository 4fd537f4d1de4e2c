//! End-to-end tests for the CSV detect/convert pipeline
//!
//! Exercises the CLI command functions against real files: write a CSV,
//! run detection and conversion, read the output back and check both the
//! converted and the untouched columns.

use anyhow::Result;
use numfmt_processor::cli::args::ConvertArgs;
use numfmt_processor::cli::commands::shared::{read_dataset, write_dataset};
use numfmt_processor::cli::commands::run_convert;
use numfmt_processor::{
    ColumnKey, Dataset, DetectionConfig, detect_numeric_columns, suggest_conversion_columns,
};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_sample_csv(path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "name,price,quantity,notes")?;
    writeln!(file, "Product A,\"1.234,56\",100,first batch")?;
    writeln!(file, "Product B,\"2.345,67\",200,")?;
    writeln!(file, "Product C,\"15.000,00\",300,restock")?;
    Ok(())
}

fn convert_args(input: PathBuf, output: PathBuf) -> ConvertArgs {
    ConvertArgs {
        input,
        output: Some(output),
        columns: None,
        threshold: 0.4,
        sample_size: 100,
        preview_rows: 0,
        dry_run: false,
        force: false,
        verbose: 0,
        quiet: true,
    }
}

#[test]
fn test_detection_on_csv_file() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("input.csv");
    write_sample_csv(&input)?;

    let dataset = read_dataset(&input)?;
    let config = DetectionConfig::default();

    let numeric = detect_numeric_columns(&dataset, &config);
    let numeric_keys: Vec<&str> = numeric.iter().map(ColumnKey::as_str).collect();
    assert_eq!(numeric_keys, vec!["price", "quantity"]);

    let suggested = suggest_conversion_columns(&dataset, &config);
    let suggested_keys: Vec<&str> = suggested.iter().map(ColumnKey::as_str).collect();
    assert_eq!(suggested_keys, vec!["price"]);

    Ok(())
}

#[test]
fn test_convert_command_auto_detection() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    write_sample_csv(&input)?;

    run_convert(convert_args(input.clone(), output.clone()))?;

    let original = read_dataset(&input)?;
    let converted = read_dataset(&output)?;

    // Selected column rewritten
    assert_eq!(converted.rows()[0].get("price"), Some("1,234.56"));
    assert_eq!(converted.rows()[1].get("price"), Some("2,345.67"));
    assert_eq!(converted.rows()[2].get("price"), Some("15,000.00"));

    // Everything else byte-identical
    for (before, after) in original.rows().iter().zip(converted.rows()) {
        for key in ["name", "quantity", "notes"] {
            assert_eq!(before.get(key), after.get(key));
        }
    }

    Ok(())
}

#[test]
fn test_convert_command_explicit_columns() -> Result<()> {
    use numfmt_processor::cli::args::ColumnList;
    use std::str::FromStr;

    let dir = TempDir::new()?;
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    write_sample_csv(&input)?;

    let mut args = convert_args(input, output.clone());
    args.columns = Some(ColumnList::from_str("price")?);
    run_convert(args)?;

    let converted = read_dataset(&output)?;
    assert_eq!(converted.rows()[0].get("price"), Some("1,234.56"));
    assert_eq!(converted.rows()[0].get("quantity"), Some("100"));

    Ok(())
}

#[test]
fn test_convert_command_unknown_column_fails() -> Result<()> {
    use numfmt_processor::cli::args::ColumnList;
    use std::str::FromStr;

    let dir = TempDir::new()?;
    let input = dir.path().join("input.csv");
    write_sample_csv(&input)?;

    let mut args = convert_args(input, dir.path().join("output.csv"));
    args.columns = Some(ColumnList::from_str("no_such_column")?);

    assert!(run_convert(args).is_err());
    Ok(())
}

#[test]
fn test_convert_command_refuses_existing_output() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    write_sample_csv(&input)?;
    std::fs::write(&output, "already here")?;

    let args = convert_args(input.clone(), output.clone());
    assert!(run_convert(args).is_err());

    // With --force the file is replaced
    let mut forced = convert_args(input, output.clone());
    forced.force = true;
    run_convert(forced)?;

    let converted = read_dataset(&output)?;
    assert_eq!(converted.rows()[0].get("price"), Some("1,234.56"));
    Ok(())
}

#[test]
fn test_convert_command_dry_run_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    write_sample_csv(&input)?;

    let mut args = convert_args(input, output.clone());
    args.dry_run = true;
    run_convert(args)?;

    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_write_then_detect_nothing_european() -> Result<()> {
    // A converted dataset no longer suggests any columns
    let dir = TempDir::new()?;
    let path = dir.path().join("english.csv");

    let dataset = Dataset::from_rows(vec![
        vec![("name", "A"), ("price", "1,234.56")],
        vec![("name", "B"), ("price", "2,345.67")],
    ]);
    write_dataset(&path, &dataset)?;

    let reloaded = read_dataset(&path)?;
    let suggested = suggest_conversion_columns(&reloaded, &DetectionConfig::default());
    assert!(suggested.is_empty());

    Ok(())
}
