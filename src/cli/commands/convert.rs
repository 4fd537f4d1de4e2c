//! Convert command implementation
//!
//! Loads a CSV file, picks the columns to convert (explicit selection or
//! the detector's suggestion), shows a before/after preview, and writes the
//! converted dataset to a new CSV file.

use super::shared::{create_progress_bar, read_dataset, setup_logging, write_dataset};
use crate::cli::args::ConvertArgs;
use crate::conversion::{convert_row, preview_conversion};
use crate::detection::suggest_conversion_columns;
use crate::models::{ColumnKey, Dataset};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Convert command runner
///
/// Orchestrates the conversion workflow:
/// 1. Load the input CSV
/// 2. Resolve the column selection (explicit or auto-detected)
/// 3. Preview the first rows before/after
/// 4. Convert all rows and write the output CSV
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    args.validate()?;

    let dataset = read_dataset(&args.input)?;
    let columns = resolve_columns(&args, &dataset)?;

    if columns.is_empty() {
        info!("no European-formatted columns detected; passing data through unchanged");
        if !args.quiet {
            println!(
                "{}",
                "No columns to convert; output matches input.".green()
            );
        }
    } else {
        debug!(?columns, "converting columns");
        if !args.quiet && args.preview_rows > 0 {
            print_preview(&dataset, &columns, args.preview_rows);
        }
    }

    if args.dry_run {
        if !args.quiet {
            println!("{}", "Dry run: no output written.".dimmed());
        }
        return Ok(());
    }

    // validate() guarantees an output path when not a dry run
    let output = args
        .output
        .as_ref()
        .ok_or_else(|| Error::configuration("Missing output path".to_string()))?;

    if output.exists() && !args.force {
        return Err(Error::OutputExists {
            path: output.clone(),
        });
    }

    let converted = convert_with_progress(&dataset, &columns, args.show_progress());
    write_dataset(output, &converted)?;

    info!(
        rows = converted.len(),
        columns = columns.len(),
        "conversion complete"
    );
    if !args.quiet {
        println!(
            "{} Converted {} column(s) across {} row(s) in {} -> {}",
            "Done.".green().bold(),
            columns.len(),
            converted.len(),
            HumanDuration(start_time.elapsed()),
            output.display()
        );
    }

    Ok(())
}

/// Resolve the conversion selection: explicit columns (validated against
/// the input header) or the detector's suggestion.
fn resolve_columns(args: &ConvertArgs, dataset: &Dataset) -> Result<Vec<ColumnKey>> {
    match args.get_columns() {
        Some(columns) => {
            for column in &columns {
                if !dataset.columns().contains(column) {
                    return Err(Error::column_not_found(column.as_str()));
                }
            }
            Ok(columns)
        }
        None => {
            let config = args.detection_config();
            let suggested = suggest_conversion_columns(dataset, &config);
            info!(?suggested, "auto-detected conversion columns");
            Ok(suggested)
        }
    }
}

/// Convert every row, reporting progress on large datasets.
fn convert_with_progress(
    dataset: &Dataset,
    columns: &[ColumnKey],
    show_progress: bool,
) -> Dataset {
    let pb = (show_progress && dataset.len() > 1000)
        .then(|| create_progress_bar(dataset.len() as u64, "Converting rows"));

    let mut converted = Dataset::new(dataset.columns().to_vec());
    for row in dataset.rows() {
        converted.push_row(convert_row(row, columns));
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }
    converted
}

/// Print the before/after preview for the selected columns.
fn print_preview(dataset: &Dataset, columns: &[ColumnKey], rows: usize) {
    let preview = preview_conversion(dataset, columns, rows);
    if preview.is_empty() {
        return;
    }

    println!("Preview (first {} row(s)):", preview.len());
    println!(
        "  {:<24} {:<20} {}",
        "column".bold(),
        "before".bold(),
        "after".bold()
    );
    for column in columns {
        for (before, after) in &preview {
            println!(
                "  {:<24} {:<20} {}",
                column.as_str(),
                before.get(column.as_str()).unwrap_or(""),
                after.get(column.as_str()).unwrap_or("").green()
            );
        }
    }
    println!();
}
