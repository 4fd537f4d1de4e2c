//! Detect command implementation
//!
//! Loads a CSV file, computes per-column numeric/European verdicts from the
//! sampled head of the dataset, and prints a report together with the
//! suggested conversion selection.

use super::shared::{read_dataset, setup_logging};
use crate::cli::args::{DetectArgs, OutputFormat};
use crate::config::DetectionConfig;
use crate::detection::column_verdicts;
use crate::models::{ColumnKey, ColumnVerdict, Dataset};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// Machine-readable detection report
#[derive(Debug, Serialize)]
pub struct DetectionReport {
    pub rows_total: usize,
    pub rows_sampled: usize,
    pub columns: Vec<ColumnReport>,
    pub suggested_columns: Vec<ColumnKey>,
}

/// Per-column entry of the detection report
#[derive(Debug, Serialize)]
pub struct ColumnReport {
    pub column: ColumnKey,
    #[serde(flatten)]
    pub verdict: ColumnVerdict,
}

/// Detect command runner
pub fn run_detect(args: DetectArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let dataset = read_dataset(&args.input)?;
    let config = args.detection_config();

    info!(
        rows = dataset.len(),
        sample_size = config.sample_size,
        threshold = config.threshold,
        "analyzing dataset"
    );

    let report = build_report(&dataset, &config);

    match args.output_format {
        OutputFormat::Human => print_human_report(&report, args.quiet),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::configuration(format!("Failed to encode report: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

pub(crate) fn build_report(dataset: &Dataset, config: &DetectionConfig) -> DetectionReport {
    let verdicts = column_verdicts(dataset, config);
    let suggested_columns = verdicts
        .iter()
        .filter(|(_, verdict)| verdict.is_numeric && verdict.is_european)
        .map(|(key, _)| key.clone())
        .collect();

    DetectionReport {
        rows_total: dataset.len(),
        rows_sampled: dataset.sample(config.sample_size).len(),
        columns: verdicts
            .into_iter()
            .map(|(column, verdict)| ColumnReport { column, verdict })
            .collect(),
        suggested_columns,
    }
}

fn print_human_report(report: &DetectionReport, quiet: bool) {
    if quiet {
        return;
    }

    println!(
        "Analyzed {} of {} rows",
        report.rows_sampled, report.rows_total
    );
    println!();

    for entry in &report.columns {
        let classification = if !entry.verdict.is_numeric {
            "text".dimmed()
        } else if entry.verdict.is_european {
            "numeric, European format".yellow()
        } else {
            "numeric, English format".green()
        };
        println!("  {:<24} {}", entry.column.as_str(), classification);
    }

    println!();
    if report.suggested_columns.is_empty() {
        println!("{}", "No European-formatted columns detected; nothing to convert.".green());
    } else {
        let names: Vec<&str> = report
            .suggested_columns
            .iter()
            .map(ColumnKey::as_str)
            .collect();
        println!(
            "Suggested conversion columns: {}",
            names.join(", ").yellow().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report() {
        let dataset = Dataset::from_rows(vec![
            vec![("name", "A"), ("price", "1.234,56"), ("qty", "100")],
            vec![("name", "B"), ("price", "2.345,67"), ("qty", "200")],
        ]);

        let report = build_report(&dataset, &DetectionConfig::default());

        assert_eq!(report.rows_total, 2);
        assert_eq!(report.rows_sampled, 2);
        assert_eq!(report.columns.len(), 3);
        assert_eq!(report.suggested_columns, vec![ColumnKey::from("price")]);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let dataset = Dataset::from_rows(vec![vec![("price", "1.234,56")]]);
        let report = build_report(&dataset, &DetectionConfig::default());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows_total"], 1);
        assert_eq!(json["columns"][0]["column"], "price");
        assert_eq!(json["columns"][0]["is_numeric"], true);
        assert_eq!(json["columns"][0]["is_european"], true);
    }
}
