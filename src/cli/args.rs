//! Command-line argument definitions for the number-format processor
//!
//! Defines the CLI interface using the clap derive API: a `detect` command
//! that reports per-column verdicts, and a `convert` command that rewrites
//! selected columns and writes a new CSV.

use crate::config::DetectionConfig;
use crate::constants::{DEFAULT_PREVIEW_ROWS, DETECTION_SAMPLE_SIZE, DETECTION_THRESHOLD};
use crate::models::ColumnKey;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// CLI arguments for the number-format processor
///
/// Detects CSV columns written in European numeric convention (dot as
/// thousands separator, comma as decimal separator) and rewrites them into
/// English convention.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "numfmt-processor",
    version,
    about = "Detect and convert European-formatted numeric CSV columns to English format",
    long_about = "Inspects the head of a CSV file to decide, per column, whether values look \
                  numeric and whether they use the European separator convention (1.234,56), \
                  then rewrites the selected columns into English convention (1,234.56). \
                  Non-numeric cells are never altered."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the number-format processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Report per-column numeric/European verdicts for a CSV file
    Detect(DetectArgs),
    /// Convert European-formatted columns of a CSV file to English format
    Convert(ConvertArgs),
}

/// Arguments for the detect command
#[derive(Debug, Clone, Parser)]
pub struct DetectArgs {
    /// Input CSV file to analyze
    #[arg(value_name = "FILE", help = "Input CSV file to analyze")]
    pub input: PathBuf,

    /// Detection threshold
    ///
    /// Minimum fraction of sampled values that must satisfy a predicate for
    /// a column-level verdict to be true.
    #[arg(
        short = 't',
        long = "threshold",
        value_name = "FRACTION",
        default_value_t = DETECTION_THRESHOLD,
        help = "Detection threshold (fraction of sampled values, 0-1)"
    )]
    pub threshold: f64,

    /// Sample size for column analysis
    ///
    /// Column verdicts are computed from the first N rows only; rows beyond
    /// the window do not influence the verdict.
    #[arg(
        short = 's',
        long = "sample-size",
        value_name = "ROWS",
        default_value_t = DETECTION_SAMPLE_SIZE,
        help = "Number of leading rows sampled for column verdicts"
    )]
    pub sample_size: usize,

    /// Output format for the detection report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the detection report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input CSV file to convert
    #[arg(value_name = "FILE", help = "Input CSV file to convert")]
    pub input: PathBuf,

    /// Output CSV file
    ///
    /// Required unless --dry-run is given. Will not be overwritten unless
    /// --force is passed.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output CSV file for the converted dataset"
    )]
    pub output: Option<PathBuf>,

    /// Columns to convert (comma-separated list)
    ///
    /// If not specified, the columns whose sampled values look European are
    /// converted (the detector's suggested selection).
    #[arg(
        short = 'c',
        long = "columns",
        value_name = "LIST",
        help = "Comma-separated list of columns to convert (default: auto-detected)"
    )]
    pub columns: Option<ColumnList>,

    /// Detection threshold used when auto-selecting columns
    #[arg(
        short = 't',
        long = "threshold",
        value_name = "FRACTION",
        default_value_t = DETECTION_THRESHOLD,
        help = "Detection threshold (fraction of sampled values, 0-1)"
    )]
    pub threshold: f64,

    /// Sample size used when auto-selecting columns
    #[arg(
        short = 's',
        long = "sample-size",
        value_name = "ROWS",
        default_value_t = DETECTION_SAMPLE_SIZE,
        help = "Number of leading rows sampled for column verdicts"
    )]
    pub sample_size: usize,

    /// Number of rows shown in the before/after preview
    #[arg(
        long = "preview",
        value_name = "ROWS",
        default_value_t = DEFAULT_PREVIEW_ROWS,
        help = "Number of rows shown in the before/after preview"
    )]
    pub preview_rows: usize,

    /// Preview the conversion without writing any output
    #[arg(
        long = "dry-run",
        help = "Show what would be converted without writing output"
    )]
    pub dry_run: bool,

    /// Force overwrite of an existing output file
    #[arg(long = "force", help = "Force overwrite of an existing output file")]
    pub force: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated column lists
#[derive(Debug, Clone)]
pub struct ColumnList {
    pub columns: Vec<ColumnKey>,
}

impl FromStr for ColumnList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let columns: Vec<ColumnKey> = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ColumnKey::from)
            .collect();

        if columns.is_empty() {
            return Err(Error::configuration("Column list cannot be empty"));
        }

        Ok(ColumnList { columns })
    }
}

fn validate_detection_params(threshold: f64, sample_size: usize) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) || threshold.is_nan() {
        return Err(Error::configuration(format!(
            "Threshold must be between 0 and 1, got {threshold}"
        )));
    }

    if sample_size == 0 {
        return Err(Error::configuration(
            "Sample size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

fn validate_input_file(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }

    if !input.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }

    Ok(())
}

impl DetectArgs {
    /// Validate the detect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_detection_params(self.threshold, self.sample_size)
    }

    /// Build the detection configuration from the CLI parameters
    pub fn detection_config(&self) -> DetectionConfig {
        DetectionConfig::default()
            .with_sample_size(self.sample_size)
            .with_threshold(self.threshold)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_detection_params(self.threshold, self.sample_size)?;

        if self.output.is_none() && !self.dry_run {
            return Err(Error::configuration(
                "An output file is required unless --dry-run is given".to_string(),
            ));
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build the detection configuration from the CLI parameters
    pub fn detection_config(&self) -> DetectionConfig {
        DetectionConfig::default()
            .with_sample_size(self.sample_size)
            .with_threshold(self.threshold)
    }

    /// Get the explicitly requested columns, if any
    pub fn get_columns(&self) -> Option<Vec<ColumnKey>> {
        self.columns.as_ref().map(|list| list.columns.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_column_list_parsing() {
        // Valid single column
        let result = ColumnList::from_str("price").unwrap();
        assert_eq!(result.columns, vec![ColumnKey::from("price")]);

        // Valid multiple columns
        let result = ColumnList::from_str("price,discount").unwrap();
        assert_eq!(
            result.columns,
            vec![ColumnKey::from("price"), ColumnKey::from("discount")]
        );

        // Valid with spaces
        let result = ColumnList::from_str(" price , discount ").unwrap();
        assert_eq!(
            result.columns,
            vec![ColumnKey::from("price"), ColumnKey::from("discount")]
        );

        // Empty string
        assert!(ColumnList::from_str("").is_err());

        // Only commas
        assert!(ColumnList::from_str(",,,").is_err());
    }

    #[test]
    fn test_detect_args_validation() {
        let input = NamedTempFile::new().unwrap();

        let args = DetectArgs {
            input: input.path().to_path_buf(),
            threshold: 0.4,
            sample_size: 100,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        // Threshold out of range
        let mut invalid = args.clone();
        invalid.threshold = 1.5;
        assert!(invalid.validate().is_err());

        // Zero sample size
        let mut invalid = args.clone();
        invalid.sample_size = 0;
        assert!(invalid.validate().is_err());

        // Nonexistent input
        let mut invalid = args.clone();
        invalid.input = PathBuf::from("/nonexistent/input.csv");
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_convert_args_require_output_unless_dry_run() {
        let input = NamedTempFile::new().unwrap();

        let args = ConvertArgs {
            input: input.path().to_path_buf(),
            output: None,
            columns: None,
            threshold: 0.4,
            sample_size: 100,
            preview_rows: 5,
            dry_run: false,
            force: false,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_err());

        let mut dry_run = args.clone();
        dry_run.dry_run = true;
        assert!(dry_run.validate().is_ok());

        let mut with_output = args;
        with_output.output = Some(input.path().with_extension("out.csv"));
        assert!(with_output.validate().is_ok());
    }

    #[test]
    fn test_detection_config_from_args() {
        let input = NamedTempFile::new().unwrap();
        let args = DetectArgs {
            input: input.path().to_path_buf(),
            threshold: 0.7,
            sample_size: 25,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        let config = args.detection_config();
        assert_eq!(config.threshold, 0.7);
        assert_eq!(config.sample_size, 25);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(3, false), "trace");
        assert_eq!(log_level(2, true), "error");
    }
}
