//! European-to-English numeric rewriting.
//!
//! The value-level converter treats every dot in a European value as
//! thousands grouping and the (single) comma as the decimal marker, then
//! reassembles the number with comma grouping and a dot decimal. Values
//! that fail validation pass through unchanged: conversion must never
//! fabricate a plausible-looking but wrong number from garbage input.
//!
//! The dataset-level converter applies the value converter to the selected
//! columns only, copying every row. A cell that cannot be converted keeps
//! its original value and is logged as a warning; a single bad cell never
//! aborts the dataset pass.

use crate::detection::strip_currency_and_whitespace;
use crate::error::{Error, Result};
use crate::models::{ColumnKey, Dataset, Row, TargetFormat};
use tracing::warn;

/// Convert a single European-convention value to English convention.
///
/// Currency symbols and whitespace are stripped, dots are removed as
/// thousands grouping, the comma becomes the decimal point, and the integer
/// part is re-grouped with commas. Invalid input (non-numeric remainder,
/// multiple commas, non-finite result) is returned unchanged.
///
/// ```
/// use numfmt_processor::convert_european_to_english;
///
/// assert_eq!(convert_european_to_english("1.234,56"), "1,234.56");
/// assert_eq!(convert_european_to_english("€15.000,00"), "15,000.00");
/// assert_eq!(convert_european_to_english("abc"), "abc");
/// ```
pub fn convert_european_to_english(value: &str) -> String {
    try_convert_cell(value).unwrap_or_else(|_| value.to_string())
}

/// Fallible single-cell conversion.
///
/// The error path exists so the dataset pass can degrade a failed cell to
/// identity while emitting an observability event; callers that just want
/// the total function use [`convert_european_to_english`].
pub(crate) fn try_convert_cell(value: &str) -> Result<String> {
    let cleaned = strip_currency_and_whitespace(value);

    // More than one comma is not a well-defined European value; pass it
    // through rather than guessing which comma is the decimal marker.
    if cleaned.matches(',').count() > 1 {
        return Err(Error::cell_not_convertible(value));
    }

    // Dots are thousands grouping, the comma is the decimal marker
    let standard = cleaned.replace('.', "").replacen(',', ".", 1);

    match standard.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => {}
        _ => return Err(Error::cell_not_convertible(value)),
    }

    let (integer_part, decimal_part) = match standard.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (standard.as_str(), None),
    };

    let grouped = group_thousands(integer_part);
    Ok(match decimal_part {
        Some(decimal) => format!("{grouped}.{decimal}"),
        None => grouped,
    })
}

/// Insert comma thousands separators into an integer part, right-to-left in
/// groups of three. A leading sign is preserved and never grouped against.
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => match integer_part.strip_prefix('+') {
            Some(rest) => ("+", rest),
            None => ("", integer_part),
        },
    };

    if digits.len() <= 3 {
        return integer_part.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}")
}

/// Convert a row's selected cells, leaving everything else untouched.
///
/// Exposed so callers driving a long dataset pass (e.g. with a progress
/// bar) can convert row by row; [`convert_data_format`] is the whole-dataset
/// form.
pub fn convert_row(row: &Row, columns: &[ColumnKey]) -> Row {
    let mut converted = row.clone();
    for column in columns {
        let Some(value) = row.get(column.as_str()) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        match try_convert_cell(value) {
            Ok(rewritten) => converted.set(column.clone(), rewritten),
            Err(error) => {
                warn!(
                    column = %column,
                    value,
                    %error,
                    "failed to convert cell; keeping original value"
                );
            }
        }
    }
    converted
}

/// Rewrite the selected columns of a dataset from European to English
/// convention.
///
/// Returns a new dataset; the input and its rows are never mutated. Columns
/// outside the selection, undefined cells, and empty cells pass through
/// unchanged. Per-cell failures are logged and degrade to the original
/// value.
pub fn convert_data_format(
    dataset: &Dataset,
    columns: &[ColumnKey],
    target: TargetFormat,
) -> Dataset {
    // Single supported target; the match keeps the contract explicit
    let TargetFormat::English = target;

    let mut converted = Dataset::new(dataset.columns().to_vec());
    for row in dataset.rows() {
        converted.push_row(convert_row(row, columns));
    }
    converted
}

/// Pair the first `rows` dataset rows with their converted form.
///
/// Produces the before/after preview shown to a human ahead of a full
/// conversion. Pure: neither the dataset nor its rows are modified.
pub fn preview_conversion(
    dataset: &Dataset,
    columns: &[ColumnKey],
    rows: usize,
) -> Vec<(Row, Row)> {
    dataset
        .sample(rows)
        .iter()
        .map(|row| (row.clone(), convert_row(row, columns)))
        .collect()
}
