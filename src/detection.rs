//! Numeric and separator-convention classification.
//!
//! Two levels of classification are provided:
//!
//! - Cell level: does a single value look numeric, and if so, is it written
//!   in the European convention (dot as thousands grouping, comma as decimal
//!   separator)?
//! - Column level: per-column boolean verdicts aggregated from a bounded
//!   row sample (first N rows), controlled by [`DetectionConfig`].
//!
//! All functions here are pure and total: they never error, never panic,
//! and never mutate their inputs. Verdicts are heuristic approximations and
//! may disagree with a minority of unsampled rows.

use crate::config::DetectionConfig;
use crate::constants::{CURRENCY_SYMBOLS, MAX_DECIMAL_DIGITS};
use crate::models::{ColumnKey, ColumnVerdict, Dataset};
use std::collections::HashMap;
use tracing::debug;

/// Remove currency symbols and all whitespace from a value.
pub(crate) fn strip_currency_and_whitespace(value: &str) -> String {
    value
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && !c.is_whitespace())
        .collect()
}

/// Check whether a cell value looks numeric once separators and currency
/// symbols are removed.
///
/// `None` (undefined cell) and the empty string fail closed. Otherwise the
/// value is cleaned of currency symbols, whitespace, commas and dots; what
/// remains must parse as a finite number. This is deliberately permissive:
/// it answers "could this be a number in either separator convention", not
/// "is this already a valid plain number".
pub fn is_numeric_value(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    if value.is_empty() {
        return false;
    }

    let cleaned: String = value
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && !c.is_whitespace() && *c != ',' && *c != '.')
        .collect();

    matches!(cleaned.parse::<f64>(), Ok(n) if n.is_finite())
}

/// Decide whether a numeric-looking value is written in the European
/// convention.
///
/// The rightmost separator in a numeric string is, in both conventions, the
/// decimal marker. A value is European when its last comma sits after its
/// last dot (or no dot exists at all) and the run after that comma is 1 to
/// [`MAX_DECIMAL_DIGITS`] digits. Values without a comma can never be
/// European: there is no comma-based decimal marker to observe.
///
/// Known ambiguity: a lone comma followed by exactly three digits (e.g.
/// `"1,234"`) passes the digit-count rule and is classified European, even
/// though it could equally be an English thousands-grouped integer. The
/// digit-count rule cannot distinguish the two; column-level aggregation is
/// what makes the heuristic usable in practice.
pub fn is_european_format(value: &str) -> bool {
    let cleaned = strip_currency_and_whitespace(value.trim());

    let comma_index = cleaned.rfind(',');
    let dot_index = cleaned.rfind('.');

    let tail_start = match (comma_index, dot_index) {
        // Comma after dot: comma is the decimal marker
        (Some(comma), Some(dot)) if comma > dot => comma + 1,
        // Lone comma, no dot at all: likely a decimal comma
        (Some(comma), None) => comma + 1,
        _ => return false,
    };

    let tail = &cleaned[tail_start..];
    !tail.is_empty() && tail.len() <= MAX_DECIMAL_DIGITS && tail.chars().all(|c| c.is_ascii_digit())
}

/// Detect which dataset columns look numeric.
///
/// Samples the first `min(sample_size, row count)` rows and keeps a column
/// when the fraction of defined, non-empty, numeric-looking sampled values
/// reaches the threshold. The output preserves the dataset's column order.
/// An empty dataset yields an empty result.
pub fn detect_numeric_columns(dataset: &Dataset, config: &DetectionConfig) -> Vec<ColumnKey> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let sample = dataset.sample(config.sample_size);
    let sample_len = sample.len();

    dataset
        .columns()
        .iter()
        .filter(|key| {
            let numeric_count = sample
                .iter()
                .filter(|row| is_numeric_value(row.get(key.as_str())))
                .count();

            let keep = numeric_count as f64 / sample_len as f64 >= config.threshold;
            debug!(
                column = %key,
                numeric_count,
                sample_len,
                keep,
                "numeric column verdict"
            );
            keep
        })
        .cloned()
        .collect()
}

/// Detect which of the given numeric columns use the European convention.
///
/// Uses the same sampling window as [`detect_numeric_columns`]. For each
/// column, only defined, non-empty, numeric-passing sampled values are
/// considered; a column with no such values gets a `false` verdict,
/// otherwise the verdict is true when the European fraction reaches the
/// threshold. An empty dataset yields an empty mapping.
pub fn detect_european_format(
    dataset: &Dataset,
    columns: &[ColumnKey],
    config: &DetectionConfig,
) -> HashMap<ColumnKey, bool> {
    let mut verdicts = HashMap::new();
    if dataset.is_empty() {
        return verdicts;
    }

    let sample = dataset.sample(config.sample_size);

    for key in columns {
        let values: Vec<&str> = sample
            .iter()
            .filter_map(|row| row.get(key.as_str()))
            .filter(|value| is_numeric_value(Some(value)))
            .collect();

        let verdict = if values.is_empty() {
            false
        } else {
            let european_count = values
                .iter()
                .filter(|value| is_european_format(value))
                .count();
            european_count as f64 / values.len() as f64 >= config.threshold
        };

        debug!(
            column = %key,
            values = values.len(),
            verdict,
            "European format verdict"
        );
        verdicts.insert(key.clone(), verdict);
    }

    verdicts
}

/// Compute the full verdict pair for every dataset column.
///
/// Convenience over the two detectors for report-style consumers: columns
/// that fail the numeric verdict get `is_european: false` without being
/// format-sampled. Output preserves the dataset's column order.
pub fn column_verdicts(dataset: &Dataset, config: &DetectionConfig) -> Vec<(ColumnKey, ColumnVerdict)> {
    let numeric_columns = detect_numeric_columns(dataset, config);
    let format_map = detect_european_format(dataset, &numeric_columns, config);

    dataset
        .columns()
        .iter()
        .map(|key| {
            let is_numeric = numeric_columns.contains(key);
            let is_european = is_numeric && format_map.get(key).copied().unwrap_or(false);
            (
                key.clone(),
                ColumnVerdict {
                    is_numeric,
                    is_european,
                },
            )
        })
        .collect()
}

/// Suggest a default conversion selection: the numeric columns whose
/// European verdict is true.
///
/// An empty suggestion means the dataset has nothing to convert and the
/// conversion step can be skipped entirely. The suggestion is only a
/// default; the final selection belongs to the caller.
pub fn suggest_conversion_columns(dataset: &Dataset, config: &DetectionConfig) -> Vec<ColumnKey> {
    let numeric_columns = detect_numeric_columns(dataset, config);
    if numeric_columns.is_empty() {
        return Vec::new();
    }

    let format_map = detect_european_format(dataset, &numeric_columns, config);
    numeric_columns
        .into_iter()
        .filter(|key| format_map.get(key).copied().unwrap_or(false))
        .collect()
}
