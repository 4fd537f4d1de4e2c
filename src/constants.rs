//! Application constants for the number-format processor
//!
//! This module contains the heuristic tuning constants and character sets
//! used by the detection and conversion logic. The detection constants are
//! defaults only; callers can override them through `DetectionConfig`.

// =============================================================================
// Detection Heuristics
// =============================================================================

/// Maximum number of rows inspected when computing column-level verdicts.
///
/// Column verdicts are an approximation derived from the head of the dataset.
/// Rows beyond this window may disagree with the verdict; that is an accepted
/// limitation of the sampling heuristic, not an error.
pub const DETECTION_SAMPLE_SIZE: usize = 100;

/// Minimum fraction of sampled values that must satisfy a predicate for the
/// column-level verdict to be true.
pub const DETECTION_THRESHOLD: f64 = 0.4;

/// Maximum number of digits accepted after a decimal comma.
///
/// European decimals are conventionally 1-2 digits; 3 is allowed for
/// tolerance. A longer digit run after a comma is treated as thousands
/// grouping, not a decimal tail.
pub const MAX_DECIMAL_DIGITS: usize = 3;

// =============================================================================
// Value Cleaning
// =============================================================================

/// Currency symbols stripped before numeric classification and conversion.
pub const CURRENCY_SYMBOLS: &[char] = &['$', '€', '¥', '£'];

// =============================================================================
// CLI Defaults
// =============================================================================

/// Default number of rows shown in the before/after conversion preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
