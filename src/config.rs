//! Configuration for the column-level detection heuristics.
//!
//! Sample size and threshold are deliberately exposed as configuration
//! rather than buried in the detection logic, so callers can tune the
//! sensitivity and tests can exercise the heuristics in isolation.

use crate::constants::{DETECTION_SAMPLE_SIZE, DETECTION_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Tuning parameters for column-level detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Maximum number of rows inspected per dataset (first-N window).
    pub sample_size: usize,

    /// Minimum fraction of sampled values that must satisfy the predicate
    /// for a column-level verdict to be true.
    pub threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sample_size: DETECTION_SAMPLE_SIZE,
            threshold: DETECTION_THRESHOLD,
        }
    }
}

impl DetectionConfig {
    /// Create configuration with a custom sample size
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Create configuration with a custom detection threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.sample_size, 100);
        assert_eq!(config.threshold, 0.4);
    }

    #[test]
    fn test_builder_methods() {
        let config = DetectionConfig::default()
            .with_sample_size(10)
            .with_threshold(0.8);
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.threshold, 0.8);
    }
}
