//! Validator configuration

use crate::error::{QuartzError, Result};
use crate::types::{Bounds, Field};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// How far validation proceeds after a field fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Evaluation {
    /// Stop at the first failing field; diagnostics hold only that failure
    #[default]
    FailFast,
    /// Check every field and report all failures
    Exhaustive,
}

/// Which characters separate fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Whitespace {
    /// Split on single space characters only. Tabs are not separators and
    /// consecutive spaces produce empty fields.
    #[default]
    SingleSpace,
    /// Split on any run of whitespace
    Any,
}

/// Validator configuration
///
/// ```
/// use a3s_quartz::{Evaluation, ValidatorConfig};
///
/// let config = ValidatorConfig::default()
///     .with_verbose(true)
///     .with_evaluation(Evaluation::Exhaustive)
///     .with_current_year(2026);
/// assert_eq!(config.year_bounds().min, 2026);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Return `{valid, errors}` instead of a bare boolean
    pub verbose: bool,

    /// Fail-fast or exhaustive field evaluation
    pub evaluation: Evaluation,

    /// Field separator policy
    pub whitespace: Whitespace,

    /// Lowest accepted year (default: 1970)
    pub year_min: i64,

    /// Highest accepted year (default: 2199)
    pub year_max: i64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        let years = Field::Year.bounds();
        Self {
            verbose: false,
            evaluation: Evaluation::default(),
            whitespace: Whitespace::default(),
            year_min: years.min,
            year_max: years.max,
        }
    }
}

impl ValidatorConfig {
    /// Parse a JSON configuration document
    ///
    /// Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_config()?;
        Ok(config)
    }

    /// Default configuration with the lowest accepted year set to the
    /// current UTC year
    pub fn anchored_to_clock() -> Self {
        Self::default().with_current_year(i64::from(Utc::now().year()))
    }

    /// Check the configuration for inconsistent values
    pub fn validate_config(&self) -> Result<()> {
        if self.year_min > self.year_max {
            return Err(QuartzError::Config(format!(
                "yearMin ({}) must not exceed yearMax ({})",
                self.year_min, self.year_max
            )));
        }
        Ok(())
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Set the accepted year window
    pub fn with_year_range(mut self, min: i64, max: i64) -> Self {
        self.year_min = min;
        self.year_max = max;
        self
    }

    /// Reject years before `year`, keeping the upper bound
    pub fn with_current_year(mut self, year: i64) -> Self {
        self.year_min = year;
        self
    }

    /// Accepted year window
    pub fn year_bounds(&self) -> Bounds {
        Bounds::new(self.year_min, self.year_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert!(!config.verbose);
        assert_eq!(config.evaluation, Evaluation::FailFast);
        assert_eq!(config.whitespace, Whitespace::SingleSpace);
        assert_eq!(config.year_bounds(), Bounds::new(1970, 2199));
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::default()
            .with_verbose(true)
            .with_evaluation(Evaluation::Exhaustive)
            .with_whitespace(Whitespace::Any)
            .with_year_range(2000, 2100);
        assert!(config.verbose);
        assert_eq!(config.evaluation, Evaluation::Exhaustive);
        assert_eq!(config.whitespace, Whitespace::Any);
        assert_eq!(config.year_bounds(), Bounds::new(2000, 2100));
    }

    #[test]
    fn test_with_current_year_keeps_upper_bound() {
        let config = ValidatorConfig::default().with_current_year(2026);
        assert_eq!(config.year_bounds(), Bounds::new(2026, 2199));
    }

    #[test]
    fn test_anchored_to_clock() {
        let config = ValidatorConfig::anchored_to_clock();
        assert_eq!(config.year_min, i64::from(Utc::now().year()));
        assert_eq!(config.year_max, 2199);
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            ValidatorConfig::from_json(r#"{"verbose": true, "evaluation": "exhaustive"}"#)
                .unwrap();
        assert!(config.verbose);
        assert_eq!(config.evaluation, Evaluation::Exhaustive);
        assert_eq!(config.whitespace, Whitespace::SingleSpace);
        assert_eq!(config.year_min, 1970);
    }

    #[test]
    fn test_from_json_full() {
        let config = ValidatorConfig::from_json(
            r#"{"verbose": false, "whitespace": "any", "yearMin": 2020, "yearMax": 2030}"#,
        )
        .unwrap();
        assert_eq!(config.whitespace, Whitespace::Any);
        assert_eq!(config.year_bounds(), Bounds::new(2020, 2030));
    }

    #[test]
    fn test_from_json_rejects_inverted_years() {
        let err = ValidatorConfig::from_json(r#"{"yearMin": 2100, "yearMax": 2000}"#).unwrap_err();
        assert!(matches!(err, QuartzError::Config(_)));
        assert!(err.to_string().contains("yearMin"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ValidatorConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, QuartzError::Serialization(_)));
    }

    #[test]
    fn test_serialize_roundtrip_keys() {
        let value = serde_json::to_value(ValidatorConfig::default()).unwrap();
        assert_eq!(value["evaluation"], "failFast");
        assert_eq!(value["whitespace"], "singleSpace");
        assert_eq!(value["yearMax"], 2199);
    }
}
