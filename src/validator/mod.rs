//! Expression validation
//!
//! The [`Validator`] splits an expression, hands each token to its
//! [`FieldRule`] and folds the results. With [`Evaluation::FailFast`] the
//! first failing field ends the run; with [`Evaluation::Exhaustive`] every
//! field is checked and all diagnostics are kept.

pub mod day_of_month;
pub mod day_of_week;
pub mod grammar;

pub use day_of_month::DayOfMonth;
pub use day_of_week::DayOfWeek;
pub use grammar::Grammar;

use crate::config::{Evaluation, ValidatorConfig};
use crate::diagnostic::Diagnostics;
use crate::error::Result;
use crate::splitter::split_fields;
use crate::types::{CronExpression, CronFields, Field, Verdict};

/// Grammar of a single field
///
/// Implementations record every failed check in `sink` and return whether
/// the token is acceptable.
pub trait FieldRule {
    /// Field this rule applies to
    fn field(&self) -> Field;

    /// Check one token
    fn check(&self, token: &str, sink: &mut Diagnostics) -> bool;
}

/// Quartz cron expression validator
///
/// Holds only configuration, so one instance can be shared and reused;
/// every call starts from an empty diagnostic list.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator without checking the configuration
    ///
    /// An inverted year window simply rejects every year value.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Create a validator, rejecting inconsistent configuration
    pub fn try_new(config: ValidatorConfig) -> Result<Self> {
        config.validate_config()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate and keep the full outcome
    pub fn check(&self, expression: &str) -> CronExpression {
        let mut sink = Diagnostics::new();

        let (fields, valid) = match split_fields(expression, self.config.whitespace) {
            Ok(fields) => {
                let valid = self.check_fields(&fields, &mut sink);
                (Some(fields), valid)
            }
            Err(diagnostic) => (None, sink.fail(diagnostic)),
        };

        // Every failing path records a diagnostic
        debug_assert_eq!(valid, sink.is_empty());

        tracing::debug!(
            expression,
            valid,
            fields = fields.as_ref().map_or(0, CronFields::field_count),
            diagnostics = sink.len(),
            "Validated cron expression"
        );

        CronExpression::new(expression, fields, valid, sink.into_vec())
    }

    /// Validate and return the verdict shaped by the `verbose` setting
    pub fn validate(&self, expression: &str) -> Verdict {
        self.check(expression).into_verdict(self.config.verbose)
    }

    pub fn is_valid(&self, expression: &str) -> bool {
        self.check(expression).is_valid()
    }

    fn check_fields(&self, fields: &CronFields, sink: &mut Diagnostics) -> bool {
        let years = Grammar::years(self.config.year_bounds());
        let day_of_month = DayOfMonth::new(&fields.day_of_week);
        let day_of_week = DayOfWeek::new(&fields.day_of_month);

        let mut valid = true;
        for (field, token) in fields.iter() {
            let rule: &dyn FieldRule = match field {
                Field::Seconds => &grammar::SECONDS,
                Field::Minutes => &grammar::MINUTES,
                Field::Hours => &grammar::HOURS,
                Field::DayOfMonth => &day_of_month,
                Field::Month => &grammar::MONTHS,
                Field::DayOfWeek => &day_of_week,
                Field::Year => &years,
            };
            debug_assert_eq!(rule.field(), field);

            if !rule.check(token, sink) {
                tracing::trace!(%field, token, "Field rejected");
                valid = false;
                if self.config.evaluation == Evaluation::FailFast {
                    break;
                }
            }
        }
        valid
    }
}
