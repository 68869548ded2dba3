//! # a3s-quartz
//!
//! Syntax and semantic validation for Quartz-style cron expressions.
//!
//! ## Overview
//!
//! A Quartz expression has six or seven space-separated fields: seconds,
//! minutes, hours, day-of-month, month, day-of-week and an optional year.
//! `a3s-quartz` checks each field against its grammar and the pairing rule
//! between day-of-month and day-of-week, and reports what failed. It does not
//! compute fire times.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_quartz::{validate, ValidatorConfig, Verdict};
//!
//! // Non-verbose: a bare boolean
//! let verdict = validate("0 15 10 ? * MON-FRI", &ValidatorConfig::default());
//! assert_eq!(verdict, Verdict::Flag(true));
//!
//! // Verbose: validity plus messages
//! let config = ValidatorConfig::default().with_verbose(true);
//! let verdict = validate("61 0 12 * * ?", &config);
//! assert!(!verdict.is_valid());
//! assert_eq!(
//!     verdict.errors()[0].to_string(),
//!     "Minute and Second values must be between 0 and 59 and Hour Values must be between 0 and 23"
//! );
//! ```
//!
//! ## Architecture
//!
//! - **split_fields**: turns the raw string into positional tokens
//! - **FieldRule** trait: per-field grammar; implemented by `Grammar`
//!   (seconds, minutes, hours, month, year), `DayOfMonth` and `DayOfWeek`
//! - **Validator**: runs the rules fail-fast or exhaustively
//! - **Diagnostic**: closed set of failure kinds with structured payload

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod splitter;
pub mod types;
pub mod validator;

pub use config::{Evaluation, ValidatorConfig, Whitespace};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use error::{QuartzError, Result};
pub use splitter::split_fields;
pub use types::{Bounds, CronExpression, CronFields, Field, Report, Verdict};
pub use validator::{DayOfMonth, DayOfWeek, FieldRule, Grammar, Validator};

/// Validate `expression` with the given configuration
///
/// Never fails: a rejected expression is reported through the verdict.
pub fn validate(expression: &str, config: &ValidatorConfig) -> Verdict {
    Validator::new(config.clone()).validate(expression)
}
