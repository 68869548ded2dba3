//! Validation diagnostics
//!
//! Every failed check is recorded as a [`Diagnostic`] carrying the field, the
//! offending token and, where it applies, the expected bounds. The
//! human-readable message is produced by `Display`.

use crate::types::Field;
use serde::Serialize;
use std::fmt;

const TIME_MESSAGE: &str =
    "Minute and Second values must be between 0 and 59 and Hour Values must be between 0 and 23";

const MONTH_SYNTAX_MESSAGE: &str = "Month values must be JAN, FEB, MAR, APR, MAY, JUN, JUL, AUG, SEP, OCT, NOV, DEC OR between 1 and 12";

const DAY_OF_WEEK_SYNTAX_MESSAGE: &str =
    "Day-of-Week values must be SUN, MON, TUE, WED, THU, FRI, SAT OR between 1 and 7, - * ? / L #";

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// The expression contains no whitespace at all
    MalformedNoWhitespace,

    /// Splitting did not produce 6 or 7 fields
    MalformedFieldCount { count: usize },

    /// A `/`, `-` or `#` sub-expression does not have exactly two operands,
    /// or a step base is not below its increment
    #[serde(rename_all = "camelCase")]
    WrongExpression { field: Field, token: String },

    /// A value falls outside the field's inclusive bounds
    #[serde(rename_all = "camelCase")]
    OutOfRange {
        field: Field,
        token: String,
        min: i64,
        max: i64,
    },

    /// A non-numeric value is not one of the field's names
    #[serde(rename_all = "camelCase")]
    Syntax { field: Field, token: String },

    /// The occurrence after `#` is not between 1 and 5
    NthWeekday { token: String },

    /// Day-of-month and day-of-week do not use `?` in exactly one of them
    #[serde(rename_all = "camelCase")]
    CrossFieldConflict {
        day_of_month: String,
        day_of_week: String,
    },
}

impl Diagnostic {
    /// Field the diagnostic refers to, if it is tied to a single one
    pub fn field(&self) -> Option<Field> {
        match self {
            Diagnostic::WrongExpression { field, .. }
            | Diagnostic::OutOfRange { field, .. }
            | Diagnostic::Syntax { field, .. } => Some(*field),
            Diagnostic::NthWeekday { .. } => Some(Field::DayOfWeek),
            Diagnostic::MalformedNoWhitespace
            | Diagnostic::MalformedFieldCount { .. }
            | Diagnostic::CrossFieldConflict { .. } => None,
        }
    }

    /// Stable name of the diagnostic kind
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::MalformedNoWhitespace => "malformedNoWhitespace",
            Diagnostic::MalformedFieldCount { .. } => "malformedFieldCount",
            Diagnostic::WrongExpression { .. } => "wrongExpression",
            Diagnostic::OutOfRange { .. } => "outOfRange",
            Diagnostic::Syntax { .. } => "syntax",
            Diagnostic::NthWeekday { .. } => "nthWeekday",
            Diagnostic::CrossFieldConflict { .. } => "crossFieldConflict",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedNoWhitespace => write!(f, "Unexpected Expression: no spaces"),
            Diagnostic::MalformedFieldCount { .. } => {
                write!(f, "Unexpected Expression: out of boundaries")
            }
            Diagnostic::WrongExpression { .. } => write!(f, "wrong expression"),
            Diagnostic::OutOfRange {
                field, min, max, ..
            } => match field {
                Field::Seconds | Field::Minutes | Field::Hours => f.write_str(TIME_MESSAGE),
                Field::DayOfMonth => {
                    write!(f, "Day of month values must be between {} and {}", min, max)
                }
                Field::Month => write!(f, "Month values must be between {} and {}", min, max),
                Field::DayOfWeek => {
                    write!(f, "Day-of-Week values must be between {} and {}", min, max)
                }
                Field::Year => write!(
                    f,
                    "(Year) - Unsupported value for field. Possible values are {}-{} , - * /",
                    min, max
                ),
            },
            Diagnostic::Syntax { field, token } => match field {
                Field::Month => f.write_str(MONTH_SYNTAX_MESSAGE),
                Field::DayOfWeek => f.write_str(DAY_OF_WEEK_SYNTAX_MESSAGE),
                _ => write!(f, "Unsupported value '{}' for {}", token, field),
            },
            Diagnostic::NthWeekday { .. } => {
                write!(f, "A numeric value between 1 and 5 must follow the # option")
            }
            Diagnostic::CrossFieldConflict { .. } => {
                write!(f, "? can only be specified for Day-of-Month -OR- Day-of-Week")
            }
        }
    }
}

/// Ordered accumulator for one validation call
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check and return `false`, so grammar code can
    /// `return sink.fail(..)`
    pub fn fail(&mut self, diagnostic: Diagnostic) -> bool {
        tracing::trace!(
            kind = diagnostic.kind(),
            field = ?diagnostic.field(),
            "{}",
            diagnostic
        );
        self.entries.push(diagnostic);
        false
    }

    /// Like [`Diagnostics::fail`], but skips the entry if an equal one is
    /// already recorded
    pub fn fail_once(&mut self, diagnostic: Diagnostic) -> bool {
        if self.entries.contains(&diagnostic) {
            return false;
        }
        self.fail(diagnostic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
