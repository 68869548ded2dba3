//! Core types for the a3s-quartz validator
//!
//! All types use camelCase JSON serialization.

use crate::diagnostic::Diagnostic;
use serde::{Deserialize, Serialize, Serializer};

/// One positional component of a Quartz cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Seconds,
    Minutes,
    Hours,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl Field {
    /// Fields in expression order
    pub const ALL: [Field; 7] = [
        Field::Seconds,
        Field::Minutes,
        Field::Hours,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
        Field::Year,
    ];

    /// Inclusive numeric bounds of the field
    ///
    /// The year bounds returned here are the defaults; a validator may be
    /// configured with a different year window.
    pub const fn bounds(&self) -> Bounds {
        match self {
            Field::Seconds | Field::Minutes => Bounds::new(0, 59),
            Field::Hours => Bounds::new(0, 23),
            Field::DayOfMonth => Bounds::new(1, 31),
            Field::Month => Bounds::new(1, 12),
            Field::DayOfWeek => Bounds::new(1, 7),
            Field::Year => Bounds::new(1970, 2199),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Seconds => write!(f, "seconds"),
            Field::Minutes => write!(f, "minutes"),
            Field::Hours => write!(f, "hours"),
            Field::DayOfMonth => write!(f, "day-of-month"),
            Field::Month => write!(f, "month"),
            Field::DayOfWeek => write!(f, "day-of-week"),
            Field::Year => write!(f, "year"),
        }
    }
}

/// Inclusive integer interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies inside the interval (both ends included)
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The whitespace-split tokens of an expression, bound to their fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronFields {
    pub seconds: String,
    pub minutes: String,
    pub hours: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl CronFields {
    /// Bind 6 or 7 tokens positionally. Returns `None` for any other count.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let token = |i: usize| tokens[i].as_ref().to_string();
        match tokens.len() {
            6 | 7 => Some(Self {
                seconds: token(0),
                minutes: token(1),
                hours: token(2),
                day_of_month: token(3),
                month: token(4),
                day_of_week: token(5),
                year: tokens.get(6).map(|y| y.as_ref().to_string()),
            }),
            _ => None,
        }
    }

    /// Number of fields present (6 or 7)
    pub fn field_count(&self) -> usize {
        if self.year.is_some() {
            7
        } else {
            6
        }
    }

    /// Token of a single field, `None` for an absent year
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Seconds => Some(&self.seconds),
            Field::Minutes => Some(&self.minutes),
            Field::Hours => Some(&self.hours),
            Field::DayOfMonth => Some(&self.day_of_month),
            Field::Month => Some(&self.month),
            Field::DayOfWeek => Some(&self.day_of_week),
            Field::Year => self.year.as_deref(),
        }
    }

    /// Present fields with their tokens, in expression order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|token| (field, token)))
    }
}

/// Outcome of validating one expression
///
/// Built fresh by every validation call; nothing is shared between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronExpression {
    /// Raw input
    pub expression: String,

    /// Positional tokens, absent when the expression could not be split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<CronFields>,

    valid: bool,

    diagnostics: Vec<Diagnostic>,
}

impl CronExpression {
    pub(crate) fn new(
        expression: impl Into<String>,
        fields: Option<CronFields>,
        valid: bool,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            expression: expression.into(),
            fields,
            valid,
            diagnostics,
        }
    }

    /// Whether every evaluated field passed
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failed checks in the order they were recorded
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Human-readable messages for the recorded diagnostics
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Collapse into the public verdict shape
    pub fn into_verdict(self, verbose: bool) -> Verdict {
        if verbose {
            Verdict::Report(Report {
                valid: self.valid,
                errors: self.diagnostics,
            })
        } else {
            Verdict::Flag(self.valid)
        }
    }
}

/// Verbose validation result: `{ "valid": bool, "errors": [message, ...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,

    #[serde(serialize_with = "serialize_messages")]
    pub errors: Vec<Diagnostic>,
}

fn serialize_messages<S: Serializer>(
    errors: &[Diagnostic],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// Result of [`crate::validate`]
///
/// Serializes as a bare boolean when not verbose, or as a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Verdict {
    Flag(bool),
    Report(Report),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        match self {
            Verdict::Flag(valid) => *valid,
            Verdict::Report(report) => report.valid,
        }
    }

    /// Recorded diagnostics; always empty for a non-verbose verdict
    pub fn errors(&self) -> &[Diagnostic] {
        match self {
            Verdict::Flag(_) => &[],
            Verdict::Report(report) => &report.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        let bounds = Bounds::new(0, 59);
        assert!(bounds.contains(0));
        assert!(bounds.contains(59));
        assert!(!bounds.contains(-1));
        assert!(!bounds.contains(60));
    }

    #[test]
    fn test_field_bounds() {
        assert_eq!(Field::Seconds.bounds(), Bounds::new(0, 59));
        assert_eq!(Field::Hours.bounds(), Bounds::new(0, 23));
        assert_eq!(Field::DayOfMonth.bounds(), Bounds::new(1, 31));
        assert_eq!(Field::DayOfWeek.bounds(), Bounds::new(1, 7));
        assert_eq!(Field::Year.bounds(), Bounds::new(1970, 2199));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::DayOfMonth.to_string(), "day-of-month");
        assert_eq!(Field::Year.to_string(), "year");
    }

    #[test]
    fn test_cron_fields_from_tokens() {
        let fields = CronFields::from_tokens(&["0", "15", "10", "?", "*", "MON"]).unwrap();
        assert_eq!(fields.day_of_week, "MON");
        assert_eq!(fields.year, None);
        assert_eq!(fields.field_count(), 6);

        let fields =
            CronFields::from_tokens(&["0", "15", "10", "?", "*", "MON", "2030"]).unwrap();
        assert_eq!(fields.year.as_deref(), Some("2030"));
        assert_eq!(fields.field_count(), 7);

        assert!(CronFields::from_tokens(&["*", "*", "*"]).is_none());
    }

    #[test]
    fn test_cron_fields_iter_order() {
        let fields = CronFields::from_tokens(&["1", "2", "3", "4", "5", "6"]).unwrap();
        let order: Vec<Field> = fields.iter().map(|(f, _)| f).collect();
        assert_eq!(&order, &Field::ALL[..6]);
    }

    #[test]
    fn test_verdict_serialization() {
        let flag = Verdict::Flag(true);
        assert_eq!(serde_json::to_value(&flag).unwrap(), serde_json::json!(true));

        let report = Verdict::Report(Report {
            valid: false,
            errors: vec![Diagnostic::MalformedNoWhitespace],
        });
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "valid": false,
                "errors": ["Unexpected Expression: no spaces"]
            })
        );
    }

    #[test]
    fn test_into_verdict() {
        let expr = CronExpression::new("x", None, false, vec![Diagnostic::MalformedNoWhitespace]);
        assert_eq!(expr.clone().into_verdict(false), Verdict::Flag(false));

        let verdict = expr.into_verdict(true);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.errors(), &[Diagnostic::MalformedNoWhitespace]);
    }
}
