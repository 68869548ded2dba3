//! Shared field grammar
//!
//! Seconds, minutes, hours, month and year all follow the same shape:
//! `*`, `base/step`, `low-high`, `a,b,c` or a single value. A value is an
//! integer inside the field's inclusive bounds or, for named fields, one of
//! the three-letter names. Day-of-month and day-of-week reuse the step, range
//! and list helpers with their own recursion for the left operand.

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::types::{Bounds, Field};
use crate::validator::FieldRule;
use regex::Regex;
use std::sync::OnceLock;

pub const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

pub const DAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

fn integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-+]?[0-9]+$").unwrap())
}

/// Strict integer parsing: optional sign followed by ASCII digits only
///
/// Anything else (blank, decimals, names, embedded spaces) is not a number.
/// Values too large for `i64` saturate, so they still fail bounds checks as
/// numbers.
pub fn parse_int(token: &str) -> Option<i64> {
    if !integer_regex().is_match(token) {
        return None;
    }
    Some(token.parse().unwrap_or(if token.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// `L` or `<1-7>L`, case-insensitive
pub fn is_last_marker(token: &str) -> bool {
    match token.as_bytes() {
        [l] => l.eq_ignore_ascii_case(&b'l'),
        [d, l] => (b'1'..=b'7').contains(d) && l.eq_ignore_ascii_case(&b'l'),
        _ => false,
    }
}

/// Split into exactly two operands around `separator`
pub fn split_pair(token: &str, separator: char) -> Option<(&str, &str)> {
    let mut parts = token.split(separator);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Some((left, right)),
        _ => None,
    }
}

/// Bounds and vocabulary of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    pub field: Field,
    pub bounds: Bounds,
    pub names: &'static [&'static str],
}

pub const SECONDS: Grammar = Grammar::numeric(Field::Seconds, Field::Seconds.bounds());
pub const MINUTES: Grammar = Grammar::numeric(Field::Minutes, Field::Minutes.bounds());
pub const HOURS: Grammar = Grammar::numeric(Field::Hours, Field::Hours.bounds());
pub const DAYS_OF_MONTH: Grammar =
    Grammar::numeric(Field::DayOfMonth, Field::DayOfMonth.bounds());
pub const MONTHS: Grammar = Grammar::named(Field::Month, Field::Month.bounds(), &MONTH_NAMES);
pub const DAYS_OF_WEEK: Grammar =
    Grammar::named(Field::DayOfWeek, Field::DayOfWeek.bounds(), &DAY_NAMES);

impl Grammar {
    pub const fn numeric(field: Field, bounds: Bounds) -> Self {
        Self {
            field,
            bounds,
            names: &[],
        }
    }

    pub const fn named(field: Field, bounds: Bounds, names: &'static [&'static str]) -> Self {
        Self {
            field,
            bounds,
            names,
        }
    }

    /// Year grammar with a configurable window
    pub const fn years(bounds: Bounds) -> Self {
        Self::numeric(Field::Year, bounds)
    }

    pub fn is_name(&self, token: &str) -> bool {
        self.names.iter().any(|name| name.eq_ignore_ascii_case(token))
    }

    /// A single value: an in-bounds integer or a known name
    pub fn leaf(&self, token: &str, sink: &mut Diagnostics) -> bool {
        match parse_int(token) {
            Some(value) if self.bounds.contains(value) => true,
            Some(_) => sink.fail(self.out_of_range(token)),
            None if self.is_name(token) => true,
            None if self.names.is_empty() => sink.fail(self.out_of_range(token)),
            None => sink.fail(Diagnostic::Syntax {
                field: self.field,
                token: token.to_string(),
            }),
        }
    }

    /// `base/step`: the base goes through `base_rule`, the step is a leaf
    pub fn step<F>(&self, token: &str, sink: &mut Diagnostics, base_rule: F) -> bool
    where
        F: FnOnce(&str, &mut Diagnostics) -> bool,
    {
        let Some((base, step)) = split_pair(token, '/') else {
            return sink.fail(self.wrong_expression(token));
        };
        if let (Some(base), Some(step)) = (parse_int(base), parse_int(step)) {
            if base >= step {
                return sink.fail(self.wrong_expression(token));
            }
        }
        base_rule(base, sink) && self.leaf(step, sink)
    }

    /// `low-high`: the low end goes through `low_rule`, the high end is a leaf
    ///
    /// The two ends are not ordered against each other; `FRI-MON` style
    /// wrap-around ranges are accepted.
    pub fn range<F>(&self, token: &str, sink: &mut Diagnostics, low_rule: F) -> bool
    where
        F: FnOnce(&str, &mut Diagnostics) -> bool,
    {
        let Some((low, high)) = split_pair(token, '-') else {
            return sink.fail(self.wrong_expression(token));
        };
        low_rule(low, sink) && self.leaf(high, sink)
    }

    /// `a,b,c`: every element is a leaf
    pub fn list(&self, token: &str, sink: &mut Diagnostics) -> bool {
        token.split(',').all(|item| self.leaf(item, sink))
    }

    /// Full grammar: `*`, step, range, list or leaf, in that order
    pub fn expression(&self, token: &str, sink: &mut Diagnostics) -> bool {
        if token == "*" {
            return true;
        }
        if token.contains('/') {
            return self.step(token, sink, |base, sink| self.expression(base, sink));
        }
        if token.contains('-') {
            return self.range(token, sink, |low, sink| self.expression(low, sink));
        }
        if token.contains(',') {
            return self.list(token, sink);
        }
        self.leaf(token, sink)
    }

    pub fn out_of_range(&self, token: &str) -> Diagnostic {
        Diagnostic::OutOfRange {
            field: self.field,
            token: token.to_string(),
            min: self.bounds.min,
            max: self.bounds.max,
        }
    }

    pub fn wrong_expression(&self, token: &str) -> Diagnostic {
        Diagnostic::WrongExpression {
            field: self.field,
            token: token.to_string(),
        }
    }
}

impl FieldRule for Grammar {
    fn field(&self) -> Field {
        self.field
    }

    fn check(&self, token: &str, sink: &mut Diagnostics) -> bool {
        self.expression(token, sink)
    }
}
