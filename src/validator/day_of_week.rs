//! Day-of-week rules
//!
//! Values are `1-7` or `SUN`..`SAT`. On top of the shared grammar the field
//! accepts `L` / `<1-7>L` (last day of week, last given weekday of the month)
//! and `<weekday>#<n>` (n-th weekday of the month, n in 1..=5).
//!
//! A restricting day-of-week value is accepted when day-of-month is `*` or
//! `?`; both fields restricting at once is a conflict.

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::types::{Bounds, Field};
use crate::validator::grammar::{is_last_marker, parse_int, split_pair, Grammar, DAYS_OF_WEEK};
use crate::validator::FieldRule;

/// Allowed occurrence after `#`
const NTH_WEEKDAY: Bounds = Bounds::new(1, 5);

/// Day-of-week rule, bound to the day-of-month token of the same expression
#[derive(Debug, Clone, Copy)]
pub struct DayOfWeek<'a> {
    grammar: Grammar,
    day_of_month: &'a str,
}

impl<'a> DayOfWeek<'a> {
    pub fn new(day_of_month: &'a str) -> Self {
        Self {
            grammar: DAYS_OF_WEEK,
            day_of_month,
        }
    }

    fn conflict(&self, token: &str, sink: &mut Diagnostics) -> bool {
        sink.fail_once(Diagnostic::CrossFieldConflict {
            day_of_month: self.day_of_month.to_string(),
            day_of_week: token.to_string(),
        })
    }

    fn expression(&self, token: &str, sink: &mut Diagnostics) -> bool {
        if token == "*" || is_last_marker(token) {
            return true;
        }

        if token.contains('/') {
            return self
                .grammar
                .step(token, sink, |base, sink| self.expression(base, sink));
        }

        if token.contains('-') {
            return self
                .grammar
                .range(token, sink, |low, sink| self.expression(low, sink));
        }

        if token.contains(',') {
            return self.grammar.list(token, sink);
        }

        if token.contains('#') {
            return self.nth_weekday(token, sink);
        }

        self.grammar.leaf(token, sink)
    }

    /// `<weekday>#<n>`; both operands are checked and both must hold
    fn nth_weekday(&self, token: &str, sink: &mut Diagnostics) -> bool {
        let Some((weekday, nth)) = split_pair(token, '#') else {
            return sink.fail(self.grammar.wrong_expression(token));
        };

        let weekday_ok = self.grammar.leaf(weekday, sink);
        let nth_ok = match parse_int(nth) {
            Some(n) if NTH_WEEKDAY.contains(n) => true,
            _ => sink.fail(Diagnostic::NthWeekday {
                token: nth.to_string(),
            }),
        };
        weekday_ok && nth_ok
    }
}

impl FieldRule for DayOfWeek<'_> {
    fn field(&self) -> Field {
        Field::DayOfWeek
    }

    fn check(&self, token: &str, sink: &mut Diagnostics) -> bool {
        match token {
            "*" | "?" if self.day_of_month == token => self.conflict(token, sink),
            "*" | "?" => true,
            _ if !matches!(self.day_of_month, "*" | "?") => self.conflict(token, sink),
            _ => self.expression(token, sink),
        }
    }
}
