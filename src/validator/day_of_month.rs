//! Day-of-month rules
//!
//! Numeric grammar over `[1, 31]` plus the `L` family (`L`, `LW`, `<1-7>L`)
//! and the `*` / `?` pairing with the day-of-week field.

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::types::Field;
use crate::validator::grammar::{is_last_marker, split_pair, Grammar, DAYS_OF_MONTH};
use crate::validator::FieldRule;

/// Day-of-month rule, bound to the day-of-week token of the same expression
#[derive(Debug, Clone, Copy)]
pub struct DayOfMonth<'a> {
    grammar: Grammar,
    day_of_week: &'a str,
}

impl<'a> DayOfMonth<'a> {
    pub fn new(day_of_week: &'a str) -> Self {
        Self {
            grammar: DAYS_OF_MONTH,
            day_of_week,
        }
    }

    fn expression(&self, token: &str, sink: &mut Diagnostics) -> bool {
        match token {
            "*" | "?" if self.day_of_week == token => {
                return sink.fail_once(Diagnostic::CrossFieldConflict {
                    day_of_month: token.to_string(),
                    day_of_week: self.day_of_week.to_string(),
                });
            }
            "*" | "?" => return true,
            _ => {}
        }

        if token.eq_ignore_ascii_case("lw") || is_last_marker(token) {
            return true;
        }

        if token.contains('/') {
            return self
                .grammar
                .step(token, sink, |base, sink| self.expression(base, sink));
        }

        if token.contains('-') {
            if let Some((_, high)) = split_pair(token, '-') {
                if high.eq_ignore_ascii_case("l") {
                    return sink.fail(self.grammar.out_of_range(high));
                }
            }
            return self
                .grammar
                .range(token, sink, |low, sink| self.expression(low, sink));
        }

        if token.contains(',') {
            return self.grammar.list(token, sink);
        }

        self.grammar.leaf(token, sink)
    }
}

impl FieldRule for DayOfMonth<'_> {
    fn field(&self) -> Field {
        Field::DayOfMonth
    }

    fn check(&self, token: &str, sink: &mut Diagnostics) -> bool {
        self.expression(token, sink)
    }
}
