//! Field splitting
//!
//! Turns the raw expression into 6 or 7 positional tokens:
//! ```text
//! ┌───────────── seconds (0-59)
//! │ ┌───────────── minutes (0-59)
//! │ │ ┌───────────── hours (0-23)
//! │ │ │ ┌───────────── day of month (1-31, L, LW, ?)
//! │ │ │ │ ┌───────────── month (1-12 or JAN-DEC)
//! │ │ │ │ │ ┌───────────── day of week (1-7 or SUN-SAT, L, #, ?)
//! │ │ │ │ │ │ ┌───────────── year, optional (1970-2199)
//! │ │ │ │ │ │ │
//! * * * * * * *
//! ```

use crate::config::Whitespace;
use crate::diagnostic::Diagnostic;
use crate::types::CronFields;

/// Split an expression into its fields
///
/// Fails with `MalformedNoWhitespace` when the input contains no whitespace
/// and with `MalformedFieldCount` unless splitting yields 6 or 7 tokens.
pub fn split_fields(
    expression: &str,
    whitespace: Whitespace,
) -> std::result::Result<CronFields, Diagnostic> {
    if !expression.chars().any(char::is_whitespace) {
        return Err(Diagnostic::MalformedNoWhitespace);
    }

    let trimmed = expression.trim();
    let tokens: Vec<&str> = match whitespace {
        Whitespace::SingleSpace => trimmed.split(' ').collect(),
        Whitespace::Any => trimmed.split_whitespace().collect(),
    };

    CronFields::from_tokens(&tokens).ok_or(Diagnostic::MalformedFieldCount {
        count: tokens.len(),
    })
}
