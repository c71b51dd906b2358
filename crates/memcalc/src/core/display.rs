//! Display formatting
//!
//! The integer part of an operand gets `en` thousands separators; the
//! fractional part is shown exactly as typed so trailing zeros and a
//! dangling decimal point survive while the user is still entering digits.

use super::entry::Entry;
use super::number::parse_float;
use serde::{Deserialize, Serialize};

/// The two display lines of the calculator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Upper line: previous operand and pending operator, or empty
    pub previous: String,
    /// Lower line: the operand being entered or the last result
    pub current: String,
}

/// Formats an operand for the display.
///
/// The operand's string form is split on `.`. The integer part is parsed
/// leniently and grouped in threes (empty when it does not parse). The
/// fractional part, when present, is appended verbatim.
#[must_use]
pub fn format_for_display(operand: &Entry) -> String {
    format_text(&operand.as_text())
}

/// Formats the string form of an operand, see [`format_for_display`]
#[must_use]
pub fn format_text(text: &str) -> String {
    let mut parts = text.split('.');
    let integer_part = parts.next().unwrap_or_default();
    let fraction_part = parts.next();

    let integer_display = parse_float(integer_part)
        .map(format_integer)
        .unwrap_or_default();

    match fraction_part {
        Some(fraction) => format!("{integer_display}.{fraction}"),
        None => integer_display,
    }
}

/// Rounds to zero fraction digits and inserts thousands separators
fn format_integer(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = value.round();
    let grouped = group_thousands(&format!("{}", rounded.abs()));
    if rounded.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
