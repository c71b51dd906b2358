//! Operand entries
//!
//! An operand is either text being typed on the keypad or a numeric result
//! written back by a computation or a memory key. Numeric results are
//! normalized to their shortest decimal text whenever they are edited,
//! parsed or displayed.

use super::number::{number_to_string, parse_float};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A calculator operand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    /// Digits and decimal points typed so far
    Text(String),
    /// A numeric result
    Value(f64),
}

impl Default for Entry {
    fn default() -> Self {
        Self::empty()
    }
}

impl Entry {
    /// An empty text entry
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    /// True for empty text. Numeric entries are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Returns the entry's string form
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Value(value) => Cow::Owned(number_to_string(*value)),
        }
    }

    /// Parses the entry's string form as a number
    #[must_use]
    pub fn parse(&self) -> Option<f64> {
        parse_float(&self.as_text())
    }

    /// Returns the numeric value if this is a computed result
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Appends `token` to the entry's text
    pub fn push_str(&mut self, token: &str) {
        let mut text = self.take_text();
        text.push_str(token);
        *self = Self::Text(text);
    }

    /// Removes the last character of the entry's text
    pub fn pop(&mut self) {
        let mut text = self.take_text();
        text.pop();
        *self = Self::Text(text);
    }

    fn take_text(&mut self) -> String {
        match std::mem::take(self) {
            Self::Text(text) => text,
            Self::Value(value) => number_to_string(value),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}
