//! Keypad actions
//!
//! A keypad button or key press becomes one [`KeypadAction`], and one
//! action becomes exactly one calculator operation. Front ends (the mock
//! DOM driver, the browser binding, the CLI) all go through
//! [`Calculator::press`].

use crate::core::{CalcError, CalcResult, Calculator, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Append a digit (`'0'..='9'`)
    Number(char),
    /// Append a decimal point
    Decimal,
    /// Choose an operation
    Operation(Operation),
    /// Compute the pending operation
    Equals,
    /// Delete the last character
    Delete,
    /// Clear operands, pending operation and memory
    AllClear,
    /// Convert the current operand to binary
    ConvertBinary,
    /// Add the current operand to memory (M+)
    MemoryAdd,
    /// Subtract the current operand from memory (M-)
    MemorySubtract,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::ConvertBinary => "BIN".to_string(),
            Self::MemoryAdd => "M+".to_string(),
            Self::MemorySubtract => "M-".to_string(),
        }
    }

    /// Maps a keyboard key to a keypad action
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "/" => Some(Self::Operation(Operation::Divide)),
            "Enter" => Some(Self::Equals),
            "Backspace" => Some(Self::Delete),
            "Escape" => Some(Self::AllClear),
            "b" | "B" => Some(Self::ConvertBinary),
            _ => key.parse().ok(),
        }
    }
}

impl fmt::Display for KeypadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for KeypadAction {
    type Err = CalcError;

    /// Parses a button label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if ch.is_ascii_digit() {
                return Ok(Self::Number(ch));
            }
        }
        if let Ok(op) = s.parse::<Operation>() {
            return Ok(Self::Operation(op));
        }
        match s {
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "DEL" => Ok(Self::Delete),
            "AC" => Ok(Self::AllClear),
            "BIN" => Ok(Self::ConvertBinary),
            "M+" => Ok(Self::MemoryAdd),
            "M-" => Ok(Self::MemorySubtract),
            _ => Err(CalcError::UnknownKey(s.to_string())),
        }
    }
}

impl Calculator {
    /// Performs the single operation bound to `action`
    pub fn press(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Number(d) => {
                let mut buf = [0u8; 4];
                self.append_number(d.encode_utf8(&mut buf));
            }
            KeypadAction::Decimal => self.append_number("."),
            KeypadAction::Operation(op) => self.choose_operation(op),
            KeypadAction::Equals => self.compute(),
            KeypadAction::Delete => self.delete(),
            KeypadAction::AllClear => self.clear(),
            KeypadAction::ConvertBinary => self.convert_to_binary(),
            KeypadAction::MemoryAdd => self.add_to_memory(),
            KeypadAction::MemorySubtract => self.subtract_from_memory(),
        }
    }

    /// Presses each action in order
    pub fn press_all(&mut self, actions: impl IntoIterator<Item = KeypadAction>) {
        for action in actions {
            self.press(action);
        }
    }
}

/// Parses whitespace-separated button labels
pub fn parse_keys(input: &str) -> CalcResult<Vec<KeypadAction>> {
    input.split_whitespace().map(str::parse).collect()
}
