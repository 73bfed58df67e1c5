//! Symbolic key vocabulary understood by the accumulator
//!
//! Every front end (terminal keypad, keyboard, batch input) speaks in these
//! tokens and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operation};

/// One key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point (`.`)
    Decimal,
    /// Binary operator (`+ - * /`)
    Operator(Operation),
    /// Sign change (`±`)
    Negate,
    /// Divide by one hundred (`%`)
    Percent,
    /// Remove the last typed character (`<-`)
    Backspace,
    /// Reset everything (`C`)
    Clear,
    /// Commit the pending operation (`=`)
    Equals,
}

impl Key {
    /// Every key, digits first
    pub const ALL: [Self; 20] = [
        Self::Digit(0),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Decimal,
        Self::Operator(Operation::Add),
        Self::Operator(Operation::Subtract),
        Self::Operator(Operation::Multiply),
        Self::Operator(Operation::Divide),
        Self::Negate,
        Self::Percent,
        Self::Backspace,
        Self::Clear,
        Self::Equals,
    ];

    /// Builds a digit key, rejecting values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a single typed character to a key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            '±' => Some(Self::Negate),
            '%' => Some(Self::Percent),
            '=' => Some(Self::Equals),
            'C' => Some(Self::Clear),
            _ => Operation::from_symbol(c).map(Self::Operator),
        }
    }

    /// Canonical token text
    #[must_use]
    pub fn token(&self) -> String {
        self.to_string()
    }

    /// Returns the digit character for digit keys
    #[must_use]
    pub fn as_digit_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Negate => f.write_str("±"),
            Self::Percent => f.write_str("%"),
            Self::Backspace => f.write_str("<-"),
            Self::Clear => f.write_str("C"),
            Self::Equals => f.write_str("="),
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "<-" {
            return Ok(Self::Backspace);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| CalcError::UnknownToken(s.to_string())),
            _ => Err(CalcError::UnknownToken(s.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}
