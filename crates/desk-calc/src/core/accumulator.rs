//! The accumulator engine: key presses in, display text out
//!
//! Operations apply immediately and strictly left to right. Pressing an
//! operator first commits whatever operation was already pending, then parks
//! the current value as the left-hand operand.

use bigdecimal::BigDecimal;
use num_traits::Zero;
use tracing::{debug, warn};

use crate::core::decimal::{self, display_string, parse_entry};
use crate::core::{CalcError, CalcResult, Key, Operation};

/// Text shown after an arithmetic failure
pub const ERROR_DISPLAY: &str = "Error";

/// Left-hand operand and the operation waiting for its right-hand side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Stored operand
    pub operand: BigDecimal,
    /// Operator to apply on commit
    pub operation: Operation,
}

/// Observable engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Waiting for a fresh number, nothing pending
    Entry,
    /// A number is being typed
    Typing,
    /// An operand and operator are parked, waiting for the next number
    PendingOp,
    /// The last key failed; display shows "Error"
    Error,
}

/// Accumulator state machine
#[derive(Debug, Clone)]
pub struct Accumulator {
    current: BigDecimal,
    pending: Option<PendingOperation>,
    /// Next digit replaces the display instead of extending it
    fresh_entry: bool,
    display: String,
    errored: bool,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates an engine showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: BigDecimal::zero(),
            pending: None,
            fresh_entry: true,
            display: "0".to_string(),
            errored: false,
        }
    }

    /// Parses `token` and applies it.
    ///
    /// Only tokens outside the vocabulary are reported as errors; arithmetic
    /// failures are absorbed and show up as "Error" in the display.
    pub fn handle_token(&mut self, token: &str) -> CalcResult<&str> {
        let key = token.parse::<Key>()?;
        Ok(self.press(key))
    }

    /// Applies one key and returns the new display text
    pub fn press(&mut self, key: Key) -> &str {
        if self.errored {
            // state was already zeroed when the error was raised
            self.errored = false;
            self.display = "0".to_string();
        }

        if let Err(err) = self.apply(key) {
            warn!(%key, error = %err, "calculation failed, resetting engine");
            self.fail();
        }

        debug!(%key, display = %self.display, state = ?self.state(), "key handled");
        &self.display
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Value being edited or last computed
    #[must_use]
    pub fn current_value(&self) -> &BigDecimal {
        &self.current
    }

    /// Operator awaiting its right-hand operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    /// Left-hand operand of the pending operation
    #[must_use]
    pub fn stored_operand(&self) -> Option<&BigDecimal> {
        self.pending.as_ref().map(|p| &p.operand)
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub fn is_fresh_entry(&self) -> bool {
        self.fresh_entry
    }

    /// Classifies the current state
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.errored {
            EngineState::Error
        } else if !self.fresh_entry {
            EngineState::Typing
        } else if self.pending.is_some() {
            EngineState::PendingOp
        } else {
            EngineState::Entry
        }
    }

    fn apply(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Clear => self.reset(),
            Key::Digit(d) => self.enter_digit(d)?,
            Key::Decimal => self.enter_decimal()?,
            Key::Negate => {
                self.current = -std::mem::take(&mut self.current);
                self.display = display_string(&self.current);
            }
            Key::Percent => {
                self.current = decimal::percent(&self.current)?;
                self.display = display_string(&self.current);
            }
            Key::Backspace => self.backspace()?,
            Key::Operator(operation) => {
                self.commit_pending()?;
                self.pending = Some(PendingOperation {
                    operand: self.current.clone(),
                    operation,
                });
                self.fresh_entry = true;
            }
            Key::Equals => {
                self.commit_pending()?;
                self.pending = None;
                self.fresh_entry = true;
            }
        }
        Ok(())
    }

    fn enter_digit(&mut self, digit: u8) -> CalcResult<()> {
        let ch = char::from_digit(u32::from(digit), 10)
            .ok_or_else(|| CalcError::MalformedNumber(digit.to_string()))?;

        if self.fresh_entry {
            self.display.clear();
            self.fresh_entry = false;
        }
        self.display.push(ch);
        self.current = parse_entry(&self.display)?;
        Ok(())
    }

    fn enter_decimal(&mut self) -> CalcResult<()> {
        if self.fresh_entry {
            self.display = "0.".to_string();
            self.fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.current = parse_entry(&self.display)?;
        Ok(())
    }

    fn backspace(&mut self) -> CalcResult<()> {
        if self.fresh_entry {
            return Ok(());
        }

        self.display.pop();
        // a lone "-" counts as an empty entry
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
            self.current = BigDecimal::zero();
            self.fresh_entry = true;
            return Ok(());
        }
        self.current = parse_entry(&self.display)?;
        Ok(())
    }

    fn commit_pending(&mut self) -> CalcResult<()> {
        if let Some(PendingOperation { operand, operation }) = self.pending.take() {
            self.current = operation.apply(&operand, &self.current)?;
            self.display = display_string(&self.current);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.current = BigDecimal::zero();
        self.pending = None;
        self.fresh_entry = true;
        self.display = "0".to_string();
    }

    fn fail(&mut self) {
        self.reset();
        self.display = ERROR_DISPLAY.to_string();
        self.errored = true;
    }
}
