//! Core accumulator engine with exact decimal arithmetic
//!
//! Probar: Error prevention - the pending operand and operator travel
//! together, so a half-configured operation cannot be represented.

mod accumulator;
pub mod decimal;
pub mod key;
mod operations;

pub use accumulator::{Accumulator, EngineState, PendingOperation, ERROR_DISPLAY};
pub use key::Key;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by a value equal to exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Display text could not be read back as a number
    #[error("Malformed number: {0:?}")]
    MalformedNumber(String),
    /// A decimal scale left the representable range
    #[error("Decimal scale out of range: {0}")]
    ScaleOutOfRange(i64),
    /// Input outside the key vocabulary
    #[error("Unknown token: {0:?}")]
    UnknownToken(String),
}

impl CalcError {
    /// Returns true for failures the engine absorbs into its Error state
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        !matches!(self, Self::UnknownToken(_))
    }
}
