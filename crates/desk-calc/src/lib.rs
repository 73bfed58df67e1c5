//! desk-calc - keypad calculator with an exact decimal accumulator
//!
//! The engine consumes one key at a time and applies operators immediately,
//! strictly left to right, the way a pocket calculator does. Values are
//! arbitrary-precision decimals; division keeps 12 fractional digits.
//!
//! # Probar Principles
//!
//! - **Error prevention**: keys, operations and pending state are closed types
//! - **Anomaly**: failures reset the engine and show "Error" for one key
//! - **Balanced testing**: one driver trait runs the same checks on the engine and the TUI
//!
//! # Example
//!
//! ```rust
//! use desk_calc::prelude::*;
//!
//! let mut calc = Accumulator::new();
//! for token in ["2", "*", "3", "+", "4", "="] {
//!     calc.handle_token(token).unwrap();
//! }
//! assert_eq!(calc.display(), "10");
//!
//! // Division by zero is absorbed into the display
//! assert_eq!(calc.press_tokens("1 / 0 =").unwrap(), "Error");
//! assert_eq!(calc.press(Key::Digit(2)), "2");
//! ```

// Allow common test patterns in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        Accumulator, CalcError, CalcResult, EngineState, Key, Operation, ERROR_DISPLAY,
    };
    pub use crate::driver::{record_tokens, CalculatorDriver, Step, Transcript};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction, Keypad};
}
