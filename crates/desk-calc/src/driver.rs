//! Unified Calculator Driver
//!
//! **Write the behaviour check once, run it against every front end.**
//! The bare engine and the terminal app both implement [`CalculatorDriver`],
//! so a key sequence produces the same display whichever one is driven.
//!
//! Probar: Balanced testing - one check, every front end

use serde::Serialize;

use crate::core::{Accumulator, CalcResult, Key};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use desk_calc::prelude::*;
///
/// fn verify<D: CalculatorDriver>(driver: &mut D) {
///     assert_eq!(driver.press_tokens("2 * 3 + 4 =").unwrap(), "10");
/// }
///
/// verify(&mut Accumulator::new());
/// ```
pub trait CalculatorDriver {
    /// Presses a single key and returns the resulting display
    fn press(&mut self, key: Key) -> String;

    /// Current display text
    fn display(&self) -> String;

    /// Presses whitespace-separated tokens in order.
    ///
    /// All tokens are parsed before any is pressed, so an unknown token
    /// leaves the driver untouched.
    fn press_tokens(&mut self, tokens: &str) -> CalcResult<String> {
        let keys = parse_tokens(tokens)?;
        for key in keys {
            self.press(key);
        }
        Ok(self.display())
    }
}

impl CalculatorDriver for Accumulator {
    fn press(&mut self, key: Key) -> String {
        Accumulator::press(self, key).to_string()
    }

    fn display(&self) -> String {
        Accumulator::display(self).to_string()
    }
}

/// Splits input on whitespace and parses every token
pub fn parse_tokens(tokens: &str) -> CalcResult<Vec<Key>> {
    tokens.split_whitespace().map(str::parse).collect()
}

/// One recorded key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Token that was pressed
    pub token: String,
    /// Display text right after the press
    pub display: String,
}

/// Ordered record of a token run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Steps in press order
    pub steps: Vec<Step>,
}

impl Transcript {
    /// Display after the last step, or `None` for an empty run
    #[must_use]
    pub fn final_display(&self) -> Option<&str> {
        self.steps.last().map(|s| s.display.as_str())
    }

    /// Number of recorded steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Presses `tokens` on `driver`, recording the display after each one
pub fn record_tokens<D: CalculatorDriver + ?Sized>(
    driver: &mut D,
    tokens: &str,
) -> CalcResult<Transcript> {
    let keys = parse_tokens(tokens)?;
    let steps = keys
        .into_iter()
        .map(|key| Step {
            token: key.token(),
            display: driver.press(key),
        })
        .collect();
    Ok(Transcript { steps })
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Key;
    use crate::tui::CalculatorApp;

    /// Drives the terminal app the same way a user at the keypad would
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: Key) -> String {
            self.app.press(key);
            self.app.display().to_string()
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
