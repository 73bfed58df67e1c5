//! TUI Application State
//!
//! Probar: Error prevention - the app only ever talks to the engine in keys

use ratatui::layout::Rect;
use tracing::trace;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::core::decimal::display_string;
use crate::core::{Accumulator, EngineState, Key};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: Accumulator,
    keypad: Keypad,
    /// Where the keypad was last drawn, for mouse hit testing
    keypad_area: Option<Rect>,
    last_key: Option<Key>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends a key to the engine and highlights it on the keypad
    pub fn press(&mut self, key: Key) {
        self.engine.press(key);
        self.keypad.highlight(key);
        self.last_key = Some(key);
    }

    /// Applies an input action. Returns true when the app should exit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Click { column, row } => self.click(column, row),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        self.should_quit
    }

    /// Presses the keypad button under a click, if there is one
    pub fn click(&mut self, column: u16, row: u16) {
        let Some(area) = self.keypad_area else {
            return;
        };
        if let Some(key) = self.keypad.key_at(area, column, row) {
            trace!(column, row, %key, "keypad click");
            self.press(key);
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Text for the status line, e.g. `"12 +"` while an operation is pending
    #[must_use]
    pub fn pending_display(&self) -> String {
        match (self.engine.stored_operand(), self.engine.pending_operation()) {
            (Some(operand), Some(op)) => format!("{} {}", display_string(operand), op),
            _ => String::new(),
        }
    }

    /// Returns true while the engine shows "Error"
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.engine.state() == EngineState::Error
    }

    /// The underlying engine
    #[must_use]
    pub fn engine(&self) -> &Accumulator {
        &self.engine
    }

    /// The keypad model
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Records where the keypad was drawn
    pub fn set_keypad_area(&mut self, area: Rect) {
        self.keypad_area = Some(area);
    }

    /// Where the keypad was last drawn
    #[must_use]
    pub fn keypad_area(&self) -> Option<Rect> {
        self.keypad_area
    }

    /// Most recent key sent to the engine
    #[must_use]
    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
