//! Terminal front end for the calculator
//!
//! Probar: Visual feedback - Visual feedback through terminal interface

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, AppLayout, CalculatorUI, HELP_SHORTCUTS, TITLE};
