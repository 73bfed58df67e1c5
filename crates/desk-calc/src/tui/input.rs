//! Keyboard and mouse input mapping
//!
//! Probar: Error prevention - only keys from the engine vocabulary get through

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::Key;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a key to the engine
    Press(Key),
    /// Left click at a terminal cell; resolved against the keypad by the app
    Click {
        /// Column of the click
        column: u16,
        /// Row of the click
        row: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> KeyAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Backspace => KeyAction::Press(Key::Backspace),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Key::Clear),
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') => KeyAction::Press(Key::Clear),
            KeyCode::Char('n' | 'N') => KeyAction::Press(Key::Negate),
            KeyCode::Char(c) => Key::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => KeyAction::None,
        }
    }
}
