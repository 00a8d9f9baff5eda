//! Keyboard event translation
//!
//! Every physical key mirrors a keypad button, so the handler does not
//! act on keys itself: it turns each event into the same token string
//! the matching button would emit and leaves routing to the core.
//! Numpad keystrokes become their "Numpad X" names so they highlight
//! and route like their main-row equivalents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

/// Outcome of translating one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// An input token for the calculator
    Token(String),
    /// Quit the application
    Quit,
    /// Key carries no calculator meaning
    Ignored,
}

/// Translates key events into calculator input tokens
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to a [`KeyInput`]
    #[must_use]
    pub fn translate(&self, event: KeyEvent) -> KeyInput {
        let KeyEvent {
            code,
            modifiers,
            state,
            ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyInput::Quit,
                _ => KeyInput::Ignored,
            };
        }

        match code {
            KeyCode::Char(c) if state.contains(KeyEventState::KEYPAD) => {
                match numpad_key_name(c) {
                    Some(name) => KeyInput::Token(name),
                    None => KeyInput::Ignored,
                }
            }
            KeyCode::Char(c) => KeyInput::Token(c.to_string()),
            KeyCode::Enter => KeyInput::Token("Enter".into()),
            KeyCode::Backspace => KeyInput::Token("Backspace".into()),
            KeyCode::Esc => KeyInput::Token("c".into()),
            _ => KeyInput::Ignored,
        }
    }
}

/// Returns the "Numpad X" name for a numpad character
fn numpad_key_name(c: char) -> Option<String> {
    match c {
        '+' => Some("Numpad Add".into()),
        '-' => Some("Numpad Subtract".into()),
        '*' => Some("Numpad Multiply".into()),
        '/' => Some("Numpad Divide".into()),
        '.' => Some("Numpad Decimal".into()),
        '0'..='9' => Some(format!("Numpad {c}")),
        _ => None,
    }
}
