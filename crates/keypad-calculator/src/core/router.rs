//! Token routing
//!
//! Buttons and physical keys both deliver their input as small token
//! strings ("5", "+", "Enter", "Numpad Add"). `classify` maps each
//! token to the calculator action it stands for, so clicks and
//! keystrokes share one code path.

use crate::core::buffer::is_input_char;

/// Action selected for an incoming token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append one character to the display buffer
    Append(char),
    /// Evaluate the buffered expression
    Evaluate,
    /// Remove the last character
    Backspace,
    /// Reset the display buffer
    Clear,
    /// Token carries no meaning for the calculator
    Ignore,
}

/// Classifies one input token into an [`Action`]
///
/// Numpad key names ("Numpad Add", "Numpad 7") are folded into their
/// plain-character equivalents first, so a numpad keystroke routes
/// exactly like the matching button.
#[must_use]
pub fn classify(token: &str) -> Action {
    if let Some(op) = numpad_char(token) {
        return Action::Append(op);
    }

    match token {
        "=" | "Enter" => Action::Evaluate,
        "e" | "Backspace" => Action::Backspace,
        "c" => Action::Clear,
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if is_input_char(c) => Action::Append(c),
                _ => Action::Ignore,
            }
        }
    }
}

/// Maps a numpad key name to its input character, if it has one
fn numpad_char(token: &str) -> Option<char> {
    let suffix = token.strip_prefix("Numpad ")?;
    match suffix {
        "Add" => Some('+'),
        "Subtract" => Some('-'),
        "Multiply" => Some('*'),
        "Divide" => Some('/'),
        "Decimal" => Some('.'),
        // Digit keys carry their digit as the final character
        _ => suffix.chars().last().filter(|c| c.is_ascii_digit()),
    }
}
