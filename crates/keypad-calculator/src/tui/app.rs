//! Application state for the calculator screen

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyInput};
use super::keypad::Keypad;
use crate::core::Calculator;

/// Calculator application state
///
/// Wraps the core calculator with the pieces the terminal needs: the
/// button grid, keystroke translation and the quit flag. Buttons and
/// keys converge on [`CalculatorApp::press_token`].
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calc: Calculator,
    keypad: Keypad,
    input: InputHandler,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calc.display()
    }

    /// Returns the button grid
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
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

    /// Feeds one input token to the calculator and highlights the
    /// matching button
    pub fn press_token(&mut self, token: &str) {
        self.keypad.highlight_token(token);
        self.calc.handle_token(token);
    }

    /// Handles a keyboard event
    pub fn on_key(&mut self, event: KeyEvent) {
        match self.input.translate(event) {
            KeyInput::Token(token) => self.press_token(&token),
            KeyInput::Quit => self.quit(),
            KeyInput::Ignored => {}
        }
    }

    /// Handles a mouse click at terminal coordinates, given the area
    /// the keypad was last rendered into
    pub fn on_click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(idx) = self.keypad.hit_test(keypad_area, x, y) {
            if let Some(btn) = self.keypad.get_button(idx) {
                let token = btn.token;
                self.press_token(token);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_app_is_blank() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_press_token_updates_display() {
        let mut app = CalculatorApp::new();
        app.press_token("5");
        app.press_token("+");
        app.press_token("3");
        assert_eq!(app.display(), "5+3");
    }

    #[test]
    fn test_press_token_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press_token("5");
        let pressed: Vec<&str> = app
            .keypad()
            .buttons()
            .filter(|b| b.pressed)
            .map(|b| b.token)
            .collect();
        assert_eq!(pressed, vec!["5"]);
    }

    #[test]
    fn test_press_token_evaluates() {
        let mut app = CalculatorApp::new();
        for token in ["5", "+", "3", "="] {
            app.press_token(token);
        }
        assert_eq!(app.display(), "8");
    }

    #[test]
    fn test_key_events_drive_calculator() {
        let mut app = CalculatorApp::new();
        app.on_key(key(KeyCode::Char('9')));
        app.on_key(key(KeyCode::Char('/')));
        app.on_key(key(KeyCode::Char('2')));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.display(), "4.5");
    }

    #[test]
    fn test_esc_key_clears() {
        let mut app = CalculatorApp::new();
        app.on_key(key(KeyCode::Char('7')));
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.display(), "");
    }

    #[test]
    fn test_ctrl_c_sets_quit() {
        let mut app = CalculatorApp::new();
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ignored_key_leaves_state_alone() {
        let mut app = CalculatorApp::new();
        app.on_key(key(KeyCode::Char('4')));
        app.on_key(key(KeyCode::Left));
        assert_eq!(app.display(), "4");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        // Top-left cell is backspace; harmless on an empty buffer
        app.on_click(area, 1, 1);
        assert_eq!(app.display(), "");
        let pressed: Vec<&str> = app
            .keypad()
            .buttons()
            .filter(|b| b.pressed)
            .map(|b| b.token)
            .collect();
        assert_eq!(pressed, vec!["e"]);
    }

    #[test]
    fn test_click_outside_keypad_ignored() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(10, 10, 22, 12);
        app.on_click(area, 0, 0);
        assert_eq!(app.keypad().buttons().filter(|b| b.pressed).count(), 0);
    }

    #[test]
    fn test_mixed_key_and_token_input() {
        let mut app = CalculatorApp::new();
        app.press_token("1");
        app.on_key(key(KeyCode::Char('+')));
        app.press_token("2");
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.display(), "3");
    }
}
