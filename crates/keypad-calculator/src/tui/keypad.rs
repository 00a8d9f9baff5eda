//! Calculator button grid
//!
//! A fixed 5x4 grid. Every button carries the input token it emits when
//! activated, so the grid never interprets anything itself; hit testing
//! and highlighting are the only logic here.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text shown on the button face
    pub label: &'static str,
    /// Face color when not pressed
    pub color: Color,
    /// Input token emitted when the button is activated
    pub token: &'static str,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a utility or digit button (gray face)
    #[must_use]
    pub const fn gray(label: &'static str, token: &'static str) -> Self {
        Self {
            label,
            color: Color::Gray,
            token,
            pressed: false,
        }
    }

    /// Creates an operator button (blue face)
    #[must_use]
    pub const fn blue(label: &'static str, token: &'static str) -> Self {
        Self {
            label,
            color: Color::Blue,
            token,
            pressed: false,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, a 5x4 grid of buttons
/// ```text
/// [ < ] [ ( ] [ ) ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ x ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ C ] [ 0 ] [ . ] [ = ]
/// ```
///
/// Labels and tokens diverge where the face is cosmetic: backspace shows
/// "<" but emits "e", division shows the division sign but emits "/",
/// multiplication shows "x" but emits "*".
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (5 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: < ( ) ÷
            KeypadButton::gray("<", "e"),
            KeypadButton::gray("(", "("),
            KeypadButton::gray(")", ")"),
            KeypadButton::blue("\u{f7}", "/"),
            // Row 2: 7 8 9 x
            KeypadButton::gray("7", "7"),
            KeypadButton::gray("8", "8"),
            KeypadButton::gray("9", "9"),
            KeypadButton::blue("x", "*"),
            // Row 3: 4 5 6 -
            KeypadButton::gray("4", "4"),
            KeypadButton::gray("5", "5"),
            KeypadButton::gray("6", "6"),
            KeypadButton::blue("-", "-"),
            // Row 4: 1 2 3 +
            KeypadButton::gray("1", "1"),
            KeypadButton::gray("2", "2"),
            KeypadButton::gray("3", "3"),
            KeypadButton::blue("+", "+"),
            // Row 5: C 0 . =
            KeypadButton::gray("C", "c"),
            KeypadButton::gray("0", "0"),
            KeypadButton::gray(".", "."),
            KeypadButton::blue("=", "="),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by the token it emits
    #[must_use]
    pub fn find_button_by_token(&self, token: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button that emits the given token, if any
    pub fn highlight_token(&mut self, token: &str) {
        self.release_all();
        if let Some(idx) = self.find_button_by_token(token) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(btn.color)
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
