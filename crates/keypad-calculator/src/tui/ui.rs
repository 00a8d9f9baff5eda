//! Screen rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Hint shown in an empty display, like a hardware calculator at rest
const EMPTY_DISPLAY_HINT: &str = "0";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUi::new(app);
    frame.render_widget(ui, area);
}

/// Splits the screen into (display, keypad) areas
///
/// Exposed separately so the event loop can hit test mouse clicks
/// against the same keypad rectangle the renderer used.
#[must_use]
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(7),    // Keypad
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the read-only display field
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();

        let (shown, style) = if text.is_empty() {
            (
                EMPTY_DISPLAY_HINT,
                Style::default().fg(Color::DarkGray),
            )
        } else if text.starts_with("Error") {
            (text, Style::default().fg(Color::Red))
        } else {
            (
                text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let paragraph = Paragraph::new(Span::styled(shown, style))
            .right_aligned()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        paragraph.render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Calculator ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let (display_area, keypad_area) = screen_layout(area);
        self.render_display(display_area, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad_area, buf);
    }
}
