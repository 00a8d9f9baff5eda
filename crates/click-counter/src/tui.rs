//! Terminal frontend for the counter
//!
//! One row of three cells: a minus button, the value, a plus button.
//! Keys mirror the buttons the same way the calculator does it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::counter::Counter;

/// Counter application state
#[derive(Debug, Default)]
pub struct CounterApp {
    counter: Counter,
    should_quit: bool,
}

impl CounterApp {
    /// Creates a new counter app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counter value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.counter.value()
    }

    /// Returns the value as display text
    #[must_use]
    pub fn display(&self) -> String {
        self.counter.display()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Steps the counter up by one
    pub fn increment(&mut self) {
        self.counter.increment();
    }

    /// Steps the counter down by one
    pub fn decrement(&mut self) {
        self.counter.decrement();
    }

    /// Handles a keyboard event
    pub fn on_key(&mut self, event: KeyEvent) {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(event.code, KeyCode::Char('c' | 'q')) {
                self.should_quit = true;
            }
            return;
        }

        match event.code {
            KeyCode::Char('+') | KeyCode::Up => self.increment(),
            KeyCode::Char('-') | KeyCode::Down => self.decrement(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Handles a mouse click at terminal coordinates, given the full
    /// screen area the app was last rendered into
    pub fn on_click(&mut self, area: Rect, x: u16, y: u16) {
        let (minus, _, plus) = button_areas(area);
        if contains(minus, x, y) {
            self.decrement();
        } else if contains(plus, x, y) {
            self.increment();
        }
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Splits the screen into (minus button, value, plus button) areas
///
/// Exposed separately so the event loop can hit test mouse clicks
/// against the same rectangles the renderer used.
#[must_use]
pub fn button_areas(area: Rect) -> (Rect, Rect, Rect) {
    let row = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area)[0];

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(9),
            Constraint::Length(7),
        ])
        .split(row);

    (cells[0], cells[1], cells[2])
}

/// Renders the counter UI to the frame
pub fn render(app: &CounterApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CounterUi::new(app);
    frame.render_widget(ui, area);
}

/// Counter UI widget
#[derive(Debug)]
pub struct CounterUi<'a> {
    app: &'a CounterApp,
}

impl<'a> CounterUi<'a> {
    /// Creates a new counter UI widget
    #[must_use]
    pub fn new(app: &'a CounterApp) -> Self {
        Self { app }
    }
}

impl Widget for CounterUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Counter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let (minus_area, value_area, plus_area) = button_areas(area);

        let button_style = Style::default().fg(Color::Cyan);
        let button_block = || {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
        };

        Paragraph::new(Span::styled("-", button_style))
            .centered()
            .block(button_block())
            .render(minus_area, buf);

        Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
        .block(button_block())
        .render(value_area, buf);

        Paragraph::new(Span::styled("+", button_style))
            .centered()
            .block(button_block())
            .render(plus_area, buf);
    }
}
