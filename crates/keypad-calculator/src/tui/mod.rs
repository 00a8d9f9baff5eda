//! Terminal frontend for the calculator

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyInput};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, screen_layout, CalculatorUi};
