//! Calculator state machine tying buffer, normalization and evaluation
//! together behind a single token entry point

use crate::core::buffer::InputBuffer;
use crate::core::evaluator::Evaluator;
use crate::core::normalizer::normalize;
use crate::core::router::{classify, Action};

/// Formats an evaluation result for the display
///
/// Whole numbers print without a decimal part; everything else prints
/// with up to ten fractional digits, trailing zeros trimmed.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// The calculator: a display buffer plus an expression evaluator
///
/// All input arrives through [`Calculator::handle_token`], whether it
/// originated as a button press or a keystroke. Evaluation never fails
/// outward; errors become display text.
#[derive(Debug, Default)]
pub struct Calculator {
    buffer: InputBuffer,
    evaluator: Evaluator,
}

impl Calculator {
    /// Creates a calculator with an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    /// Routes one input token through classification and applies it
    pub fn handle_token(&mut self, token: &str) {
        self.apply(classify(token));
    }

    /// Applies a classified action to the calculator state
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Append(c) => self.buffer.push(c),
            Action::Evaluate => self.evaluate(),
            Action::Backspace => self.buffer.backspace(),
            Action::Clear => self.buffer.clear(),
            Action::Ignore => {}
        }
    }

    /// Evaluates the buffered expression in place
    ///
    /// An empty buffer or a bare "0" is left alone. On success the
    /// display shows the formatted result; on failure it shows the
    /// error prefixed with "Error: ".
    fn evaluate(&mut self) {
        let current = self.buffer.as_str();
        if current.is_empty() || current == "0" {
            return;
        }

        let expr = normalize(current);
        match self.evaluator.evaluate_str(&expr) {
            Ok(value) => self.buffer.replace(&format_result(value)),
            Err(e) => self.buffer.replace(&format!("Error: {e}")),
        }
    }
}
