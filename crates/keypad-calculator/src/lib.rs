//! Keypad Calculator - button-grid arithmetic demo
//!
//! A single-screen calculator: a read-only display field above a fixed
//! 5x4 button grid, with every button mirrored by a physical key. Input
//! characters are accumulated into a display buffer under adjacency
//! validation, `=` (or Enter) normalizes and evaluates the buffered
//! expression, and evaluation failures are rendered as an error string
//! in the same display.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for token in ["5", "+", "3", "="] {
//!     calc.handle_token(token);
//! }
//! assert_eq!(calc.display(), "8");
//! ```

// Allow common test patterns in this demo crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::buffer::InputBuffer;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::normalizer::normalize;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::router::{classify, Action};
    pub use crate::core::{Calculator, EvalError, EvalResult, Operation};

    pub use crate::tui::{CalculatorApp, Keypad, KeypadButton};
}
