//! Click Counter - button-driven counter demo
//!
//! A single value flanked by "-" and "+" buttons, each stepping the
//! counter by one. Keys mirror the buttons; the value itself is a
//! read-only field.
//!
//! # Example
//!
//! ```rust
//! use click_counter::Counter;
//!
//! let mut counter = Counter::new();
//! counter.increment();
//! counter.increment();
//! counter.decrement();
//! assert_eq!(counter.value(), 1);
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod counter;
pub mod tui;

pub use counter::Counter;
pub use tui::{button_areas, render, CounterApp, CounterUi};
