//! Counter state

/// A click counter
///
/// The whole model: one signed value, stepped by one in either
/// direction. Starts at zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Creates a counter at zero
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Returns the current value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Steps the counter up by one
    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Steps the counter down by one
    pub fn decrement(&mut self) {
        self.value -= 1;
    }

    /// Returns the value as display text
    #[must_use]
    pub fn display(&self) -> String {
        self.value.to_string()
    }
}
