//! Display buffer with validated input accumulation
//!
//! The buffer is the only piece of calculator state: the accumulated
//! user expression before evaluation, or the result/error text after it.
//! Tokens are appended one at a time under an adjacency rule that keeps
//! two operator characters from ever sitting next to each other.

/// Returns true for characters the calculator accepts as input
#[must_use]
pub fn is_input_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
}

/// Returns true for characters subject to the adjacency restriction:
/// arithmetic operators, grouping symbols and the decimal point
#[must_use]
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
}

/// The calculator display buffer
///
/// Owned by the active screen; mutated only through the methods below.
/// `push` silently drops tokens that would violate the adjacency rule,
/// so at any point before evaluation no two adjacent characters are
/// both operator characters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
}

impl InputBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffered text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true when nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Appends one token, rolling back disallowed combinations
    ///
    /// Characters outside the input alphabet are dropped. An operator
    /// token directly after another operator token is dropped as well;
    /// everything else is appended.
    pub fn push(&mut self, token: char) {
        if !is_input_char(token) {
            return;
        }
        if let Some(last) = self.value.chars().last() {
            if is_operator_char(last) && is_operator_char(token) {
                return;
            }
        }
        self.value.push(token);
    }

    /// Removes the last character; no-op on an empty buffer
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Resets the buffer to empty
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Replaces the whole buffer, bypassing input validation
    ///
    /// Used by the evaluation step to show a result or error string.
    /// The replaced text can still be edited with `backspace` or wiped
    /// with `clear`.
    pub fn replace(&mut self, text: &str) {
        self.value.clear();
        self.value.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(buffer: &mut InputBuffer, tokens: &str) {
        for c in tokens.chars() {
            buffer.push(c);
        }
    }

    // ===== Character class tests =====

    #[test]
    fn test_input_chars_digits() {
        for c in '0'..='9' {
            assert!(is_input_char(c), "digit {c} should be accepted");
        }
    }

    #[test]
    fn test_input_chars_symbols() {
        for c in ['+', '-', '*', '/', '(', ')', '.'] {
            assert!(is_input_char(c), "symbol {c} should be accepted");
        }
    }

    #[test]
    fn test_input_chars_rejected() {
        for c in ['a', 'Z', '=', '%', '^', ' ', '@'] {
            assert!(!is_input_char(c), "char '{c}' should be rejected");
        }
    }

    #[test]
    fn test_operator_chars() {
        for c in ['+', '-', '*', '/', '(', ')', '.'] {
            assert!(is_operator_char(c));
        }
        for c in '0'..='9' {
            assert!(!is_operator_char(c));
        }
    }

    // ===== Append tests =====

    #[test]
    fn test_push_digits() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "123");
        assert_eq!(buffer.as_str(), "123");
    }

    #[test]
    fn test_push_expression() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "12+34");
        assert_eq!(buffer.as_str(), "12+34");
    }

    #[test]
    fn test_push_operator_after_operator_dropped() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "1++2");
        assert_eq!(buffer.as_str(), "1+2");
    }

    #[test]
    fn test_push_mixed_operators_dropped() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "1+*2");
        assert_eq!(buffer.as_str(), "1+2");
    }

    #[test]
    fn test_push_double_decimal_dropped() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "1..5");
        assert_eq!(buffer.as_str(), "1.5");
    }

    #[test]
    fn test_push_operator_as_first_char() {
        // Nothing precedes the first token, so a leading minus is fine
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "-5");
        assert_eq!(buffer.as_str(), "-5");
    }

    #[test]
    fn test_push_paren_after_digit() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "2(3+4)");
        assert_eq!(buffer.as_str(), "2(3+4)");
    }

    #[test]
    fn test_push_repeated_digit_allowed() {
        // A digit that already appears elsewhere is still a legal token
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "5+5");
        assert_eq!(buffer.as_str(), "5+5");
    }

    #[test]
    fn test_push_disallowed_char_ignored() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "1a2");
        assert_eq!(buffer.as_str(), "12");
    }

    // ===== Backspace / clear tests =====

    #[test]
    fn test_backspace() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "123");
        buffer.backspace();
        assert_eq!(buffer.as_str(), "12");
    }

    #[test]
    fn test_backspace_empty_is_noop() {
        let mut buffer = InputBuffer::new();
        buffer.backspace();
        assert_eq!(buffer.as_str(), "");
    }

    #[test]
    fn test_clear() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "12+34");
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear_empty() {
        let mut buffer = InputBuffer::new();
        buffer.clear();
        assert!(buffer.is_empty());
    }

    // ===== Replace tests =====

    #[test]
    fn test_replace_sets_arbitrary_text() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "1/0");
        buffer.replace("Error: division by zero");
        assert_eq!(buffer.as_str(), "Error: division by zero");
    }

    #[test]
    fn test_replace_then_backspace_edits_text() {
        let mut buffer = InputBuffer::new();
        buffer.replace("Error: x");
        buffer.backspace();
        assert_eq!(buffer.as_str(), "Error: ");
    }

    // ===== Invariant =====

    #[test]
    fn test_no_adjacent_operators_after_appends() {
        let mut buffer = InputBuffer::new();
        push_all(&mut buffer, "((1++2)*/3..4--5");
        let chars: Vec<char> = buffer.as_str().chars().collect();
        for pair in chars.windows(2) {
            assert!(
                !(is_operator_char(pair[0]) && is_operator_char(pair[1])),
                "adjacent operators {pair:?} in {:?}",
                buffer.as_str()
            );
        }
    }
}
