//! Core calculator logic: input accumulation, normalization, evaluation
//! and event routing. Everything here is plain state-in/state-out code
//! with no terminal dependencies.

pub mod buffer;
pub mod evaluator;
pub mod normalizer;
pub mod parser;
pub mod router;

mod calculator;

pub use calculator::{format_result, Calculator};

use thiserror::Error;

/// Result type for expression evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluation error taxonomy
///
/// Every failure mode of the expression backend maps to one of these
/// four categories; all of them surface to the user as a display string
/// and never escape the evaluation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Malformed syntax: unbalanced parentheses, trailing operator,
    /// empty expression, unexpected character
    #[error("invalid syntax: {0}")]
    Syntax(String),
    /// Reference to an undefined identifier
    #[error("name '{0}' is not defined")]
    Name(String),
    /// Type mismatch reported by the evaluation backend
    #[error("type mismatch: {0}")]
    Type(String),
    /// Division (or remainder) by zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Binary operator recognized by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Applies the operation to two operands
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== EvalError tests =====

    #[test]
    fn test_eval_error_display_syntax() {
        let err = EvalError::Syntax("unclosed parenthesis".into());
        assert_eq!(format!("{err}"), "invalid syntax: unclosed parenthesis");
    }

    #[test]
    fn test_eval_error_display_name() {
        let err = EvalError::Name("pi".into());
        assert_eq!(format!("{err}"), "name 'pi' is not defined");
    }

    #[test]
    fn test_eval_error_display_type() {
        let err = EvalError::Type("expected a number".into());
        assert_eq!(format!("{err}"), "type mismatch: expected a number");
    }

    #[test]
    fn test_eval_error_display_division_by_zero() {
        let err = EvalError::DivisionByZero;
        assert_eq!(format!("{err}"), "division by zero");
    }

    #[test]
    fn test_eval_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(EvalError::DivisionByZero);
        assert!(err.to_string().contains("division"));
    }

    // ===== Operation tests =====

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
    }

    #[test]
    fn test_operation_precedence() {
        assert_eq!(Operation::Add.precedence(), 1);
        assert_eq!(Operation::Subtract.precedence(), 1);
        assert_eq!(Operation::Multiply.precedence(), 2);
        assert_eq!(Operation::Divide.precedence(), 2);
    }

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(4.0, 3.0), Ok(12.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operation::Divide.apply(12.0, 4.0), Ok(3.0));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(1.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_decimals() {
        let result = Operation::Add.apply(0.1, 0.2).unwrap();
        assert!((result - 0.3).abs() < 1e-10);
    }
}
