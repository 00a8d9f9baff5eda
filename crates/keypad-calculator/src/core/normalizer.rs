//! Expression normalization applied before evaluation
//!
//! Two rewrites, both pure string transforms:
//! - leading zeros on a numeric literal are stripped ("007+1" -> "7+1"),
//!   without touching zeros inside decimals ("1.05" stays "1.05");
//! - a digit directly followed by an open parenthesis gets an explicit
//!   multiplication sign ("2(3+4)" -> "2*(3+4)").
//!
//! A single pass reaches normal form, so the transform is idempotent.

use regex::Regex;

/// Rewrites a raw expression into a form safe for evaluation
///
/// Total: any input string comes back rewritten, never an error.
#[must_use]
pub fn normalize(expr: &str) -> String {
    // A zero run is "leading" only when the literal starts there; a
    // preceding digit or '.' means the zeros are interior to a number.
    let leading_zeros = Regex::new(r"(^|[^0-9.])0+([0-9])").unwrap();
    let implicit_mul = Regex::new(r"([0-9])\(").unwrap();

    let stripped = leading_zeros.replace_all(expr, "${1}${2}");
    implicit_mul.replace_all(&stripped, "${1}*(").to_string()
}
