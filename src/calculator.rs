//! Integer arithmetic over `i64` operands.
//!
//! Every function is pure. Overflow wraps in two's complement, so none of
//! them can panic; the only failure is a zero divisor.

use thiserror::Error;

/// Errors returned by calculator operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid argument: division by zero")]
    InvalidArgument,
}

/// Returns `a + b`.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Returns `a - b`.
pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Returns the greater operand, or either one when they are equal.
pub fn max(a: i64, b: i64) -> i64 {
    if a >= b { a } else { b }
}

/// Returns `a / b`, truncated toward zero.
///
/// Fails with [`CalcError::InvalidArgument`] when `b` is zero.
pub fn divide(a: i64, b: i64) -> Result<i64, CalcError> {
    if b == 0 {
        return Err(CalcError::InvalidArgument);
    }
    Ok(a.wrapping_div(b))
}
