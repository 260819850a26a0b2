//! Integer arithmetic operations.
//!
//! All four operations are pure and synchronous. Division by zero returns
//! zero instead of signaling an error.

/// Adds two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Subtracts `b` from `a`.
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// Multiplies two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Divides `a` by `b`, truncating toward zero.
///
/// A zero divisor yields zero.
pub fn divide(a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else {
        a / b
    }
}
