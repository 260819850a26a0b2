//! Integration tests for the arithmetic operations

use intcalc::core::ops::{add, divide, multiply, subtract};
use intcalc::models::Op;

const SAMPLE_PAIRS: &[(i64, i64)] = &[
    (0, 0),
    (1, 1),
    (2, 3),
    (-1, 1),
    (-2, 3),
    (5, 0),
    (0, 5),
    (7, 3),
    (10, -10),
    (-9, -4),
    (123, 456),
];

#[test]
fn test_concrete_scenarios() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-1, 1), 0);
    assert_eq!(subtract(5, 3), 2);
    assert_eq!(subtract(0, 5), -5);
    assert_eq!(multiply(3, 4), 12);
    assert_eq!(multiply(-2, 3), -6);
    assert_eq!(divide(10, 2), 5);
    assert_eq!(divide(7, 3), 2);
    assert_eq!(divide(5, 0), 0);
}

#[test]
fn test_add_is_commutative() {
    for &(a, b) in SAMPLE_PAIRS {
        assert_eq!(add(a, b), add(b, a), "add({}, {})", a, b);
    }
}

#[test]
fn test_multiply_is_commutative() {
    for &(a, b) in SAMPLE_PAIRS {
        assert_eq!(multiply(a, b), multiply(b, a), "multiply({}, {})", a, b);
    }
}

#[test]
fn test_subtract_is_antisymmetric() {
    for &(a, b) in SAMPLE_PAIRS {
        assert_eq!(subtract(a, b), -subtract(b, a), "subtract({}, {})", a, b);
    }
}

#[test]
fn test_divide_by_zero_always_yields_zero() {
    for &(a, _) in SAMPLE_PAIRS {
        assert_eq!(divide(a, 0), 0, "divide({}, 0)", a);
    }
}

#[test]
fn test_op_apply_matches_free_functions() {
    for &op in Op::all() {
        for &(a, b) in SAMPLE_PAIRS {
            let expected = match op {
                Op::Add => add(a, b),
                Op::Subtract => subtract(a, b),
                Op::Multiply => multiply(a, b),
                Op::Divide => divide(a, b),
            };
            assert_eq!(op.apply(a, b), expected, "{}({}, {})", op, a, b);
        }
    }
}
