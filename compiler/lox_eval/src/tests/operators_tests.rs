//! Tests for binary operator implementations.

use lox_ir::BinaryOp;
use pretty_assertions::assert_eq;

use crate::operators::{evaluate_binary, MAX_REPEAT_BYTES};
use crate::{EvalErrorKind, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn error_kind(left: Value, right: Value, op: BinaryOp) -> EvalErrorKind {
    match evaluate_binary(left, right, op) {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => err.kind,
    }
}

#[test]
fn test_number_arithmetic() {
    assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Add).unwrap(), num(5.0));
    assert_eq!(evaluate_binary(num(5.0), num(3.0), BinaryOp::Sub).unwrap(), num(2.0));
    assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Mul).unwrap(), num(6.0));
    assert_eq!(evaluate_binary(num(7.0), num(2.0), BinaryOp::Div).unwrap(), num(3.5));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        error_kind(num(5.0), num(0.0), BinaryOp::Div),
        EvalErrorKind::DivisionByZero
    );
    assert_eq!(
        error_kind(num(0.0), num(-0.0), BinaryOp::Div),
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(evaluate_binary(num(1.0), num(2.0), BinaryOp::Lt).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_binary(num(2.0), num(2.0), BinaryOp::LtEq).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_binary(num(1.0), num(2.0), BinaryOp::Gt).unwrap(), Value::Bool(false));
    assert_eq!(evaluate_binary(num(3.0), num(2.0), BinaryOp::GtEq).unwrap(), Value::Bool(true));
}

#[test]
fn test_comparisons_require_numbers() {
    assert!(matches!(
        error_kind(Value::string("a"), Value::string("b"), BinaryOp::Lt),
        EvalErrorKind::InvalidBinaryOp { op: BinaryOp::Lt, .. }
    ));
}

#[test]
fn test_equality_over_any_types() {
    assert_eq!(evaluate_binary(Value::Nil, Value::Nil, BinaryOp::Eq).unwrap(), Value::Bool(true));
    assert_eq!(
        evaluate_binary(Value::Nil, Value::Bool(false), BinaryOp::Eq).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(num(1.0), Value::string("1"), BinaryOp::NotEq).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(Value::string("ab"), Value::string("ab"), BinaryOp::Eq).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_string_concatenation() {
    assert_eq!(
        evaluate_binary(Value::string("a"), Value::string("b"), BinaryOp::Add).unwrap(),
        Value::string("ab")
    );
    assert_eq!(
        evaluate_binary(Value::string("n = "), num(5.0), BinaryOp::Add).unwrap(),
        Value::string("n = 5")
    );
    assert_eq!(
        evaluate_binary(Value::Bool(true), Value::string("!"), BinaryOp::Add).unwrap(),
        Value::string("true!")
    );
    assert_eq!(
        evaluate_binary(Value::string("x"), Value::Nil, BinaryOp::Add).unwrap(),
        Value::string("xnil")
    );
}

#[test]
fn test_add_rejects_non_string_mixes() {
    assert!(matches!(
        error_kind(num(1.0), Value::Bool(true), BinaryOp::Add),
        EvalErrorKind::InvalidBinaryOp { op: BinaryOp::Add, .. }
    ));
    assert!(matches!(
        error_kind(Value::Nil, Value::Nil, BinaryOp::Add),
        EvalErrorKind::InvalidBinaryOp { .. }
    ));
}

#[test]
fn test_string_repetition() {
    assert_eq!(
        evaluate_binary(Value::string("ab"), num(3.0), BinaryOp::Mul).unwrap(),
        Value::string("ababab")
    );
    assert_eq!(
        evaluate_binary(Value::string("ab"), num(0.0), BinaryOp::Mul).unwrap(),
        Value::string("")
    );
}

#[test]
fn test_string_truncation() {
    assert_eq!(
        evaluate_binary(Value::string("hello"), num(2.0), BinaryOp::Sub).unwrap(),
        Value::string("hel")
    );
    assert_eq!(
        evaluate_binary(Value::string("hi"), num(2.0), BinaryOp::Sub).unwrap(),
        Value::string("")
    );
    assert_eq!(
        evaluate_binary(Value::string("héllo"), num(3.0), BinaryOp::Sub).unwrap(),
        Value::string("hé")
    );
    assert_eq!(
        error_kind(Value::string("hi"), num(5.0), BinaryOp::Sub),
        EvalErrorKind::StringTooShort { len: 2, count: 5 }
    );
}

#[test]
fn test_counts_must_be_whole_and_non_negative() {
    assert!(matches!(
        error_kind(Value::string("ab"), num(-1.0), BinaryOp::Mul),
        EvalErrorKind::InvalidCount { .. }
    ));
    assert!(matches!(
        error_kind(Value::string("ab"), num(1.5), BinaryOp::Sub),
        EvalErrorKind::InvalidCount { .. }
    ));
    assert!(matches!(
        error_kind(Value::string("ab"), num(f64::NAN), BinaryOp::Mul),
        EvalErrorKind::InvalidCount { .. }
    ));
}

#[test]
fn test_repetition_result_is_bounded() {
    assert_eq!(
        error_kind(Value::string("ab"), num(1e18), BinaryOp::Mul),
        EvalErrorKind::StringTooLong {
            len: 2,
            count: 1_000_000_000_000_000_000,
            limit: MAX_REPEAT_BYTES,
        }
    );
    let just_over = (MAX_REPEAT_BYTES / 2 + 1) as f64;
    assert!(matches!(
        error_kind(Value::string("ab"), num(just_over), BinaryOp::Mul),
        EvalErrorKind::StringTooLong { .. }
    ));
    // Overflowing usize is reported the same way
    assert!(matches!(
        error_kind(Value::string("ab"), num(1.8e19), BinaryOp::Mul),
        EvalErrorKind::StringTooLong { .. }
    ));
}

#[test]
fn test_number_first_string_ops_are_errors() {
    assert!(matches!(
        error_kind(num(3.0), Value::string("ab"), BinaryOp::Mul),
        EvalErrorKind::InvalidBinaryOp { op: BinaryOp::Mul, .. }
    ));
    assert!(matches!(
        error_kind(Value::string("a"), Value::string("b"), BinaryOp::Sub),
        EvalErrorKind::InvalidBinaryOp { op: BinaryOp::Sub, .. }
    ));
}
