//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is closed, so pattern matching
//! covers every operand combination and anything unmatched is a type error.

use std::rc::Rc;

use lox_ir::BinaryOp;

use crate::errors::{
    division_by_zero, invalid_binary_op, invalid_count, string_too_long, string_too_short,
};
use crate::{EvalError, EvalResult, Value};

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => subtract(left, right),
        BinaryOp::Mul => multiply(left, right),
        BinaryOp::Div => divide(left, right),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            compare(&left, &right, op)
        }
    }
}

/// Numbers add; if either side is a string the other is stringified and
/// the two are concatenated.
fn add(left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::string(format!("{left}{right}"))),
        _ => Err(invalid_binary_op(BinaryOp::Add, &left, &right)),
    }
}

/// Numbers subtract; `string - n` drops the last `n` characters.
fn subtract(left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
        (Value::Str(s), Value::Number(n)) => truncate(s, *n),
        _ => Err(invalid_binary_op(BinaryOp::Sub, &left, &right)),
    }
}

/// Numbers multiply; `string * n` repeats the string `n` times.
fn multiply(left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        (Value::Str(s), Value::Number(n)) => repeat(s, *n),
        _ => Err(invalid_binary_op(BinaryOp::Mul, &left, &right)),
    }
}

fn divide(left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Number(_), Value::Number(b)) if *b == 0.0 => Err(division_by_zero()),
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
        _ => Err(invalid_binary_op(BinaryOp::Div, &left, &right)),
    }
}

fn compare(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(invalid_binary_op(op, left, right));
    };
    let result = match op {
        BinaryOp::Lt => a < b,
        BinaryOp::LtEq => a <= b,
        BinaryOp::Gt => a > b,
        BinaryOp::GtEq => a >= b,
        _ => return Err(invalid_binary_op(op, left, right)),
    };
    Ok(Value::Bool(result))
}

/// Convert a repetition/truncation operand into a count.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "range and fraction are checked before the cast"
)]
fn count_from(n: f64) -> Result<usize, EvalError> {
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
        Ok(n as usize)
    } else {
        Err(invalid_count(n))
    }
}

fn truncate(s: &Rc<str>, n: f64) -> EvalResult {
    let count = count_from(n)?;
    let len = s.chars().count();
    if count > len {
        return Err(string_too_short(len, count));
    }
    Ok(Value::string(s.chars().take(len - count).collect::<String>()))
}

/// Largest string, in bytes, that repetition may produce.
pub const MAX_REPEAT_BYTES: usize = 1 << 28;

fn repeat(s: &Rc<str>, n: f64) -> EvalResult {
    let count = count_from(n)?;
    match s.len().checked_mul(count) {
        Some(total) if total <= MAX_REPEAT_BYTES => Ok(Value::string(s.repeat(count))),
        _ => Err(string_too_long(s.len(), count, MAX_REPEAT_BYTES)),
    }
}
