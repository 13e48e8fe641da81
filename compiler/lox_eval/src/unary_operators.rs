//! Unary operator implementations for the evaluator.

use lox_ir::UnaryOp;

use crate::errors::invalid_unary_op;
use crate::{EvalResult, Value};

/// Evaluate a prefix operation.
///
/// `!` only accepts booleans and `-` only accepts numbers; truthiness is
/// reserved for conditions.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (op, &value) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        _ => Err(invalid_unary_op(op, &value)),
    }
}
