//! Runtime errors and the control signals that unwind statement execution.
//!
//! `EvalErrorKind` provides typed error categories; the factory functions
//! below (`division_by_zero()`, `undefined_variable()`, ...) are the public
//! way to build an [`EvalError`]. Errors are created without a line and the
//! interpreter attaches the line of the node that failed.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{BinaryOp, UnaryOp};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Result of executing a statement.
pub type ExecResult = Result<(), ControlAction>;

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Type/Operator
    #[error("operator '{}' cannot be applied to {left} and {right}", .op.as_symbol())]
    InvalidBinaryOp {
        op: BinaryOp,
        left: String,
        right: String,
    },
    #[error("operator '{}' cannot be applied to {operand}", .op.as_symbol())]
    InvalidUnaryOp { op: UnaryOp, operand: String },

    // Access
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot shorten string beyond itself (length {len}, removing {count})")]
    StringTooShort { len: usize, count: usize },
    #[error("count must be a non-negative whole number, got {count}")]
    InvalidCount { count: String },
    #[error("repeating a {len}-byte string {count} times exceeds the {limit}-byte limit")]
    StringTooLong {
        len: usize,
        count: usize,
        limit: usize,
    },

    // Function
    #[error("{type_name} is not callable")]
    NotCallable { type_name: String },
    #[error("{name} expects {expected} {}, got {got}", plural_args(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("maximum recursion depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },
    #[error("{name}: {message}")]
    NativeFailure { name: String, message: String },
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "enum fields are bound by reference in error format args"
)]
fn plural_args(n: &usize) -> &'static str {
    if *n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl EvalErrorKind {
    /// Error code for this category.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBinaryOp { .. } | Self::InvalidUnaryOp { .. } => ErrorCode::E6001,
            Self::UndefinedVariable { .. } => ErrorCode::E6002,
            Self::DivisionByZero => ErrorCode::E6003,
            Self::NotCallable { .. } => ErrorCode::E6004,
            Self::ArityMismatch { .. } => ErrorCode::E6005,
            Self::StringTooShort { .. } => ErrorCode::E6006,
            Self::InvalidCount { .. } => ErrorCode::E6007,
            Self::StackOverflow { .. } => ErrorCode::E6008,
            Self::NativeFailure { .. } => ErrorCode::E6009,
            Self::StringTooLong { .. } => ErrorCode::E6010,
        }
    }
}

/// A runtime error. Fatal to the current `interpret` call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source line of the node that failed.
    pub line: Option<u32>,
}

impl EvalError {
    #[cold]
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, line: None }
    }

    /// Attach a source line to this error.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Convert to a full Diagnostic for error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.code()).with_message(self.kind.to_string());
        match self.line {
            Some(line) => diag.with_line(line),
            None => diag,
        }
    }
}

/// Non-local exit from statement execution.
///
/// `Return` unwinds through blocks and loops and is caught at the call
/// boundary. `Error` unwinds all the way to `interpret`.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Return(Value),
    Error(EvalError),
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

// Binary Operation Errors

/// Operator applied to operand types it does not support.
#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp {
        op,
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    })
}

/// Prefix operator applied to an operand type it does not support.
#[cold]
pub fn invalid_unary_op(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp {
        op,
        operand: operand.type_name().to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// `"hi" - 5`
#[cold]
pub fn string_too_short(len: usize, count: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StringTooShort { len, count })
}

/// Repetition or truncation count that is negative, fractional or not finite.
#[cold]
pub fn invalid_count(count: f64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCount {
        count: count.to_string(),
    })
}

/// `"ab" * 1e18`
#[cold]
pub fn string_too_long(len: usize, count: usize, limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StringTooLong { len, count, limit })
}

// Variable and Function Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Maximum recursion depth exceeded error.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

/// A built-in function failed.
#[cold]
pub fn native_failure(name: &str, message: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NativeFailure {
        name: name.to_string(),
        message: message.to_string(),
    })
}
