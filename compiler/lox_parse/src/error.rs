//! Parse error type.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Token;

/// A parse error at a specific token.
///
/// Aborts the enclosing declaration only; the parser resynchronizes and
/// keeps going.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Line of the offending token.
    pub line: u32,
    /// Source text of the offending token (empty at end of file).
    pub lexeme: String,
}

impl ParseError {
    /// Create a new parse error at `token`.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, token: &Token) -> Self {
        ParseError {
            code,
            message: message.into(),
            line: token.line,
            lexeme: token.lexeme.clone(),
        }
    }

    /// `expected {expected}, found {token}`.
    #[cold]
    pub fn unexpected(code: ErrorCode, expected: &str, found: &Token) -> Self {
        Self::new(code, format!("expected {expected}, found {found}"), found)
    }

    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        Self::new(
            ErrorCode::E1002,
            format!("expected expression, found {found}"),
            found,
        )
    }

    #[cold]
    pub fn invalid_assignment_target(equals: &Token) -> Self {
        Self::new(ErrorCode::E1005, "invalid assignment target", equals)
    }

    /// Convert to a full Diagnostic for error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_line(self.line)
    }
}
