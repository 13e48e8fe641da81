//! Lexer error types.
//!
//! A lexical error never stops the scan: the offending fragment is emitted
//! as a `TokenKind::Error` token and the error is recorded alongside it.

use lox_diagnostic::{Diagnostic, ErrorCode};

/// A lexer error with the fragment and line it was found on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// The offending source fragment.
    pub lexeme: String,
    /// 1-based source line.
    pub line: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"` before the end of the line.
    #[error("unterminated string")]
    UnterminatedString,
    /// A character that cannot start any token.
    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),
    /// A word starting with a digit that is not a number (e.g. `5abc`).
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
}

impl LexError {
    pub fn unterminated_string(lexeme: &str, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            lexeme: lexeme.to_owned(),
            line,
        }
    }

    /// `found` is the character that made `lexeme` unusable.
    pub fn invalid_character(lexeme: &str, found: char, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::InvalidCharacter(found),
            lexeme: lexeme.to_owned(),
            line,
        }
    }

    pub fn invalid_number(lexeme: &str, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::InvalidNumber(lexeme.to_owned()),
            lexeme: lexeme.to_owned(),
            line,
        }
    }

    /// Error code for this error's kind.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::InvalidNumber(_) => ErrorCode::E0003,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_line(self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_construction() {
        let err = LexError::unterminated_string("\"abc", 2);
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.lexeme, "\"abc");
        assert_eq!(err.code(), ErrorCode::E0001);
    }

    #[test]
    fn invalid_character_names_offending_char() {
        let err = LexError::invalid_character("a@b", '@', 1);
        assert_eq!(err.kind, LexErrorKind::InvalidCharacter('@'));
        assert_eq!(err.lexeme, "a@b");
        assert_eq!(err.to_string(), "unexpected character '@'");
    }

    #[test]
    fn diagnostic_carries_line_and_code() {
        let diag = LexError::invalid_number("5abc", 4).to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E0003);
        assert_eq!(diag.line, Some(4));
        assert_eq!(
            diag.to_string(),
            "[line 4] error[E0003]: invalid number literal '5abc'"
        );
    }
}
