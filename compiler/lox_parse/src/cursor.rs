//! Token cursor for parser navigation.

use lox_diagnostic::ErrorCode;
use lox_ir::{Token, TokenKind};

use crate::ParseError;

/// Stand-in returned when the stream is empty or lacks a trailing `Eof`.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: None,
    line: 0,
};

/// Cursor for navigating tokens.
///
/// Only moves forward. Reading past the end yields an `Eof` token, so
/// callers never need bounds checks.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current position in the token stream.
    ///
    /// Used for progress tracking during error recovery.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the most recently consumed token.
    #[inline]
    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Tokens consumed since `start`, in order.
    #[inline]
    pub fn consumed_since(&self, start: usize) -> &'a [Token] {
        self.tokens.get(start..self.pos).unwrap_or(&[])
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// At `Eof` the cursor stays put and keeps returning `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and return it.
    ///
    /// `expected` describes what was wanted, e.g. `"';' after value"`.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(ErrorCode::E1001, expected))
        }
    }

    /// Expect an identifier, advance and return it.
    #[inline]
    pub fn expect_ident(&mut self, expected: &str) -> Result<&'a Token, ParseError> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(ErrorCode::E1004, expected))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, code: ErrorCode, expected: &str) -> ParseError {
        ParseError::unexpected(code, expected, self.current())
    }
}
