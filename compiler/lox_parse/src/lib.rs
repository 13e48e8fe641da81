//! Recursive descent parser for Lox.
//!
//! Consumes the scanner's token list and produces a list of statements.
//! A syntax error abandons only the declaration it occurs in: the parser
//! records the error, skips the rest of that declaration, and keeps going,
//! so one pass reports every independent error.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;

use lox_ir::{Stmt, Token, TokenKind};
use recovery::skip_declaration;

/// Result of parsing a token list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseResult {
    /// Successfully parsed top-level declarations, in source order.
    pub statements: Vec<Stmt>,
    /// One error per abandoned declaration.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Check if any parse errors occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind, expected)
    }

    #[inline]
    fn expect_ident(&mut self, expected: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect_ident(expected)
    }

    /// Parse declarations until end of input.
    pub fn parse_program(mut self) -> ParseResult {
        let mut result = ParseResult::default();

        while !self.is_at_end() {
            let start = self.cursor.position();
            match self.parse_declaration() {
                Ok(stmt) => result.statements.push(stmt),
                Err(error) => {
                    self.recover(start, &error);
                    result.errors.push(error);
                }
            }
        }

        result
    }

    /// Skip the rest of a failed declaration.
    fn recover(&mut self, start: usize, error: &ParseError) {
        tracing::debug!(
            line = error.line,
            code = %error.code,
            "parse error, skipping declaration: {error}"
        );
        skip_declaration(&mut self.cursor, start);
    }
}

/// Parse tokens into a list of statements.
pub fn parse(tokens: &[Token]) -> ParseResult {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
