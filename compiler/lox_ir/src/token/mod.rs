//! Tokens produced by the scanner.

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// A literal value known at scan/parse time.
///
/// Tokens only ever carry `Number` or `Str`; the parser adds `Bool` and `Nil`
/// when it turns `true`/`false`/`nil` keywords into literal nodes.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => f.write_str(s),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => f.write_str("nil"),
        }
    }
}

/// A token with its source text and line.
///
/// The scanner works line by line, so a token knows its line but not its
/// column.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token (the raw, still-escaped text for strings).
    pub lexeme: String,
    /// Parsed value for `Number` and `String` tokens.
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Create a token carrying a parsed literal value.
    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: u32,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    /// The end-of-input marker.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    /// Create an identifier token, mostly for tests and synthesized nodes.
    pub fn identifier(name: impl Into<String>, line: u32) -> Self {
        Token::new(TokenKind::Identifier, name, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of file"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests;
