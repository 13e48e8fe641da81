//! Line-oriented scanner for Lox using logos.
//!
//! Each source line is scanned on its own: strings are peeled off first,
//! then punctuation, and the remaining whitespace-separated words are
//! classified as keywords, numbers, dotted accesses or identifiers. Tokens
//! carry the 1-based line they came from; the trailing `Eof` token sits one
//! line past the last line of input.

mod classify;
mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{Literal, Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};

use raw_token::RawToken;

/// Result of scanning a source text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order, always terminated by a single `Eof`.
    pub tokens: Vec<Token>,
    /// Lexical errors; each has a matching `TokenKind::Error` token.
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    /// Check if any lexical errors were recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn push_error(&mut self, error: LexError) {
        tracing::debug!(line = error.line, lexeme = %error.lexeme, "lexical error: {error}");
        self.tokens
            .push(Token::new(TokenKind::Error, error.lexeme.clone(), error.line));
        self.errors.push(error);
    }
}

/// Scan source text into tokens.
///
/// Never fails: unrecognized fragments become `Error` tokens and are
/// reported in [`ScanOutput::errors`].
pub fn scan(source: &str) -> ScanOutput {
    let mut out = ScanOutput::default();
    let mut last_line = 0;

    for (index, text) in source.lines().enumerate() {
        let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
        scan_line(text, line, &mut out);
        last_line = line;
    }

    out.tokens.push(Token::eof(last_line.saturating_add(1)));
    out
}

/// Scan a single line, appending its tokens to `out`.
fn scan_line(text: &str, line: u32, out: &mut ScanOutput) {
    let mut lexer = RawToken::lexer(text);

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();

        match result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::String) => {
                let value = escape::unescape_string(&slice[1..slice.len() - 1]);
                out.tokens.push(Token::with_literal(
                    TokenKind::String,
                    slice,
                    Literal::Str(value),
                    line,
                ));
            }
            Ok(RawToken::UnterminatedString) => {
                out.push_error(LexError::unterminated_string(slice, line));
            }
            Ok(RawToken::Word) => classify::push_word(slice, line, out),
            Ok(raw) => {
                if let Some(kind) = raw.punctuation() {
                    out.tokens.push(Token::new(kind, slice, line));
                }
            }
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\u{fffd}');
                out.push_error(LexError::invalid_character(slice, found, line));
            }
        }
    }
}
