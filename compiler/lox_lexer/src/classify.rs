//! Classification of whitespace-delimited words.
//!
//! Order matters: an exact keyword wins, then a whole-word number, then a
//! dotted split (each segment classified on its own), then an identifier.

use lox_ir::{Literal, Token, TokenKind};

use crate::{LexError, ScanOutput};

pub(crate) fn push_word(word: &str, line: u32, out: &mut ScanOutput) {
    if let Some(kind) = TokenKind::keyword(word) {
        out.tokens.push(Token::new(kind, word, line));
        return;
    }

    if let Some(value) = parse_number(word) {
        out.tokens.push(Token::with_literal(
            TokenKind::Number,
            word,
            Literal::Number(value),
            line,
        ));
        return;
    }

    if word.contains('.') {
        for (i, segment) in word.split('.').enumerate() {
            if i > 0 {
                out.tokens.push(Token::new(TokenKind::Dot, ".", line));
            }
            if !segment.is_empty() {
                push_word(segment, line, out);
            }
        }
        return;
    }

    if is_identifier(word) {
        out.tokens.push(Token::identifier(word, line));
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        out.push_error(LexError::invalid_number(word, line));
    } else {
        let found = word
            .chars()
            .find(|&c| !is_identifier_char(c))
            .or_else(|| word.chars().next())
            .unwrap_or('\u{fffd}');
        out.push_error(LexError::invalid_character(word, found, line));
    }
}

/// Parse `[0-9]+(\.[0-9]+)?` as a number.
fn parse_number(word: &str) -> Option<f64> {
    let (int, frac) = match word.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (word, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !frac.map_or(true, all_digits) {
        return None;
    }
    word.parse().ok()
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(is_identifier_char),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_shapes() {
        assert_eq!(parse_number("123"), Some(123.0));
        assert_eq!(parse_number("4.5"), Some(4.5));
        assert_eq!(parse_number("4."), None);
        assert_eq!(parse_number(".5"), None);
        assert_eq!(parse_number("1e5"), None);
        assert_eq!(parse_number("1.2.3"), None);
    }

    #[test]
    fn identifier_shapes() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_tmp1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a@b"));
        assert!(!is_identifier(""));
    }
}
