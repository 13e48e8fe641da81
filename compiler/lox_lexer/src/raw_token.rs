//! Raw tokens recognized by logos within a single source line.
//!
//! Anything that is not a string, punctuation, or comment is captured as a
//! [`RawToken::Word`] and classified afterwards (keyword, number, dotted
//! access, identifier). A lone `&`, `|` or `"` has no pattern and surfaces as
//! a logos error.

use logos::Logos;
use lox_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // Opening quote with no closing quote before the end of the line
    #[regex(r#""([^"\\]|\\.)*\\?"#)]
    UnterminatedString,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!=")]
    BangEq,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // Keywords, numbers, identifiers and dotted accesses
    #[regex(r#"[^ \t\r\f\n"(){},;+\-*/!=<>&|]+"#)]
    Word,
}

impl RawToken {
    /// The token kind for punctuation and operators.
    ///
    /// Returns `None` for raw tokens that need further processing.
    pub(crate) fn punctuation(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::LParen => TokenKind::LeftParen,
            RawToken::RParen => TokenKind::RightParen,
            RawToken::LBrace => TokenKind::LeftBrace,
            RawToken::RBrace => TokenKind::RightBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::BangEq => TokenKind::BangEqual,
            RawToken::Bang => TokenKind::Bang,
            RawToken::EqEq => TokenKind::EqualEqual,
            RawToken::Eq => TokenKind::Equal,
            RawToken::LtEq => TokenKind::LessEqual,
            RawToken::Lt => TokenKind::Less,
            RawToken::GtEq => TokenKind::GreaterEqual,
            RawToken::Gt => TokenKind::Greater,
            RawToken::AmpAmp => TokenKind::And,
            RawToken::PipePipe => TokenKind::Or,
            RawToken::LineComment
            | RawToken::String
            | RawToken::UnterminatedString
            | RawToken::Word => return None,
        };
        Some(kind)
    }
}
