//! Scanner behaviour seen from the driver.

use lox_ir::{Literal, TokenKind};
use pretty_assertions::assert_eq;

use super::common::{kinds, tokens};

#[test]
fn simple_arithmetic() {
    assert_eq!(
        kinds("1 + 2"),
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
    let toks = tokens("1 + 2");
    assert_eq!(toks[0].literal, Some(Literal::Number(1.0)));
    assert_eq!(toks[2].literal, Some(Literal::Number(2.0)));
}

#[test]
fn escaped_quotes_in_string() {
    let toks = tokens(r#""say \"hi\"""#);
    assert_eq!(toks.len(), 2);
    assert_eq!(toks[0].kind, TokenKind::String);
    assert_eq!(toks[0].literal, Some(Literal::Str("say \"hi\"".to_string())));
}

#[test]
fn keywords_and_symbolic_logic() {
    assert_eq!(kinds("a and b"), kinds("a && b"));
    assert_eq!(kinds("a or b"), kinds("a || b"));
}

#[test]
fn eof_is_on_the_line_after_the_last() {
    let toks = tokens("print 1;\nprint 2;");
    let eof = toks.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.line, 3);
}

#[test]
fn rescanning_is_identical() {
    let source = "fun f(x) { return x * 2; }\nprint f(21);";
    assert_eq!(lox_lexer::scan(source), lox_lexer::scan(source));
}
