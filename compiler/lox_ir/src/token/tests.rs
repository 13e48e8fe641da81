use super::*;

#[test]
fn keyword_lookup() {
    assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    assert_eq!(TokenKind::keyword("nil"), Some(TokenKind::Nil));
    assert_eq!(TokenKind::keyword("and"), Some(TokenKind::And));
    assert_eq!(TokenKind::keyword("or"), Some(TokenKind::Or));
    assert_eq!(TokenKind::keyword("While"), None);
    assert_eq!(TokenKind::keyword("class"), None);
}

#[test]
fn discriminant_indices_are_dense() {
    assert_eq!(TokenKind::LeftParen.discriminant_index(), 0);
    assert_eq!(
        usize::from(TokenKind::Eof.discriminant_index()),
        TokenKind::COUNT - 1
    );
    // Recovery sets are a u64 bitset
    assert!(TokenKind::COUNT <= 64);
}

#[test]
fn token_display_quotes_lexeme() {
    assert_eq!(Token::identifier("count", 3).to_string(), "'count'");
    assert_eq!(Token::eof(9).to_string(), "end of file");
}

#[test]
fn literal_display() {
    assert_eq!(Literal::Number(5.0).to_string(), "5");
    assert_eq!(Literal::Number(2.5).to_string(), "2.5");
    assert_eq!(Literal::Str("hi".to_string()).to_string(), "hi");
    assert_eq!(Literal::Bool(false).to_string(), "false");
    assert_eq!(Literal::Nil.to_string(), "nil");
}
