//! Error recovery for the parser.
//!
//! After a syntax error the rest of the failed declaration is skipped, so
//! nothing nested inside it resurfaces as a top-level statement. Token sets
//! use a bitset for O(1) membership testing.

use lox_ir::TokenKind;

use crate::Cursor;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u64 corresponds to a `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Tokens that begin a new declaration or statement.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Declarations that can contain other statements.
const COMPOUND_START: TokenSet = TokenSet::new()
    .with(TokenKind::Fun)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::LeftBrace);

/// Brace depth of the tokens skipped so far.
#[derive(Default)]
struct Nesting {
    depth: usize,
    /// The last token closed the outermost open brace.
    closed: bool,
}

impl Nesting {
    fn step(&mut self, kind: TokenKind) {
        self.closed = false;
        match kind {
            TokenKind::LeftBrace => self.depth += 1,
            TokenKind::RightBrace if self.depth > 0 => {
                self.depth -= 1;
                self.closed = self.depth == 0;
            }
            _ => {}
        }
    }
}

/// Skip the rest of the declaration that began at token index `start`.
///
/// Braces opened since `start` are tracked so the skip ends after the
/// matching `}` or after a `;` outside any braces. An `else` right after
/// that point still belongs to the declaration. Simple statements can hold
/// no nested statements, so for them the next statement keyword also ends
/// the skip.
///
/// Always leaves the cursor past `start`.
pub fn skip_declaration(cursor: &mut Cursor<'_>, start: usize) {
    if cursor.position() == start {
        cursor.advance();
    }

    let consumed = cursor.consumed_since(start);
    let compound = consumed
        .first()
        .is_some_and(|token| COMPOUND_START.contains(token.kind));
    let mut nesting = Nesting::default();
    for token in consumed {
        nesting.step(token.kind);
    }

    while !cursor.is_at_end() {
        if nesting.depth == 0 {
            let ended = nesting.closed
                || cursor
                    .previous()
                    .is_some_and(|token| token.kind == TokenKind::Semicolon);
            if ended && !(compound && cursor.check(TokenKind::Else)) {
                return;
            }
            if !compound && STMT_BOUNDARY.contains(cursor.current_kind()) {
                return;
            }
        }
        nesting.step(cursor.advance().kind);
    }
}
