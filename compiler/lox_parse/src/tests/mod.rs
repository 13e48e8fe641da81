//! Parser tests.
//!
//! Programs are scanned with the real lexer and compared through
//! `AstPrinter`, which keeps expected trees readable.


use lox_ir::{AstPrinter, Stmt};

use crate::{parse, ParseResult};

fn parse_source(source: &str) -> ParseResult {
    let scanned = lox_lexer::scan(source);
    parse(&scanned.tokens)
}

/// Parse and render, asserting there were no errors.
fn render(source: &str) -> String {
    let result = parse_source(source);
    assert!(
        !result.has_errors(),
        "unexpected parse errors: {:?}",
        result.errors
    );
    render_statements(&result.statements)
}

fn render_statements(statements: &[Stmt]) -> String {
    AstPrinter::print_program(statements)
}
