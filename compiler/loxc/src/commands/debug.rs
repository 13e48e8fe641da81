//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;
use std::path::Path;

use lox_diagnostic::Diagnostic;
use lox_ir::{AstPrinter, Token};

use super::{read_file, report_diagnostics};
use crate::config::exit_code;
use crate::pipeline::front_end;

/// Render a token stream, one token per line: line, kind, lexeme and
/// parsed literal if any.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = write!(out, "{:>4} {:?} {:?}", token.line, token.kind, token.lexeme);
        if let Some(literal) = &token.literal {
            let _ = write!(out, " = {literal}");
        }
        out.push('\n');
    }
    out
}

/// Scan `source` once, returning the rendered tokens and the lexical
/// diagnostics.
pub fn lex_source(source: &str) -> (String, Vec<Diagnostic>) {
    let scanned = lox_lexer::scan(source);
    let diagnostics = scanned
        .errors
        .iter()
        .map(lox_lexer::LexError::to_diagnostic)
        .collect();
    (render_tokens(&scanned.tokens), diagnostics)
}

/// Render every successfully parsed statement as an s-expression.
pub fn render_ast(source: &str) -> String {
    AstPrinter::print_program(&front_end(source).statements)
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &Path) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let (rendered, errors) = lex_source(&source);
    print!("{rendered}");
    report_diagnostics(&errors);
    if errors.is_empty() {
        exit_code::SUCCESS
    } else {
        exit_code::DATA_ERR
    }
}

/// Parse a file and print the syntax tree.
pub fn parse_file(path: &Path) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let front = front_end(&source);
    print!("{}", AstPrinter::print_program(&front.statements));
    report_diagnostics(&front.diagnostics);
    if front.has_errors() {
        exit_code::DATA_ERR
    } else {
        exit_code::SUCCESS
    }
}
