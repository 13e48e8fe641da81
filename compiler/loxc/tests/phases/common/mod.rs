//! Shared helpers for phase tests.

use lox_diagnostic::Diagnostic;
use lox_eval::{buffer_handler, InterpreterBuilder};
use lox_ir::{Token, TokenKind};
use loxc::{run_source, RunOutcome};

/// Result of running a whole program with captured output.
pub struct Run {
    pub output: String,
    pub outcome: RunOutcome,
}

impl Run {
    pub fn runtime_error(&self) -> &Diagnostic {
        match &self.outcome.runtime_error {
            Some(diagnostic) => diagnostic,
            None => panic!("expected a runtime error, got {:?}", self.outcome),
        }
    }
}

/// Run `source` in a fresh interpreter that prints into a buffer.
pub fn run(source: &str) -> Run {
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let outcome = run_source(&mut interpreter, source);
    Run {
        output: handler.get_output(),
        outcome,
    }
}

/// Run `source` and return its output, failing on any error.
pub fn output_of(source: &str) -> String {
    let run = run(source);
    assert_eq!(
        run.outcome,
        RunOutcome::default(),
        "program failed:\n{source}"
    );
    run.output
}

/// Token kinds of `source`, including the final `Eof`.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).iter().map(|t| t.kind).collect()
}

pub fn tokens(source: &str) -> Vec<Token> {
    let scanned = lox_lexer::scan(source);
    assert!(scanned.errors.is_empty(), "lex errors: {:?}", scanned.errors);
    scanned.tokens
}
