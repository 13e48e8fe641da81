use lox_diagnostic::ErrorCode;
use lox_eval::{buffer_handler, InterpreterBuilder, SharedPrintHandler};
use pretty_assertions::assert_eq;

use super::*;

fn interpreter() -> (Interpreter, SharedPrintHandler) {
    let handler = buffer_handler();
    let interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    (interpreter, handler)
}

#[test]
fn completed_run() {
    let (mut interp, out) = interpreter();
    let outcome = run_source(&mut interp, "print 1 + 2;");
    assert_eq!(outcome, RunOutcome::default());
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(out.get_output(), "3\n");
}

#[test]
fn static_errors_skip_only_their_declarations() {
    let (mut interp, out) = interpreter();
    let outcome = run_source(&mut interp, "print 1;\nvar = 2;\nprint 3;");
    assert_eq!(outcome.static_errors.len(), 1);
    assert_eq!(outcome.static_errors[0].code, ErrorCode::E1004);
    assert_eq!(outcome.static_errors[0].line, Some(2));
    assert_eq!(outcome.runtime_error, None);
    assert_eq!(outcome.exit_code(), 65);
    assert_eq!(out.get_output(), "1\n3\n");
}

#[test]
fn runtime_error_outranks_static_errors() {
    let (mut interp, out) = interpreter();
    let outcome = run_source(&mut interp, "print @;\nprint 2;\nprint nope;\nprint 4;");
    assert_eq!(outcome.static_errors.len(), 2);
    assert_eq!(outcome.static_errors[0].code, ErrorCode::E0002);
    let runtime = outcome.runtime_error.as_ref().unwrap();
    assert_eq!(runtime.code, ErrorCode::E6002);
    assert_eq!(runtime.line, Some(3));
    assert_eq!(outcome.exit_code(), 70);
    assert_eq!(out.get_output(), "2\n");
}

#[test]
fn lexical_errors_come_first() {
    let front = front_end("print @;\nprint (;");
    assert!(front.has_errors());
    let codes: Vec<_> = front.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, [ErrorCode::E0002, ErrorCode::E1002, ErrorCode::E1002]);
}

#[test]
fn runtime_error_keeps_prior_output() {
    let (mut interp, out) = interpreter();
    let outcome = run_source(&mut interp, "print \"before\";\nprint 5 / 0;\nprint \"after\";");
    assert!(outcome.static_errors.is_empty());
    let diagnostic = outcome.runtime_error.as_ref().unwrap();
    assert_eq!(diagnostic.code, ErrorCode::E6003);
    assert_eq!(diagnostic.line, Some(2));
    assert_eq!(outcome.exit_code(), 70);
    assert_eq!(out.get_output(), "before\n");
}

#[test]
fn front_end_is_deterministic() {
    let source = "fun f(a) { return a * 2; }\nprint f(4);\nvar = ;";
    let first = front_end(source);
    let second = front_end(source);
    assert_eq!(first.statements, second.statements);
    assert_eq!(first.diagnostics, second.diagnostics);
}
