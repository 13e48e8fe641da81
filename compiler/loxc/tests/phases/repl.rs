//! Line-at-a-time sessions.

use std::io::Cursor;

use lox_eval::{buffer_handler, InterpreterBuilder};
use loxc::commands::repl_session;
use pretty_assertions::assert_eq;

fn session(input: &str) -> (String, String) {
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let mut prompts = Vec::new();
    let mut errors = Vec::new();
    repl_session(
        &mut interpreter,
        Cursor::new(input),
        &mut prompts,
        &mut errors,
    )
    .unwrap();
    (handler.get_output(), String::from_utf8(errors).unwrap())
}

#[test]
fn state_carries_across_lines() {
    let (output, errors) = session("var a = 1;\nfun add(n) { a = a + n; }\nadd(2);\nprint a;\n");
    assert_eq!(output, "3\n");
    assert_eq!(errors, "");
}

#[test]
fn errors_do_not_end_the_session() {
    let (output, errors) = session("print 1 / 0;\nprint nope;\nvar = 3;\nprint \"still here\";\n");
    assert_eq!(output, "still here\n");
    let lines: Vec<_> = errors.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("E6003"));
    assert!(lines[1].contains("E6002"));
    assert!(lines[2].contains("E1004"));
}

#[test]
fn blank_lines_are_skipped() {
    let (output, errors) = session("\n   \nprint 7;\n");
    assert_eq!(output, "7\n");
    assert_eq!(errors, "");
}
