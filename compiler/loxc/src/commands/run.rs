//! The `run` command: scan, parse and interpret a Lox source file.

use std::path::Path;

use lox_eval::InterpreterBuilder;

use super::{read_file, report_diagnostics};
use crate::config::RunConfig;
use crate::pipeline::{execute, front_end};

/// Run a Lox source file.
///
/// Lexical and parse diagnostics are reported before anything runs; the
/// declarations that parsed then execute, and a runtime error is reported
/// after any output produced before it.
pub fn run_file(path: &Path, config: &RunConfig) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut interpreter = InterpreterBuilder::new()
        .max_call_depth(config.max_call_depth)
        .build();
    let front = front_end(&source);
    report_diagnostics(&front.diagnostics);
    let outcome = execute(&mut interpreter, front);
    report_diagnostics(outcome.runtime_error.as_slice());
    outcome.exit_code()
}
