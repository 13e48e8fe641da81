//! The `repl` command: run lines from stdin against one interpreter.

use std::io::{self, BufRead, Write};

use lox_eval::{Interpreter, InterpreterBuilder};

use super::write_diagnostics;
use crate::config::{exit_code, RunConfig};
use crate::pipeline::{execute, front_end};

const PROMPT: &str = "> ";

/// Start an interactive session on stdin/stdout.
pub fn run_repl(config: &RunConfig) -> i32 {
    let mut interpreter = InterpreterBuilder::new()
        .max_call_depth(config.max_call_depth)
        .build();
    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match repl_session(&mut interpreter, stdin, stdout, stderr) {
        Ok(()) => exit_code::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            exit_code::SOFTWARE
        }
    }
}

/// Read lines from `input` until end of input, running each one.
///
/// Errors are written to `errors` and the session continues; definitions
/// from earlier lines stay visible. Program output goes through the
/// interpreter's print handler.
pub fn repl_session<R, W, E>(
    interpreter: &mut Interpreter,
    input: R,
    mut prompt: W,
    mut errors: E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut lines = input.lines();
    loop {
        write!(prompt, "{PROMPT}")?;
        prompt.flush()?;

        let Some(line) = lines.next() else {
            writeln!(prompt)?;
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let front = front_end(&line);
        write_diagnostics(&mut errors, &front.diagnostics)?;
        let outcome = execute(interpreter, front);
        write_diagnostics(&mut errors, outcome.runtime_error.as_slice())?;
    }
}
