//! The scan → parse → interpret pipeline.
//!
//! Lexical and parse errors cost only the declarations they occur in: every
//! declaration that parsed still runs. A runtime error stops execution and
//! is returned alongside the static diagnostics.

use lox_diagnostic::Diagnostic;
use lox_eval::{EvalError, Interpreter};
use lox_ir::Stmt;

use crate::config::exit_code;

/// Output of the front end for one source text.
#[derive(Debug)]
pub struct FrontEnd {
    pub statements: Vec<Stmt>,
    /// Lexical diagnostics followed by parse diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl FrontEnd {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scan and parse `source`.
pub fn front_end(source: &str) -> FrontEnd {
    let scanned = lox_lexer::scan(source);
    let parsed = lox_parse::parse(&scanned.tokens);

    let diagnostics = scanned
        .errors
        .iter()
        .map(lox_lexer::LexError::to_diagnostic)
        .chain(parsed.errors.iter().map(lox_parse::ParseError::to_diagnostic))
        .collect();

    FrontEnd {
        statements: parsed.statements,
        diagnostics,
    }
}

/// Result of running one source text.
#[derive(Debug, Default, PartialEq)]
pub struct RunOutcome {
    /// Lexical and parse diagnostics; the declarations they belong to were
    /// skipped.
    pub static_errors: Vec<Diagnostic>,
    /// The runtime error that stopped execution.
    pub runtime_error: Option<Diagnostic>,
}

impl RunOutcome {
    /// Process exit code for this outcome. A runtime error outranks
    /// static errors.
    pub fn exit_code(&self) -> i32 {
        if self.runtime_error.is_some() {
            exit_code::SOFTWARE
        } else if !self.static_errors.is_empty() {
            exit_code::DATA_ERR
        } else {
            exit_code::SUCCESS
        }
    }
}

/// Run the statements that survived the front end.
///
/// The front end's diagnostics move into the outcome; callers that want
/// them reported before any program output should do so first.
#[tracing::instrument(level = "debug", skip_all, fields(statements = front.statements.len()))]
pub fn execute(interpreter: &mut Interpreter, front: FrontEnd) -> RunOutcome {
    if front.has_errors() {
        tracing::debug!(
            count = front.diagnostics.len(),
            "static errors, running the remaining declarations"
        );
    }

    let runtime_error = interpreter
        .interpret(&front.statements)
        .err()
        .as_ref()
        .map(EvalError::to_diagnostic);

    RunOutcome {
        static_errors: front.diagnostics,
        runtime_error,
    }
}

/// Run `source` on `interpreter`.
///
/// The interpreter keeps its globals, so calling this repeatedly with the
/// same interpreter continues one session.
pub fn run_source(interpreter: &mut Interpreter, source: &str) -> RunOutcome {
    execute(interpreter, front_end(source))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
