//! Command handlers for the `loxc` CLI.
//!
//! Each submodule implements one command and returns the process exit
//! code. Shared helpers (`read_file`, `report_diagnostics`) live here.

use std::io::{self, Write};
use std::path::Path;

use lox_diagnostic::Diagnostic;

use crate::config::{exit_code, Command, RunConfig};

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, render_ast, render_tokens};
pub use repl::{repl_session, run_repl};
pub use run::run_file;

/// Run the command selected by `config`, returning the exit code.
pub fn dispatch(config: &RunConfig) -> i32 {
    tracing::debug!(command = config.command.name(), path = ?config.path, "dispatch");
    match (config.command, config.path.as_deref()) {
        (Command::Repl, _) => run_repl(config),
        (Command::Run, Some(path)) => run_file(path, config),
        (Command::Lex, Some(path)) => lex_file(path),
        (Command::Parse, Some(path)) => parse_file(path),
        (command, None) => {
            eprintln!("error: '{}' requires a file path", command.name());
            exit_code::USAGE
        }
    }
}

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &Path) -> Result<String, i32> {
    std::fs::read_to_string(path).map_err(|e| {
        let shown = path.display();
        let msg = match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{shown}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{shown}'"),
            io::ErrorKind::InvalidData => format!("'{shown}' contains invalid UTF-8 data"),
            _ => format!("error reading '{shown}': {e}"),
        };
        eprintln!("error: {msg}");
        exit_code::NO_INPUT
    })
}

/// Write each diagnostic on its own line.
pub fn write_diagnostics(out: &mut impl Write, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    Ok(())
}

/// Report diagnostics on stderr.
pub(crate) fn report_diagnostics(diagnostics: &[Diagnostic]) {
    let mut stderr = io::stderr().lock();
    // Nothing useful to do if stderr itself is gone.
    let _ = write_diagnostics(&mut stderr, diagnostics);
}
