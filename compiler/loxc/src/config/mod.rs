//! Command-line configuration.
//!
//! Arguments are parsed by hand into a [`RunConfig`]:
//!
//! ```text
//! loxc run <file> [--max-depth=N]
//! loxc repl [--max-depth=N]
//! loxc lex <file>
//! loxc parse <file>
//! ```

use std::path::PathBuf;

use lox_eval::DEFAULT_MAX_CALL_DEPTH;

/// Process exit codes (sysexits.h).
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Bad command line.
    pub const USAGE: i32 = 64;
    /// Lexical or parse errors in the input.
    pub const DATA_ERR: i32 = 65;
    /// Runtime error.
    pub const SOFTWARE: i32 = 70;
    /// The input file could not be read.
    pub const NO_INPUT: i32 = 66;
}

/// Subcommand selected on the command line.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Run,
    Repl,
    Lex,
    Parse,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "run" => Some(Command::Run),
            "repl" => Some(Command::Repl),
            "lex" => Some(Command::Lex),
            "parse" => Some(Command::Parse),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Command::Run => "run",
            Command::Repl => "repl",
            Command::Lex => "lex",
            Command::Parse => "parse",
        }
    }

    /// Whether the command reads a source file.
    pub const fn takes_path(self) -> bool {
        !matches!(self, Command::Repl)
    }
}

/// Invalid command line.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{}' requires a file path", .0.name())]
    MissingPath(Command),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("invalid value for --max-depth: '{0}'")]
    InvalidMaxDepth(String),
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub command: Command,
    /// Source file for `run`, `lex` and `parse`.
    pub path: Option<PathBuf>,
    /// Limit on nested Lox function calls.
    pub max_call_depth: usize,
}

impl RunConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or(ConfigError::MissingCommand)?;
        let name = name.as_ref();
        let command =
            Command::from_name(name).ok_or_else(|| ConfigError::UnknownCommand(name.to_string()))?;

        let mut path = None;
        let mut max_call_depth = DEFAULT_MAX_CALL_DEPTH;

        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix("--max-depth=") {
                max_call_depth = match value.parse::<usize>() {
                    Ok(depth) if depth > 0 => depth,
                    _ => return Err(ConfigError::InvalidMaxDepth(value.to_string())),
                };
            } else if !arg.starts_with('-') && path.is_none() && command.takes_path() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(ConfigError::UnexpectedArgument(arg.to_string()));
            }
        }

        if command.takes_path() && path.is_none() {
            return Err(ConfigError::MissingPath(command));
        }

        Ok(RunConfig {
            command,
            path,
            max_call_depth,
        })
    }
}

/// Usage text printed on a bad command line.
pub const USAGE: &str = "\
Usage: loxc <command> [options]

Commands:
  run <file>     Run a Lox script
  repl           Start an interactive session
  lex <file>     Print the token stream
  parse <file>   Print the syntax tree

Options:
  --max-depth=N  Maximum nested function calls (default: 1024)

Logging:
  LOX_LOG=debug  Enable tracing output on stderr (falls back to RUST_LOG)";
