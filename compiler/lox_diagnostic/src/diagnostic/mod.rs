use std::fmt;

use crate::ErrorCode;

/// A reportable error with the context needed to print it.
///
/// The scanner tracks lines but not columns, so the location is a line
/// number. `line` is `None` for errors raised outside any source position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// 1-based source line.
    pub line: Option<u32>,
    /// Main error message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            line: None,
            message: String::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the source line.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "[line {line}] ")?;
        }
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}
