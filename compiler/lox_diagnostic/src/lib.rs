//! Diagnostic system shared by every phase of the interpreter.
//!
//! Each phase keeps its own structured error type (`LexError`, `ParseError`,
//! `EvalError`) and converts it into a [`Diagnostic`] at the reporting
//! boundary. A diagnostic carries:
//! - an [`ErrorCode`] for searchability
//! - the source line where it went wrong
//! - a one-line message

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
