//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::natives::register_natives;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// ```text
/// let handler = buffer_handler();
/// let mut interpreter = InterpreterBuilder::new()
///     .print_handler(handler.clone())
///     .max_call_depth(256)
///     .build();
/// ```
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where `print` output goes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the maximum number of nested calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Build the interpreter, defining the builtins in its global scope.
    pub fn build(self) -> Interpreter {
        let mut env = Environment::new();
        register_natives(&mut env);
        Interpreter {
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth.unwrap_or(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}
