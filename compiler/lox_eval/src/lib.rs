//! Lox Eval - tree-walking interpreter for Lox.
//!
//! # Architecture
//!
//! - `Value`: closed runtime value enum (numbers, strings, booleans, nil, callables)
//! - `Environment`: variable scoping with a stack of `Rc<RefCell<Scope>>` nodes
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Interpreter`: statement execution and expression evaluation
//! - `PrintHandlerImpl`: where `print` output goes
//!
//! ```text
//! let mut interpreter = InterpreterBuilder::new()
//!     .print_handler(buffer_handler())
//!     .build();
//! interpreter.interpret(&parse_result.statements)?;
//! ```

mod environment;
pub mod errors;
pub mod interpreter;
mod natives;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult, ExecResult};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH};
pub use natives::register_natives;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{Callable, FunctionValue, NativeFn, NativeFunction, Value};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
