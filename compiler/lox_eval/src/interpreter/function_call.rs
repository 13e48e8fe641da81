//! Function call evaluation methods for the Interpreter.

use super::Interpreter;
use crate::errors::{not_callable, wrong_arg_count};
use crate::{
    Callable, ControlAction, EvalError, EvalResult, FunctionValue, LocalScope, NativeFunction,
    Scope, Value,
};

impl Interpreter {
    /// Evaluate a call of `func` with already-evaluated arguments.
    ///
    /// Errors raised by the call itself carry `line`; errors from inside the
    /// callee keep the line where they happened.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %func, args = args.len()))]
    pub(super) fn eval_call(&mut self, func: &Value, args: &[Value], line: u32) -> EvalResult {
        match func {
            Value::Callable(Callable::Function(f)) => {
                check_arg_count(f.name(), f.arity(), args.len()).map_err(|e| e.with_line(line))?;
                self.check_recursion_limit()
                    .map_err(|e| e.with_line(line))?;
                let mut call_interpreter = self.create_function_interpreter(f.closure.clone());
                call_interpreter.call_function(f, args)
            }
            Value::Callable(Callable::Native(native)) => {
                check_arg_count(native.name, native.arity, args.len())
                    .map_err(|e| e.with_line(line))?;
                call_native(native, args).map_err(|e| e.with_line(line))
            }
            other => Err(not_callable(other.type_name()).with_line(line)),
        }
    }

    /// Create the interpreter for one call frame.
    ///
    /// It starts at the function's definition scope, shares globals and the
    /// print handler, and sits one level deeper in the call stack.
    pub(crate) fn create_function_interpreter(&self, closure: LocalScope<Scope>) -> Interpreter {
        Interpreter {
            env: self.env.enclosed(closure),
            print_handler: self.print_handler.clone(),
            call_depth: self.call_depth + 1,
            max_call_depth: self.max_call_depth,
        }
    }

    /// Bind parameters in a fresh scope and run the body.
    ///
    /// A `return` is caught here; falling off the end yields `nil`.
    fn call_function(&mut self, f: &FunctionValue, args: &[Value]) -> EvalResult {
        let params = f.decl.params.iter().map(|param| param.lexeme.as_str());
        let bindings = params.zip(args.iter().cloned());
        self.with_bindings(bindings, |scoped| match scoped.exec_all(&f.decl.body) {
            Ok(()) => Ok(Value::Nil),
            Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Error(err)) => Err(err),
        })
    }
}

fn call_native(native: &NativeFunction, args: &[Value]) -> EvalResult {
    (native.func)(args)
}

fn check_arg_count(name: &str, expected: usize, got: usize) -> Result<(), EvalError> {
    if expected == got {
        Ok(())
    } else {
        Err(wrong_arg_count(name, expected, got))
    }
}
