//! Tree-walking interpreter.
//!
//! `exec` runs statements and `eval` evaluates expressions, both by
//! exhaustive matching on the syntax tree. Statement execution returns
//! [`ControlAction`] so `return` can unwind through nested blocks and loops
//! until the enclosing call catches it.
//!
//! Each function call runs in its own `Interpreter` whose environment starts
//! at the closure's captured scope (see `function_call.rs`).

mod builder;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lox_ir::{Expr, ExprKind, LogicalOp, Stmt, StmtKind};
use lox_stack::ensure_sufficient_stack;

use crate::errors::{recursion_limit_exceeded, undefined_variable};
use crate::{
    evaluate_binary, evaluate_unary, ControlAction, Environment, EvalError, EvalResult,
    ExecResult, SharedPrintHandler, Value,
};

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Tree-walking interpreter for Lox programs.
pub struct Interpreter {
    /// Current environment. Blocks and calls push scopes on it.
    pub(crate) env: Environment,
    /// Destination of `print` output.
    pub(crate) print_handler: SharedPrintHandler,
    /// Number of calls enclosing this interpreter (0 at top level).
    call_depth: usize,
    max_call_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter that prints to stdout with the builtins defined.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Run a program.
    ///
    /// Statements execute in order and the first runtime error stops the
    /// run. Globals persist across calls, so a REPL can feed one line at a
    /// time. A `return` outside any function ends the run quietly.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            match self.exec(stmt) {
                Ok(()) => {}
                Err(ControlAction::Return(_)) => return Ok(()),
                Err(ControlAction::Error(err)) => {
                    tracing::debug!(line = err.line, error = %err, "runtime error");
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// The interpreter's environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The handler `print` writes to.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub(crate) fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            return Err(recursion_limit_exceeded(self.max_call_depth));
        }
        Ok(())
    }

    /// Execute statements in order in the current scope.
    pub(crate) fn exec_all(&mut self, statements: &[Stmt]) -> ExecResult {
        for stmt in statements {
            self.exec(stmt)?;
        }
        Ok(())
    }

    /// Execute a single statement.
    pub fn exec(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_inner(stmt))
    }

    fn exec_inner(&mut self, stmt: &Stmt) -> ExecResult {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.eval(expr)?;
                Ok(())
            }
            StmtKind::Print(expr) => {
                let value = self.eval(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(())
            }
            StmtKind::Var { name, initializer } => {
                let value = self.eval(initializer)?;
                self.env.define(name.lexeme.as_str(), value);
                Ok(())
            }
            StmtKind::Block(statements) => {
                self.with_env_scope(|scoped| scoped.exec_all(statements))
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition)?.is_truthy() {
                    self.exec(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec(else_branch)
                } else {
                    Ok(())
                }
            }
            StmtKind::While { condition, body } => {
                while self.eval(condition)?.is_truthy() {
                    self.exec(body)?;
                }
                Ok(())
            }
            StmtKind::Function(decl) => {
                let closure = self.env.current_scope();
                let function = Value::function(decl.clone(), closure);
                self.env.define(decl.name.lexeme.as_str(), function);
                Ok(())
            }
            StmtKind::Return(expr) => Err(ControlAction::Return(self.eval(expr)?)),
        }
    }

    /// Evaluate an expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(Value::from(lit)),
            ExprKind::Variable(name) => self
                .env
                .lookup(&name.lexeme)
                .ok_or_else(|| undefined_variable(&name.lexeme).with_line(expr.line)),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env
                    .assign(&name.lexeme, value.clone())
                    .map_err(|_| undefined_variable(&name.lexeme).with_line(expr.line))?;
                Ok(value)
            }
            ExprKind::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(left, right, *op).map_err(|err| err.with_line(expr.line))
            }
            ExprKind::Logical { left, op, right } => {
                let left = self.eval(left)?;
                match op {
                    LogicalOp::Or if left.is_nil() => self.eval(right),
                    LogicalOp::Or => Ok(left),
                    LogicalOp::And if left.is_nil() => Ok(Value::Nil),
                    LogicalOp::And => self.eval(right),
                }
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(value, *op).map_err(|err| err.with_line(expr.line))
            }
            ExprKind::Grouping(inner) => self.eval(inner),
            ExprKind::Call { callee, arguments } => {
                let callee = self.eval(callee)?;
                let args = arguments
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.eval_call(&callee, &args, expr.line)
            }
        }
    }
}
