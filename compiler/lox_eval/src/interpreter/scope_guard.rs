//! RAII-style scope guards for Interpreter environment management.
//!
//! [`ScopedInterpreter`] pushes a scope on creation and pops it on drop, so
//! blocks and calls restore the previous scope on every exit path: normal
//! completion, `return`, runtime error, or unwinding.
//!
//! ```text
//! interpreter.with_env_scope(|scoped| scoped.exec_all(statements))
//!
//! interpreter.with_bindings(params.zip(args), |scoped| scoped.exec_all(body))
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Value;

/// RAII guard that ensures environment scope cleanup on drop.
///
/// Access the interpreter through this guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope and return a guard that pops it when dropped.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        tracing::trace!(depth = self.env.depth(), "push scope");
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a new scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` inside a new scope pre-populated with `bindings`.
    pub fn with_bindings<T, F, I, S>(&mut self, bindings: I, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        self.with_env_scope(|scoped| {
            for (name, value) in bindings {
                scoped.env.define(name, value);
            }
            f(scoped)
        })
    }
}

#[cfg(test)]
mod tests;
