//! Runtime values.
//!
//! `Value` is a closed enum matched exhaustively by the operators and the
//! interpreter. Strings are `Rc<str>` so copying a value between scopes never
//! copies text.

use std::fmt;
use std::rc::Rc;

use lox_ir::{FunctionDecl, Literal};

use crate::environment::{LocalScope, Scope};
use crate::EvalResult;

/// Signature of a built-in function.
pub type NativeFn = fn(&[Value]) -> EvalResult;

/// A Lox runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Nil,
    Callable(Callable),
}

/// Anything that can appear in callee position.
#[derive(Clone, Debug)]
pub enum Callable {
    /// A user-defined function together with its definition scope.
    Function(Rc<FunctionValue>),
    /// A built-in implemented in Rust.
    Native(Rc<NativeFunction>),
}

/// A closure: the declaration plus the scope that was current when the
/// `fun` statement ran.
pub struct FunctionValue {
    pub decl: Rc<FunctionDecl>,
    pub closure: LocalScope<Scope>,
}

impl FunctionValue {
    #[inline]
    pub fn name(&self) -> &str {
        &self.decl.name.lexeme
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.arity()
    }
}

// The closure scope usually contains the function itself, so printing it
// would never terminate.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

/// A built-in function.
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a closure over `closure`.
    pub fn function(decl: Rc<FunctionDecl>, closure: LocalScope<Scope>) -> Self {
        Value::Callable(Callable::Function(Rc::new(FunctionValue { decl, closure })))
    }

    /// Create a built-in function value.
    pub fn native(name: &'static str, arity: usize, func: NativeFn) -> Self {
        Value::Callable(Callable::Native(Rc::new(NativeFunction { name, arity, func })))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::Callable(Callable::Function(_)) => "function",
            Value::Callable(Callable::Native(_)) => "native function",
        }
    }
}

impl From<&Literal> for Value {
    fn from(lit: &Literal) -> Self {
        match lit {
            Literal::Number(n) => Value::Number(*n),
            Literal::Str(s) => Value::string(s.as_str()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Nil => Value::Nil,
        }
    }
}

/// Values of different types are never equal. Callables compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Callable(Callable::Function(a)), Value::Callable(Callable::Function(b))) => {
                Rc::ptr_eq(a, b)
            }
            (Value::Callable(Callable::Native(a)), Value::Callable(Callable::Native(b))) => {
                Rc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Callable(Callable::Function(func)) => write!(f, "<fn {}>", func.name()),
            Value::Callable(Callable::Native(_)) => f.write_str("<native fn>"),
        }
    }
}
