//! Lox IR - token and syntax tree types.
//!
//! This crate holds the data shared by every phase of the interpreter:
//! - [`Token`] / [`TokenKind`] / [`Literal`] produced by the scanner
//! - [`Expr`] / [`Stmt`] trees produced by the parser
//! - Operator enums ([`BinaryOp`], [`LogicalOp`], [`UnaryOp`])
//! - [`AstPrinter`] for debug rendering of parsed programs
//!
//! Nodes own their children (`Box`/`Vec`); a tree is never mutated after the
//! parser returns it. Function declarations are the one shared node
//! (`Rc<FunctionDecl>`) because closures keep the body alive after the
//! enclosing statement list is gone.

pub mod ast;
mod printer;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, FunctionDecl, LogicalOp, Stmt, StmtKind, UnaryOp};
pub use printer::AstPrinter;
pub use token::{Literal, Token, TokenKind};
