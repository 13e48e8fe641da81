//! Expression and statement trees.
//!
//! Both trees are closed enums matched exhaustively by the interpreter and
//! the printer. Each node records the source line of its leading or operator
//! token for runtime error reporting.

mod operators;

pub use operators::{BinaryOp, LogicalOp, UnaryOp};

use std::rc::Rc;

use crate::{Literal, Token};

/// An expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    /// Line of the token that determines the node (operator, name or literal).
    pub line: u32,
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// `123`, `"text"`, `true`, `nil`
    Literal(Literal),
    /// A variable read.
    Variable(Token),
    /// `name = value`
    Assign { name: Token, value: Box<Expr> },
    /// Strict binary operation.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// Short-circuiting `and`/`or`.
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    /// `!x`, `-x`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Parenthesized expression.
    ///
    /// The parser unwraps parentheses, so this only appears in trees built
    /// by hand (printer and interpreter both accept it).
    Grouping(Box<Expr>),
    /// `callee(arguments...)`, also used for `target.name` access.
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }

    pub fn literal(value: Literal, line: u32) -> Self {
        Expr::new(ExprKind::Literal(value), line)
    }

    pub fn variable(name: Token) -> Self {
        let line = name.line;
        Expr::new(ExprKind::Variable(name), line)
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr, line: u32) -> Self {
        Expr::new(
            ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            line,
        )
    }

    pub fn logical(left: Expr, op: LogicalOp, right: Expr, line: u32) -> Self {
        Expr::new(
            ExprKind::Logical {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            line,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, line: u32) -> Self {
        Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            line,
        )
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        let line = name.line;
        Expr::new(
            ExprKind::Assign {
                name,
                value: Box::new(value),
            },
            line,
        )
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>, line: u32) -> Self {
        Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                arguments,
            },
            line,
        )
    }
}

/// A statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    /// Line of the statement's first token.
    pub line: u32,
}

/// Statement variants.
///
/// There is no `for` variant: the parser desugars `for` into `Var` + `While`.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `expr;`
    Expression(Expr),
    /// `print expr;`
    Print(Expr),
    /// `var name init;`
    Var { name: Token, initializer: Expr },
    /// `{ ... }`
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While { condition: Expr, body: Box<Stmt> },
    /// `fun name(params) { body }`
    Function(Rc<FunctionDecl>),
    /// `return value;`
    Return(Expr),
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }

    pub fn expression(expr: Expr) -> Self {
        let line = expr.line;
        Stmt::new(StmtKind::Expression(expr), line)
    }

    pub fn block(statements: Vec<Stmt>, line: u32) -> Self {
        Stmt::new(StmtKind::Block(statements), line)
    }
}

/// A function declaration, shared between the tree and every closure
/// created from it.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
