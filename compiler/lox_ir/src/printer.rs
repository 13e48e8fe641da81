//! Lisp-style rendering of syntax trees.
//!
//! Used by `loxc parse` and by parser tests to compare trees as text.
//!
//! ```text
//! 2 + 3 * 4        =>  (+ 2 (* 3 4))
//! print add(1, 2); =>  (print (call add 1 2))
//! ```

use std::fmt::Write;

use crate::{Expr, ExprKind, FunctionDecl, Literal, Stmt, StmtKind};

/// Renders expressions and statements as parenthesised prefix forms.
#[derive(Default)]
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter::default()
    }

    /// Render a single expression.
    pub fn print_expr(expr: &Expr) -> String {
        let mut printer = AstPrinter::new();
        printer.expr(expr);
        printer.out
    }

    /// Render a single statement.
    pub fn print_stmt(stmt: &Stmt) -> String {
        let mut printer = AstPrinter::new();
        printer.stmt(stmt);
        printer.out
    }

    /// Render a program, one top-level statement per line.
    pub fn print_program(statements: &[Stmt]) -> String {
        let mut printer = AstPrinter::new();
        for stmt in statements {
            printer.stmt(stmt);
            printer.out.push('\n');
        }
        printer.out
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(lit) => self.literal(lit),
            ExprKind::Variable(name) => self.out.push_str(&name.lexeme),
            ExprKind::Assign { name, value } => {
                let _ = write!(self.out, "(= {} ", name.lexeme);
                self.expr(value);
                self.out.push(')');
            }
            ExprKind::Binary { left, op, right } => {
                self.parenthesize(op.as_symbol(), &[&**left, &**right]);
            }
            ExprKind::Logical { left, op, right } => {
                self.parenthesize(op.as_symbol(), &[&**left, &**right]);
            }
            ExprKind::Unary { op, operand } => self.parenthesize(op.as_symbol(), &[&**operand]),
            ExprKind::Grouping(inner) => self.parenthesize("group", &[&**inner]),
            ExprKind::Call { callee, arguments } => {
                self.out.push_str("(call ");
                self.expr(callee);
                for arg in arguments {
                    self.out.push(' ');
                    self.expr(arg);
                }
                self.out.push(')');
            }
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Str(s) => {
                let _ = write!(self.out, "{s:?}");
            }
            other => {
                let _ = write!(self.out, "{other}");
            }
        }
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) {
        self.out.push('(');
        self.out.push_str(name);
        for expr in exprs {
            self.out.push(' ');
            self.expr(expr);
        }
        self.out.push(')');
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.out.push_str("(; ");
                self.expr(expr);
                self.out.push(')');
            }
            StmtKind::Print(expr) => {
                self.out.push_str("(print ");
                self.expr(expr);
                self.out.push(')');
            }
            StmtKind::Var { name, initializer } => {
                let _ = write!(self.out, "(var {} ", name.lexeme);
                self.expr(initializer);
                self.out.push(')');
            }
            StmtKind::Block(statements) => {
                self.out.push_str("(block");
                for inner in statements {
                    self.out.push(' ');
                    self.stmt(inner);
                }
                self.out.push(')');
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("(if ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push(' ');
                    self.stmt(else_branch);
                }
                self.out.push(')');
            }
            StmtKind::While { condition, body } => {
                self.out.push_str("(while ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(body);
                self.out.push(')');
            }
            StmtKind::Function(decl) => self.function(decl),
            StmtKind::Return(value) => {
                self.out.push_str("(return ");
                self.expr(value);
                self.out.push(')');
            }
        }
    }

    fn function(&mut self, decl: &FunctionDecl) {
        let _ = write!(self.out, "(fun {} (", decl.name.lexeme);
        for (i, param) in decl.params.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(&param.lexeme);
        }
        self.out.push(')');
        for stmt in &decl.body {
            self.out.push(' ');
            self.stmt(stmt);
        }
        self.out.push(')');
    }
}
