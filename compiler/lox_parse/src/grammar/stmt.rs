//! Declaration and statement parsing.

use std::rc::Rc;

use lox_ir::{Expr, FunctionDecl, Literal, Stmt, StmtKind, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a declaration: `fun`, `var`, or any statement.
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::Fun => self.parse_function(),
            TokenKind::Var => self.parse_var_declaration(),
            _ => self.parse_statement(),
        })
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::For => self.parse_for(),
            TokenKind::If => self.parse_if(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Return => self.parse_return(),
            TokenKind::While => self.parse_while(),
            TokenKind::LeftBrace => {
                let line = self.advance().line;
                let statements = self.parse_block_body()?;
                Ok(Stmt::block(statements, line))
            }
            _ => self.parse_expression_statement(),
        })
    }

    /// Parse declarations up to and including the closing `}`.
    fn parse_block_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_declaration()?);
        }
        self.expect(TokenKind::RightBrace, "'}' after block")?;

        Ok(statements)
    }

    /// `fun name(params) { body }`
    fn parse_function(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line;
        let name = self.expect_ident("function name")?.clone();
        self.expect(TokenKind::LeftParen, "'(' after function name")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                params.push(self.expect_ident("parameter name")?.clone());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "')' after parameters")?;
        self.expect(TokenKind::LeftBrace, "'{' before function body")?;
        let body = self.parse_block_body()?;

        let decl = FunctionDecl { name, params, body };
        Ok(Stmt::new(StmtKind::Function(Rc::new(decl)), line))
    }

    /// `var name = value;`, `var name value;` or `var name;`
    fn parse_var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line;
        let name = self.expect_ident("variable name")?.clone();

        let initializer = if self.eat(TokenKind::Equal) || !self.check(TokenKind::Semicolon) {
            self.parse_expression()?
        } else {
            Expr::literal(Literal::Nil, name.line)
        };
        self.expect(TokenKind::Semicolon, "';' after variable declaration")?;

        Ok(Stmt::new(StmtKind::Var { name, initializer }, line))
    }

    /// `for (init; cond; step) body`, desugared into a `while` loop:
    ///
    /// ```text
    /// { init; while (cond) { body; step; } }
    /// ```
    ///
    /// Every clause may be empty; a missing condition loops forever.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line;
        self.expect(TokenKind::LeftParen, "'(' after 'for'")?;

        let initializer = match self.current_kind() {
            TokenKind::Semicolon => {
                self.advance();
                None
            }
            TokenKind::Var => Some(self.parse_var_declaration()?),
            _ => Some(self.parse_expression_statement()?),
        };

        let condition = if self.check(TokenKind::Semicolon) {
            Expr::literal(Literal::Bool(true), self.current().line)
        } else {
            self.parse_expression()?
        };
        self.expect(TokenKind::Semicolon, "';' after loop condition")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::RightParen, "')' after for clauses")?;

        let mut body = self.parse_statement()?;

        if let Some(increment) = increment {
            let body_line = body.line;
            body = Stmt::block(vec![body, Stmt::expression(increment)], body_line);
        }

        let mut stmt = Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            line,
        );

        if let Some(initializer) = initializer {
            stmt = Stmt::block(vec![initializer, stmt], line);
        }

        Ok(stmt)
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line;
        self.expect(TokenKind::LeftParen, "'(' after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen, "')' after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            line,
        ))
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line;
        self.expect(TokenKind::LeftParen, "'(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen, "')' after while condition")?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::new(StmtKind::While { condition, body }, line))
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "';' after value")?;

        Ok(Stmt::new(StmtKind::Print(value), line))
    }

    /// `return value;` or `return;` (returns nil).
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line;
        let value = if self.check(TokenKind::Semicolon) {
            Expr::literal(Literal::Nil, line)
        } else {
            self.parse_expression()?
        };
        self.expect(TokenKind::Semicolon, "';' after return value")?;

        Ok(Stmt::new(StmtKind::Return(value), line))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "';' after expression")?;

        Ok(Stmt::expression(expr))
    }
}
