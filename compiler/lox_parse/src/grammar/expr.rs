//! Expression parsing.

use lox_ir::{Expr, ExprKind, Literal, LogicalOp, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input such as
    /// `((((...))))` grows the stack instead of overflowing it.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `IDENT = value`, right-associative.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_or()?;

        if !self.check(TokenKind::Equal) {
            return Ok(target);
        }
        let equals = self.advance();
        let value = self.parse_assignment()?;

        match target.kind {
            ExprKind::Variable(name) => Ok(Expr::assign(name, value)),
            _ => Err(ParseError::invalid_assignment_target(equals)),
        }
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        while self.check(TokenKind::Or) {
            let line = self.advance().line;
            let right = self.parse_and()?;
            left = Expr::logical(left, LogicalOp::Or, right, line);
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.check(TokenKind::And) {
            let line = self.advance().line;
            let right = self.parse_equality()?;
            left = Expr::logical(left, LogicalOp::And, right, line);
        }

        Ok(left)
    }

    /// Parse equality operators (==, !=).
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            let line = self.advance().line;
            let right = self.parse_comparison()?;
            left = Expr::binary(left, op, right, line);
        }

        Ok(left)
    }

    /// Parse comparison operators (<, >, <=, >=).
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            let line = self.advance().line;
            let right = self.parse_additive()?;
            left = Expr::binary(left, op, right, line);
        }

        Ok(left)
    }

    /// Parse + and -.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            let line = self.advance().line;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right, line);
        }

        Ok(left)
    }

    /// Parse * and /.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            let line = self.advance().line;
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, right, line);
        }

        Ok(left)
    }

    /// Parse prefix `!` and `-`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let line = self.advance().line;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, operand, line));
        }

        self.parse_call()
    }

    /// Parse a primary followed by any number of `(args)` or `.name` suffixes.
    ///
    /// `target.name` becomes a call of `target` with the string `"name"`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.current_kind() {
                TokenKind::LeftParen => {
                    let line = self.advance().line;
                    let arguments = self.parse_arguments()?;
                    expr = Expr::call(expr, arguments, line);
                }
                TokenKind::Dot => {
                    let line = self.advance().line;
                    let name = self.expect_ident("property name after '.'")?;
                    let key = Expr::literal(Literal::Str(name.lexeme.clone()), name.line);
                    expr = Expr::call(expr, vec![key], line);
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Parse a comma-separated argument list after `(`, including the `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "')' after arguments")?;

        Ok(arguments)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let line = token.line;

        let expr = match token.kind {
            TokenKind::True => Expr::literal(Literal::Bool(true), line),
            TokenKind::False => Expr::literal(Literal::Bool(false), line),
            TokenKind::Nil => Expr::literal(Literal::Nil, line),
            TokenKind::Number | TokenKind::String => match &token.literal {
                Some(value) => Expr::literal(value.clone(), line),
                None => return Err(ParseError::expected_expression(token)),
            },
            TokenKind::Identifier => Expr::variable(token.clone()),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen, "')' after expression")?;
                return Ok(inner);
            }
            _ => return Err(ParseError::expected_expression(token)),
        };

        self.advance();
        Ok(expr)
    }
}
