//! Expression parsing.
//!
//! One method per precedence level, loosest first:
//!
//! ```text
//! expression -> equality
//! equality   -> comparison (("==" | "!=") comparison)*
//! comparison -> term ((">" | ">=" | "<" | "<=") term)*
//! term       -> factor (("+" | "-") factor)*
//! factor     -> unary (("/" | "*") unary)*
//! unary      -> ("!" | "-") unary | primary
//! primary    -> NUMBER | STRING | "true" | "false" | "nil"
//!             | IDENT | "(" expression ")"
//! ```

use lox_ir::{BinaryOp, Expr, ExprId, ExprKind, Literal, TokenKind, UnaryOp};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_equality())
    }

    /// Fold `next (op next)*` into a left-deepening chain.
    fn parse_binary_level(
        &mut self,
        next: fn(&mut Self) -> Result<ExprId, ParseError>,
        match_op: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = match_op(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = next(self)?;
            let span = self.arena.span(left).merge(self.arena.span(right));
            left = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span));
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_comparison, match_equality_op)
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_term, match_comparison_op)
    }

    fn parse_term(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_factor, match_additive_op)
    }

    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_unary, match_multiplicative_op)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = match_unary_op(self.cursor.current_kind()) else {
            return self.parse_primary();
        };
        let op_token = self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = op_token.span.merge(self.arena.span(operand));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::False => ExprKind::Literal(Literal::Bool(false)),
            TokenKind::True => ExprKind::Literal(Literal::Bool(true)),
            TokenKind::Nil => ExprKind::Literal(Literal::Nil),
            TokenKind::Number(bits) => ExprKind::Literal(Literal::Number(bits)),
            TokenKind::String(name) => ExprKind::Literal(Literal::String(name)),
            TokenKind::Identifier(name) => ExprKind::Variable(name),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                let close = self
                    .cursor
                    .expect(TokenKind::RightParen, ParseError::expected_closing_paren)?;
                let span = token.span.merge(close.span);
                return Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Grouping(inner), span)));
            }
            // Not consumed: synchronization starts at the offending token.
            _ => return Err(ParseError::expected_expression(token)),
        };
        self.cursor.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, token.span)))
    }
}

fn match_equality_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::EqualEqual => Some(BinaryOp::Eq),
        TokenKind::BangEqual => Some(BinaryOp::NotEq),
        _ => None,
    }
}

fn match_comparison_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Greater => Some(BinaryOp::Gt),
        TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
        TokenKind::Less => Some(BinaryOp::Lt),
        TokenKind::LessEqual => Some(BinaryOp::LtEq),
        _ => None,
    }
}

fn match_additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn match_multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Star => Some(BinaryOp::Mul),
        _ => None,
    }
}

fn match_unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Bang => Some(UnaryOp::Not),
        TokenKind::Minus => Some(UnaryOp::Neg),
        _ => None,
    }
}
