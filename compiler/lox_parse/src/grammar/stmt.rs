//! Declarations and statements.
//!
//! ```text
//! declaration -> "var" IDENT ("=" expression)? ";" | statement
//! statement   -> "print" expression ";" | expression ";"
//! ```

use lox_ir::{ExprId, Stmt, StmtId, StmtKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_declaration(&mut self) -> Result<StmtId, ParseError> {
        if self.cursor.check(TokenKind::Var) {
            self.parse_var_declaration()
        } else {
            self.parse_statement()
        }
    }

    fn parse_var_declaration(&mut self) -> Result<StmtId, ParseError> {
        let var = self.cursor.advance();

        let name_token = self.cursor.current();
        let TokenKind::Identifier(name) = name_token.kind else {
            return Err(ParseError::expected_variable_name(name_token));
        };
        self.cursor.advance();

        let initializer = if self.cursor.check(TokenKind::Equal) {
            self.cursor.advance();
            self.parse_expr()?
        } else {
            ExprId::INVALID
        };

        let semi = self
            .cursor
            .expect(TokenKind::Semicolon, ParseError::expected_var_semicolon)?;

        Ok(self.arena.alloc_stmt(Stmt {
            kind: StmtKind::Var { name, initializer },
            span: var.span.merge(semi.span),
            line: var.line,
        }))
    }

    fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        let first = self.cursor.current();
        let is_print = self.cursor.check(TokenKind::Print);
        if is_print {
            self.cursor.advance();
        }

        let expr = self.parse_expr()?;
        let semi = self
            .cursor
            .expect(TokenKind::Semicolon, ParseError::expected_semicolon)?;

        let kind = if is_print {
            StmtKind::Print(expr)
        } else {
            StmtKind::Expression(expr)
        };
        Ok(self.arena.alloc_stmt(Stmt {
            kind,
            span: first.span.merge(semi.span),
            line: first.line,
        }))
    }
}
