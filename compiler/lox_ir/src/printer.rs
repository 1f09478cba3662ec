//! Expression printer.
//!
//! Renders AST nodes back to source syntax. Groupings are kept as explicit
//! nodes, so printing a parsed expression and parsing the output again
//! yields the same tree shape. Used by `lox parse` and by round-trip tests.

use std::fmt::Write;

use lox_stack::ensure_sufficient_stack;

use crate::ast::{ExprKind, Literal, StmtKind};
use crate::{ExprArena, ExprId, StmtId, StringInterner};

/// Pretty-printer over one arena.
pub struct ExprPrinter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> ExprPrinter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        ExprPrinter { arena, interner }
    }

    pub fn print_expr(&self, id: ExprId) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id);
        out
    }

    /// Render a statement including its trailing `;`.
    pub fn print_stmt(&self, id: StmtId) -> String {
        let mut out = String::new();
        match self.arena.get_stmt(id).kind {
            StmtKind::Expression(expr) => {
                self.write_expr(&mut out, expr);
            }
            StmtKind::Print(expr) => {
                out.push_str("print ");
                self.write_expr(&mut out, expr);
            }
            StmtKind::Var { name, initializer } => {
                out.push_str("var ");
                out.push_str(self.interner.lookup(name));
                if initializer.is_valid() {
                    out.push_str(" = ");
                    self.write_expr(&mut out, initializer);
                }
            }
        }
        out.push(';');
        out
    }

    fn write_expr(&self, out: &mut String, id: ExprId) {
        ensure_sufficient_stack(|| self.write_expr_inner(out, id));
    }

    fn write_expr_inner(&self, out: &mut String, id: ExprId) {
        match self.arena.kind(id) {
            ExprKind::Literal(lit) => self.write_literal(out, lit),
            ExprKind::Unary { op, operand } => {
                out.push_str(op.as_symbol());
                self.write_expr(out, operand);
            }
            ExprKind::Binary { op, left, right } => {
                self.write_expr(out, left);
                out.push(' ');
                out.push_str(op.as_symbol());
                out.push(' ');
                self.write_expr(out, right);
            }
            ExprKind::Grouping(inner) => {
                out.push('(');
                self.write_expr(out, inner);
                out.push(')');
            }
            ExprKind::Variable(name) => out.push_str(self.interner.lookup(name)),
        }
    }

    fn write_literal(&self, out: &mut String, lit: Literal) {
        match lit {
            Literal::Nil => out.push_str("nil"),
            Literal::Bool(true) => out.push_str("true"),
            Literal::Bool(false) => out.push_str("false"),
            // Writing to a String cannot fail.
            Literal::Number(bits) => {
                let _ = write!(out, "{}", f64::from_bits(bits));
            }
            Literal::String(name) => {
                out.push('"');
                out.push_str(self.interner.lookup(name));
                out.push('"');
            }
        }
    }
}

#[cfg(test)]
mod tests;
