//! AST node types.
//!
//! Expressions and statements are plain `Copy` data. Children are
//! [`ExprId`] handles into the owning [`ExprArena`](crate::ExprArena); the
//! tree shape (no sharing, no cycles) is guaranteed by construction since
//! the parser allocates every child exactly once, before its parent.

use std::fmt;

use crate::{ExprId, Name, Span};

/// Literal value as written in source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Nil,
    Bool(bool),
    /// IEEE-754 bits, so literals stay `Eq + Hash`.
    Number(u64),
    /// String contents without the surrounding quotes.
    String(Name),
}

impl Literal {
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// Infix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Expression node: kind plus the source span it covers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// Parenthesized expression, kept so printing can reproduce the source.
    Grouping(ExprId),
    Variable(Name),
}

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    /// 1-based line of the statement's first token.
    pub line: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `expr;`
    Expression(ExprId),
    /// `print expr;`
    Print(ExprId),
    /// `var name (= init)?;`, `initializer` is `ExprId::INVALID` when absent.
    Var { name: Name, initializer: ExprId },
}

crate::static_assert_size!(ExprId, 4);
