//! Lox intermediate representation.
//!
//! Shared by every phase of the pipeline:
//! - [`Span`] byte ranges into the source text
//! - [`Name`] handles produced by the session-scoped [`StringInterner`]
//! - [`Token`], [`TokenKind`], and [`TokenList`] produced by the lexer
//! - [`ExprArena`] holding the flat, index-addressed AST of one parse
//! - [`ExprPrinter`] rendering expressions back to source form
//!
//! # Memory model
//!
//! AST nodes never point at each other. Children are referenced by
//! [`ExprId`] handles into the arena's backing vectors, so growing the
//! arena never invalidates a handle. The arena is dropped as a whole once
//! the statements it holds have been evaluated.

/// Compile-time size assertion.
///
/// Keeps the hot IR types from silently growing.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod printer;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, Literal, Stmt, StmtKind, UnaryOp};
pub use expr_id::{ExprId, StmtId};
pub use interner::StringInterner;
pub use name::Name;
pub use printer::ExprPrinter;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
