//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all nodes of one parse
//! - Child references are `ExprId` indices, stable across regrowth
//! - Bulk deallocation when the arena is dropped

use crate::ast::{Expr, ExprKind, Stmt};
use crate::{ExprId, Span, StmtId};

/// Contiguous storage for every expression and statement of one parse.
///
/// Nothing is ever freed individually. Growth is amortized O(1) and, since
/// nodes refer to each other by index, never invalidates a handle.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
    /// All statements (indexed by `StmtId`).
    stmts: Vec<Stmt>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 expression per 4 bytes and ~1 statement per 16 bytes.
    pub fn with_capacity(source_len: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(source_len / 4),
            stmts: Vec::with_capacity(source_len / 16),
        }
    }

    // ===== Expressions =====

    /// Allocate an expression, returning its handle.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn kind(&self, id: ExprId) -> ExprKind {
        self.exprs[id.index()].kind
    }

    #[inline]
    #[track_caller]
    pub fn span(&self, id: ExprId) -> Span {
        self.exprs[id.index()].span
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Statements =====

    /// Allocate a statement, returning its handle.
    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(stmt);
        id
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

/// Convert an arena length to a `u32` index.
///
/// # Panics
/// Panics when the arena holds more than `u32::MAX` nodes of one kind,
/// which no source that fits in a `Span` can produce.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    match u32::try_from(len) {
        Ok(n) if n != u32::MAX => n,
        _ => panic!("arena exceeded u32::MAX {what}"),
    }
}
