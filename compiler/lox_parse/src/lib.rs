//! Recursive-descent parser for Lox.
//!
//! Turns a [`TokenList`] into statements stored in an [`ExprArena`].
//! Expressions use one method per precedence level, each folding its
//! operators left-associatively. A syntax error abandons the whole
//! statement it occurs in; the parser records it, synchronizes to the next
//! statement boundary, and carries on, so one pass reports every
//! independent error.

mod cursor;
mod error;
mod grammar;
mod recovery;

use lox_diagnostic::Diagnostic;
use lox_ir::{ExprArena, StmtId, TokenList};
use tracing::{debug, trace};

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use recovery::{TokenSet, STMT_START};

/// Result of parsing one unit of source.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    /// Every node of the parse.
    pub arena: ExprArena,
    /// Well-formed top-level statements, in source order.
    pub program: Vec<StmtId>,
    /// Syntax errors, in source order. Malformed statements are dropped
    /// from `program`.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors as line-tagged diagnostics.
    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(ParseError::to_diagnostic)
    }
}

/// Parser state: a cursor over the tokens and the arena being filled.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(tokens.len() * 4),
        }
    }

    /// Parse `declaration* EOF`.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut program = Vec::new();
        let mut errors = Vec::new();

        while !self.cursor.is_at_end() {
            let stmt_start = self.cursor.position();
            match self.parse_declaration() {
                Ok(stmt) => program.push(stmt),
                Err(error) => {
                    trace!(line = error.line, kind = %error.kind, "statement dropped");
                    errors.push(error);
                    recovery::synchronize(&mut self.cursor, stmt_start);
                }
            }
        }

        debug!(
            statements = program.len(),
            errors = errors.len(),
            "parsed"
        );
        ParseOutput {
            arena: self.arena,
            program,
            errors,
        }
    }
}

/// Parse a token stream into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
