//! Error recovery for the parser.
//!
//! Bitset token sets and panic-mode synchronization.

use lox_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

const _: () = assert!(
    TokenKind::COUNT <= 64,
    "TokenSet uses a u64 bitset; all discriminant indices must be < 64"
);

/// A set of token kinds with O(1) membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1u64 << kind.discriminant_index()) != 0
    }
}

/// Keywords that begin a declaration or statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Skip to the next statement boundary after a syntax error.
///
/// `stmt_start` is the cursor position where the failed statement began.
/// If the error was reported past that point at a token in [`STMT_START`],
/// nothing is skipped: that keyword opens the next statement. Otherwise at
/// least one token is consumed (unless at EOF), stopping right after a `;`
/// or right before a token in [`STMT_START`].
pub(crate) fn synchronize(cursor: &mut Cursor<'_>, stmt_start: usize) {
    let from = cursor.position();
    if cursor.is_at_end() {
        return;
    }
    if from > stmt_start && cursor.check_set(STMT_START) {
        trace!(from, "synchronized at statement keyword");
        return;
    }
    let first = cursor.advance();
    if first.kind != TokenKind::Semicolon {
        while !cursor.is_at_end() && !cursor.check_set(STMT_START) {
            if cursor.advance().kind == TokenKind::Semicolon {
                break;
            }
        }
    }
    trace!(from, to = cursor.position(), "synchronized");
}
