//! Token cursor for navigating the token stream.

use lox_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::recovery::TokenSet;

/// Position in a token stream.
///
/// Never moves past the final EOF token, so `current()` is always defined.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    /// Returned once the stream is exhausted (or was empty).
    eof: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        let slice = tokens.as_slice();
        let eof = match slice.last() {
            Some(last) if last.kind == TokenKind::Eof => *last,
            Some(last) => Token::new(TokenKind::Eof, Span::point(last.span.end), last.line),
            None => Token::new(TokenKind::Eof, Span::DUMMY, 1),
        };
        Cursor {
            tokens: slice,
            eof,
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check the current token's kind, ignoring literal payloads.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind().discriminant_index() == kind.discriminant_index()
    }

    #[inline]
    pub fn check_set(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    /// Consume and return the current token. At EOF, returns EOF without
    /// moving.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        trace!(pos = self.pos, kind = %token.kind, "advance");
        token
    }

    /// Consume a token of `kind`, or build an error from the token found.
    pub fn expect<E>(
        &mut self,
        kind: TokenKind,
        on_missing: impl FnOnce(Token) -> E,
    ) -> Result<Token, E> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(on_missing(self.current()))
        }
    }
}
