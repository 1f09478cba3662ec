//! Lexer error types.
//!
//! Lexical errors never stop the scan: the offending input is skipped and
//! an error is recorded alongside the tokens.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;

/// A lexer error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// 1-based line the offending input starts on.
    pub line: u32,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"`; the literal ran to end of input.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("Unexpected char: {found}")]
    UnexpectedChar { found: char },
    /// The source cannot be addressed by 32-bit spans.
    #[error("Source is too large: {len} bytes (limit is {max})", max = crate::MAX_SOURCE_LEN)]
    SourceTooLarge { len: usize },
}

impl LexError {
    #[cold]
    pub fn unterminated_string(span: Span, line: u32) -> Self {
        LexError {
            span,
            line,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn unexpected_char(found: char, span: Span, line: u32) -> Self {
        LexError {
            span,
            line,
            kind: LexErrorKind::UnexpectedChar { found },
        }
    }

    #[cold]
    pub fn source_too_large(len: usize) -> Self {
        LexError {
            span: Span::DUMMY,
            line: 1,
            kind: LexErrorKind::SourceTooLarge { len },
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedChar { .. } => ErrorCode::E0002,
            LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0003,
        }
    }

    /// Convert into a line-tagged diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_line(self.line)
            .with_span(self.span)
    }
}
