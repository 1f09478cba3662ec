//! Lexer for Lox using logos with string interning.
//!
//! Single left-to-right pass. logos provides maximal munch for the
//! two-character operators and exact keyword matching; this crate adds line
//! tracking, interning of identifiers and string contents, and error
//! recovery. Lexical errors are collected, never fatal, and the output
//! always ends with exactly one EOF token.

mod convert;
mod lex_error;
mod raw_token;

use logos::Logos;
use lox_diagnostic::Diagnostic;
use lox_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::{debug, trace};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};

/// Result of scanning one unit of source.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors as line-tagged diagnostics, in source order.
    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(LexError::to_diagnostic)
    }
}

/// Longest source [`lex`] will scan; spans are 32-bit byte offsets.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Lex source code into a `TokenList`.
///
/// A source longer than [`MAX_SOURCE_LEN`] is not scanned: the output holds
/// a single `SourceTooLarge` error and the EOF token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &mut StringInterner) -> LexOutput {
    let eof_pos = match source_end(source.len()) {
        Ok(pos) => pos,
        Err(error) => {
            debug!(len = source.len(), "source too large");
            let mut tokens = TokenList::new();
            tokens.push(Token::new(TokenKind::Eof, Span::DUMMY, 1));
            return LexOutput {
                tokens,
                errors: vec![error],
            };
        }
    };
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 3 + 1),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);
    let mut line: u32 = 1;

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let span = Span::from_range(range.clone());

        match token_result {
            Ok(RawToken::Newline) => line += 1,
            Ok(RawToken::UnterminatedString) => {
                trace!(line, "unterminated string");
                output.errors.push(LexError::unterminated_string(span, line));
                line += count_newlines(logos.slice());
            }
            Ok(raw) => {
                let slice = logos.slice();
                if let Some(kind) = convert_token(raw, slice, interner) {
                    output.tokens.push(Token::new(kind, span, line));
                }
                // Strings may span lines; the token keeps its opening line.
                line += count_newlines(slice);
            }
            Err(()) => {
                // A continuation byte of a character already reported has no
                // char boundary at its start; skip it silently.
                if let Some(found) = source.get(range.start..).and_then(|s| s.chars().next()) {
                    trace!(line, ?found, "unexpected character");
                    output
                        .errors
                        .push(LexError::unexpected_char(found, span, line));
                }
            }
        }
    }

    output
        .tokens
        .push(Token::new(TokenKind::Eof, Span::point(eof_pos), line));

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

/// Byte offset of the EOF token, or the error for an oversized source.
fn source_end(len: usize) -> Result<u32, LexError> {
    u32::try_from(len).map_err(|_| LexError::source_too_large(len))
}

fn count_newlines(slice: &str) -> u32 {
    let n = slice.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Render tokens one per line as `KIND lexeme [literal]`.
///
/// String tokens also show their contents and number tokens their value in
/// fixed-point form.
pub fn dump_tokens(tokens: &TokenList, source: &str, interner: &StringInterner) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for token in tokens {
        let lexeme = token.lexeme(source);
        // Writing to a String cannot fail.
        let _ = match token.kind {
            TokenKind::String(name) => {
                writeln!(out, "{} {} {}", token.kind, lexeme, interner.lookup(name))
            }
            TokenKind::Number(bits) => {
                writeln!(out, "{} {} {:.6}", token.kind, lexeme, f64::from_bits(bits))
            }
            kind => writeln!(out, "{kind} {lexeme}"),
        };
    }
    out
}
