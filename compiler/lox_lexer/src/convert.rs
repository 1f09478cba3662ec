//! Token Conversion
//!
//! Converts raw logos tokens to final `TokenKind` with string interning.

use lox_ir::{StringInterner, TokenKind};

use crate::raw_token::RawToken;

/// Convert a raw token to a `TokenKind`, interning strings.
///
/// Returns `None` for trivia and for raw tokens the caller reports as
/// errors instead of emitting.
pub(crate) fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &mut StringInterner,
) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment | RawToken::Newline | RawToken::UnterminatedString => return None,

        // Literals
        RawToken::Number(n) => TokenKind::Number(n.to_bits()),
        RawToken::String => {
            let content = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice);
            TokenKind::String(interner.intern(content))
        }
        RawToken::Ident => TokenKind::Identifier(interner.intern(slice)),

        // Keywords
        RawToken::And => TokenKind::And,
        RawToken::Class => TokenKind::Class,
        RawToken::Else => TokenKind::Else,
        RawToken::False => TokenKind::False,
        RawToken::Fun => TokenKind::Fun,
        RawToken::For => TokenKind::For,
        RawToken::If => TokenKind::If,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Return => TokenKind::Return,
        RawToken::Super => TokenKind::Super,
        RawToken::This => TokenKind::This,
        RawToken::True => TokenKind::True,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,

        // Operators and punctuation
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Equal => TokenKind::Equal,
        RawToken::Greater => TokenKind::Greater,
        RawToken::Less => TokenKind::Less,
    };
    Some(kind)
}
