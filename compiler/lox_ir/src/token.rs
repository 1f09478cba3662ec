//! Token types produced by the lexer.

use std::fmt;

use crate::{Name, Span};

/// Token kinds.
///
/// Closed set: punctuation, literals, keywords, and the end-of-input marker.
/// Keywords for control flow, functions, and classes are recognized even
/// though the grammar has no productions for them yet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier(Name),
    /// String contents without quotes.
    String(Name),
    /// IEEE-754 bits of the literal value.
    Number(u64),

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Number of distinct kinds; bounds [`TokenKind::discriminant_index`].
    pub const COUNT: usize = 39;

    /// Payload-free index used by bitset token sets.
    pub const fn discriminant_index(self) -> u8 {
        match self {
            TokenKind::LeftParen => 0,
            TokenKind::RightParen => 1,
            TokenKind::LeftBrace => 2,
            TokenKind::RightBrace => 3,
            TokenKind::Comma => 4,
            TokenKind::Dot => 5,
            TokenKind::Minus => 6,
            TokenKind::Plus => 7,
            TokenKind::Semicolon => 8,
            TokenKind::Slash => 9,
            TokenKind::Star => 10,
            TokenKind::Bang => 11,
            TokenKind::BangEqual => 12,
            TokenKind::Equal => 13,
            TokenKind::EqualEqual => 14,
            TokenKind::Greater => 15,
            TokenKind::GreaterEqual => 16,
            TokenKind::Less => 17,
            TokenKind::LessEqual => 18,
            TokenKind::Identifier(_) => 19,
            TokenKind::String(_) => 20,
            TokenKind::Number(_) => 21,
            TokenKind::And => 22,
            TokenKind::Class => 23,
            TokenKind::Else => 24,
            TokenKind::False => 25,
            TokenKind::Fun => 26,
            TokenKind::For => 27,
            TokenKind::If => 28,
            TokenKind::Nil => 29,
            TokenKind::Or => 30,
            TokenKind::Print => 31,
            TokenKind::Return => 32,
            TokenKind::Super => 33,
            TokenKind::This => 34,
            TokenKind::True => 35,
            TokenKind::Var => 36,
            TokenKind::While => 37,
            TokenKind::Eof => 38,
        }
    }

    /// Upper-case name used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::String(_) => "STRING",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Decoded value of a `Number` token.
    pub fn number_value(self) -> Option<f64> {
        match self {
            TokenKind::Number(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: kind, source span, and the 1-based line it starts on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }

    /// Source text of this token.
    ///
    /// Returns the empty string if the span does not fit `source`.
    pub fn lexeme(self, source: &str) -> &str {
        source.get(self.span.range()).unwrap_or("")
    }
}

/// Ordered tokens of one scan. The last token is always [`TokenKind::Eof`]
/// once the lexer has finished.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in order, mostly useful in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
