//! Parse error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, Token, TokenKind};

/// A syntax error at a specific token.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Span of the offending token.
    pub span: Span,
    /// 1-based line of the offending token.
    pub line: u32,
}

/// What the parser expected, and what it found instead.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("Expected expression. Instead, got token of type: {found}")]
    ExpectedExpression { found: TokenKind },
    #[error("Expected closing paren ')'. Instead, got token of type: {found}")]
    ExpectedClosingParen { found: TokenKind },
    #[error("Expected semicolon ';'. Instead, got token of type: {found}")]
    ExpectedSemicolon { found: TokenKind },
    #[error("Expected variable name. Instead, got token of type: {found}")]
    ExpectedVariableName { found: TokenKind },
    #[error("Expected ';' after variable declaration. Instead, got token of type: {found}")]
    ExpectedVarSemicolon { found: TokenKind },
}

impl ParseErrorKind {
    /// The token that was actually present.
    pub fn found(&self) -> TokenKind {
        match *self {
            ParseErrorKind::ExpectedExpression { found }
            | ParseErrorKind::ExpectedClosingParen { found }
            | ParseErrorKind::ExpectedSemicolon { found }
            | ParseErrorKind::ExpectedVariableName { found }
            | ParseErrorKind::ExpectedVarSemicolon { found } => found,
        }
    }
}

impl ParseError {
    fn at(token: Token, kind: ParseErrorKind) -> Self {
        ParseError {
            kind,
            span: token.span,
            line: token.line,
        }
    }

    #[cold]
    pub fn expected_expression(found: Token) -> Self {
        Self::at(found, ParseErrorKind::ExpectedExpression { found: found.kind })
    }

    #[cold]
    pub fn expected_closing_paren(found: Token) -> Self {
        Self::at(found, ParseErrorKind::ExpectedClosingParen { found: found.kind })
    }

    #[cold]
    pub fn expected_semicolon(found: Token) -> Self {
        Self::at(found, ParseErrorKind::ExpectedSemicolon { found: found.kind })
    }

    #[cold]
    pub fn expected_variable_name(found: Token) -> Self {
        Self::at(found, ParseErrorKind::ExpectedVariableName { found: found.kind })
    }

    #[cold]
    pub fn expected_var_semicolon(found: Token) -> Self {
        Self::at(found, ParseErrorKind::ExpectedVarSemicolon { found: found.kind })
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedClosingParen { .. } => ErrorCode::E1002,
            ParseErrorKind::ExpectedSemicolon { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedVariableName { .. } => ErrorCode::E1004,
            ParseErrorKind::ExpectedVarSemicolon { .. } => ErrorCode::E1005,
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
