//! Runtime errors.
//!
//! Every error aborts the statement being evaluated and nothing more.
//! Build errors through the `#[cold]` factory functions so the message is
//! always derived from the kind.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{BinaryOp, Span};

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Structured runtime error category.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    /// Nil or a string used where a number is required.
    #[error("Cannot cast {what} to a number")]
    InvalidCast { what: String },
    /// Nil on either side of a comparison.
    #[error("Unsupported operation {op} for NIL")]
    UnsupportedOperand { op: BinaryOp },
    /// A string combined with a non-string.
    #[error("Unsupported operation {op} for STRING and non STRING type")]
    TypeMismatch { op: BinaryOp },
    /// `-`, `*` or `/` applied to two strings.
    #[error("Unsupported operation {op} for operands STRING STRING")]
    Unsupported { op: BinaryOp },
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },
}

/// Evaluation error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, always `kind.to_string()`.
    pub message: String,
    /// Expression being evaluated when the error was raised.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a span unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::InvalidCast { .. } => ErrorCode::E6001,
            EvalErrorKind::UnsupportedOperand { .. } => ErrorCode::E6002,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::Unsupported { .. } => ErrorCode::E6004,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6005,
        }
    }

    /// Runtime diagnostics carry no line: they render as `Error: message`.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.message.clone());
        match self.span {
            Some(span) => diag.with_span(span),
            None => diag,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// `what` is `NIL` or `a String: "<contents>"`.
#[cold]
pub fn invalid_cast(what: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCast { what: what.into() })
}

#[cold]
pub fn unsupported_operand(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperand { op })
}

#[cold]
pub fn type_mismatch(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { op })
}

#[cold]
pub fn unsupported_string_op(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Unsupported { op })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}
