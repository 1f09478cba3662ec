//! Runtime values.

use std::fmt;
use std::sync::Arc;

/// A dynamically typed runtime value.
///
/// Strings are reference counted so values can outlive the arena and
/// interner entries they were built from, and cloning a value never copies
/// text.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Arc<str>),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Upper-case type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "NIL",
            Value::Bool(_) => "BOOL",
            Value::Number(_) => "NUMBER",
            Value::Str(_) => "STRING",
        }
    }
}

/// The form written by `print`: strings raw, numbers with six decimals,
/// booleans and nil in upper case.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("NIL"),
            Value::Bool(true) => f.write_str("TRUE"),
            Value::Bool(false) => f.write_str("FALSE"),
            Value::Number(n) if n.is_nan() => f.write_str("nan"),
            Value::Number(n) => write!(f, "{n:.6}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
