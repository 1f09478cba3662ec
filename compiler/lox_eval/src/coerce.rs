//! Implicit conversions used by the operators.

use crate::errors::invalid_cast;
use crate::{EvalError, Value};

/// Number coercion: booleans become 0 or 1; nil and strings fail.
pub fn to_number(value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Nil => Err(invalid_cast("NIL")),
        Value::Str(s) => Err(invalid_cast(format!("a String: \"{s}\""))),
    }
}

/// Truthiness: `0`, `nil`, `false` and `""` are false, everything else true.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0,
        Value::Nil => false,
        Value::Str(s) => !s.is_empty(),
    }
}
