//! Prefix operator evaluation.

use lox_ir::UnaryOp;

use crate::coerce::{to_bool, to_number};
use crate::{EvalResult, Value};

/// `-` negates the operand's number coercion; `!` inverts its truthiness.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match op {
        UnaryOp::Neg => Ok(Value::Number(-to_number(value)?)),
        UnaryOp::Not => Ok(Value::Bool(!to_bool(value))),
    }
}
