//! Binary operator evaluation.
//!
//! Dispatch is by operator first, then by operand types:
//!
//! - `==`/`!=` never fail. Nil equals only nil, strings equal only strings
//!   with the same contents, and otherwise the right operand is coerced to
//!   the left operand's type. A right operand that cannot become a number
//!   makes the operands unequal.
//! - `+` concatenates two strings; otherwise both sides must coerce to
//!   numbers.
//! - `-`, `*`, `/` are numeric only. Division follows IEEE-754.
//! - `<`, `>` compare two strings by bytes or two non-nil values as
//!   numbers. `<=` is `!(a > b)` and `>=` is `!(a < b)`.

use std::cmp::Ordering;
use std::sync::Arc;

use lox_ir::BinaryOp;

use crate::coerce::{to_bool, to_number};
use crate::errors::{type_mismatch, unsupported_operand, unsupported_string_op};
use crate::{EvalResult, Value};

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(values_equal(left, right))),
        BinaryOp::NotEq => Ok(Value::Bool(!values_equal(left, right))),
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => eval_arithmetic(left, right, op, |a, b| a - b),
        BinaryOp::Mul => eval_arithmetic(left, right, op, |a, b| a * b),
        BinaryOp::Div => eval_arithmetic(left, right, op, |a, b| a / b),
        BinaryOp::Lt => eval_comparison(left, right, op, |less, _| less),
        BinaryOp::Gt => eval_comparison(left, right, op, |_, greater| greater),
        BinaryOp::LtEq => eval_comparison(left, right, op, |_, greater| !greater),
        BinaryOp::GtEq => eval_comparison(left, right, op, |less, _| !less),
    }
}

/// Type-aware equality behind `==` and `!=`.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Nil, Value::Nil) => true,
        (Value::Nil, _) | (_, Value::Nil) => false,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Str(_), _) | (_, Value::Str(_)) => false,
        (Value::Bool(a), other) => *a == to_bool(other),
        (Value::Number(a), other) => to_number(other).is_ok_and(|b| *a == b),
    }
}

fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Arc::from(joined)))
        }
        (Value::Str(_), _) | (_, Value::Str(_)) => Err(type_mismatch(BinaryOp::Add)),
        _ => Ok(Value::Number(to_number(left)? + to_number(right)?)),
    }
}

/// `-`, `*` and `/`: `apply` runs on the coerced operands.
fn eval_arithmetic(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    apply: fn(f64, f64) -> f64,
) -> EvalResult {
    match (left, right) {
        (Value::Str(_), Value::Str(_)) => return Err(unsupported_string_op(op)),
        (Value::Str(_), _) | (_, Value::Str(_)) => return Err(type_mismatch(op)),
        _ => {}
    }
    Ok(Value::Number(apply(to_number(left)?, to_number(right)?)))
}

/// Ordering operators: `select` maps `(left < right, left > right)` to the
/// result.
fn eval_comparison(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    select: fn(bool, bool) -> bool,
) -> EvalResult {
    let (less, greater) = match (left, right) {
        (Value::Nil, _) | (_, Value::Nil) => return Err(unsupported_operand(op)),
        (Value::Str(a), Value::Str(b)) => {
            let ord = a.as_bytes().cmp(b.as_bytes());
            (ord == Ordering::Less, ord == Ordering::Greater)
        }
        (Value::Str(_), _) | (_, Value::Str(_)) => return Err(type_mismatch(op)),
        _ => {
            let a = to_number(left)?;
            let b = to_number(right)?;
            (a < b, a > b)
        }
    };
    Ok(Value::Bool(select(less, greater)))
}
