use lox_ir::UnaryOp;
use pretty_assertions::assert_eq;

use crate::{evaluate_unary, EvalErrorKind, Value};

#[test]
fn negate_numbers_and_booleans() {
    assert_eq!(evaluate_unary(&Value::Number(3.0), UnaryOp::Neg).unwrap(), Value::Number(-3.0));
    assert_eq!(evaluate_unary(&Value::Bool(true), UnaryOp::Neg).unwrap(), Value::Number(-1.0));
    assert_eq!(evaluate_unary(&Value::Bool(false), UnaryOp::Neg).unwrap(), Value::Number(-0.0));
}

#[test]
fn negate_nil_and_string_fail() {
    let nil = evaluate_unary(&Value::Nil, UnaryOp::Neg).unwrap_err();
    assert!(matches!(nil.kind, EvalErrorKind::InvalidCast { .. }));
    let string = evaluate_unary(&Value::string("abc"), UnaryOp::Neg).unwrap_err();
    assert_eq!(string.message, "Cannot cast a String: \"abc\" to a number");
}

#[test]
fn not_inverts_truthiness() {
    let cases = [
        (Value::Nil, true),
        (Value::Bool(false), true),
        (Value::Bool(true), false),
        (Value::Number(0.0), true),
        (Value::Number(2.5), false),
        (Value::string(""), true),
        (Value::string("x"), false),
    ];
    for (value, expected) in cases {
        assert_eq!(
            evaluate_unary(&value, UnaryOp::Not).unwrap(),
            Value::Bool(expected),
            "!{value:?}"
        );
    }
}
