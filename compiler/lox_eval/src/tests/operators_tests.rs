use lox_ir::BinaryOp;

use crate::{evaluate_binary, values_equal, EvalErrorKind, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn s(text: &str) -> Value {
    Value::string(text)
}

fn err_kind(left: &Value, right: &Value, op: BinaryOp) -> EvalErrorKind {
    evaluate_binary(left, right, op).unwrap_err().kind
}

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(evaluate_binary(&num(2.0), &num(3.0), BinaryOp::Add).unwrap(), num(5.0));
        assert_eq!(evaluate_binary(&num(2.0), &num(3.0), BinaryOp::Sub).unwrap(), num(-1.0));
        assert_eq!(evaluate_binary(&num(2.0), &num(3.0), BinaryOp::Mul).unwrap(), num(6.0));
        assert_eq!(evaluate_binary(&num(3.0), &num(2.0), BinaryOp::Div).unwrap(), num(1.5));
    }

    #[test]
    fn booleans_coerce_to_numbers() {
        assert_eq!(
            evaluate_binary(&Value::Bool(true), &num(1.0), BinaryOp::Add).unwrap(),
            num(2.0)
        );
        assert_eq!(
            evaluate_binary(&num(4.0), &Value::Bool(false), BinaryOp::Mul).unwrap(),
            num(0.0)
        );
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(
            evaluate_binary(&num(1.0), &num(0.0), BinaryOp::Div).unwrap(),
            num(f64::INFINITY)
        );
        let nan = evaluate_binary(&num(0.0), &num(0.0), BinaryOp::Div).unwrap();
        assert!(matches!(nan, Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(evaluate_binary(&s("a"), &s("b"), BinaryOp::Add).unwrap(), s("ab"));
        assert_eq!(evaluate_binary(&s(""), &s(""), BinaryOp::Add).unwrap(), s(""));
    }

    #[test]
    fn nil_is_invalid_cast() {
        assert_eq!(
            err_kind(&Value::Nil, &num(1.0), BinaryOp::Add),
            EvalErrorKind::InvalidCast {
                what: "NIL".to_string()
            }
        );
        assert!(matches!(
            err_kind(&num(1.0), &Value::Nil, BinaryOp::Div),
            EvalErrorKind::InvalidCast { .. }
        ));
    }

    #[test]
    fn string_with_non_string_is_type_mismatch() {
        assert_eq!(
            err_kind(&s("a"), &num(1.0), BinaryOp::Add),
            EvalErrorKind::TypeMismatch { op: BinaryOp::Add }
        );
        assert_eq!(
            err_kind(&Value::Nil, &s("a"), BinaryOp::Mul),
            EvalErrorKind::TypeMismatch { op: BinaryOp::Mul }
        );
    }

    #[test]
    fn two_strings_unsupported_except_add() {
        for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            assert_eq!(err_kind(&s("a"), &s("b"), op), EvalErrorKind::Unsupported { op });
        }
    }
}

mod comparison {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        let cases = [
            (BinaryOp::Lt, 1.0, 2.0, true),
            (BinaryOp::Lt, 2.0, 2.0, false),
            (BinaryOp::Gt, 3.0, 2.0, true),
            (BinaryOp::LtEq, 2.0, 2.0, true),
            (BinaryOp::LtEq, 3.0, 2.0, false),
            (BinaryOp::GtEq, 2.0, 2.0, true),
            (BinaryOp::GtEq, 1.0, 2.0, false),
        ];
        for (op, a, b, expected) in cases {
            assert_eq!(
                evaluate_binary(&num(a), &num(b), op).unwrap(),
                Value::Bool(expected),
                "{a} {op} {b}"
            );
        }
    }

    #[test]
    fn inclusive_forms_are_negations() {
        let nan = num(f64::NAN);
        // No ordering holds for NaN, so both inclusive forms are true.
        assert_eq!(evaluate_binary(&nan, &num(1.0), BinaryOp::Lt).unwrap(), Value::Bool(false));
        assert_eq!(evaluate_binary(&nan, &num(1.0), BinaryOp::LtEq).unwrap(), Value::Bool(true));
        assert_eq!(evaluate_binary(&nan, &num(1.0), BinaryOp::GtEq).unwrap(), Value::Bool(true));
    }

    #[test]
    fn strings_compare_bytewise() {
        assert_eq!(evaluate_binary(&s("abc"), &s("abd"), BinaryOp::Lt).unwrap(), Value::Bool(true));
        assert_eq!(evaluate_binary(&s("b"), &s("abc"), BinaryOp::Gt).unwrap(), Value::Bool(true));
        assert_eq!(evaluate_binary(&s("Z"), &s("a"), BinaryOp::Lt).unwrap(), Value::Bool(true));
        assert_eq!(evaluate_binary(&s("a"), &s("a"), BinaryOp::GtEq).unwrap(), Value::Bool(true));
    }

    #[test]
    fn booleans_compare_as_numbers() {
        assert_eq!(
            evaluate_binary(&Value::Bool(false), &Value::Bool(true), BinaryOp::Lt).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn nil_is_unsupported_operand() {
        assert_eq!(
            err_kind(&Value::Nil, &num(1.0), BinaryOp::Lt),
            EvalErrorKind::UnsupportedOperand { op: BinaryOp::Lt }
        );
        assert_eq!(
            err_kind(&s("a"), &Value::Nil, BinaryOp::GtEq),
            EvalErrorKind::UnsupportedOperand { op: BinaryOp::GtEq }
        );
    }

    #[test]
    fn mixed_string_is_type_mismatch() {
        assert_eq!(
            err_kind(&s("a"), &num(1.0), BinaryOp::Gt),
            EvalErrorKind::TypeMismatch { op: BinaryOp::Gt }
        );
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nil_equals_only_nil() {
        assert!(values_equal(&Value::Nil, &Value::Nil));
        assert!(!values_equal(&Value::Nil, &Value::Bool(false)));
        assert!(!values_equal(&Value::Bool(false), &Value::Nil));
        assert!(!values_equal(&num(0.0), &Value::Nil));
    }

    #[test]
    fn strings_by_content() {
        assert!(values_equal(&s("abc"), &s("abc")));
        assert!(!values_equal(&s("abc"), &s("abd")));
        assert!(!values_equal(&s("1"), &num(1.0)));
        assert!(!values_equal(&num(1.0), &s("1")));
        assert!(!values_equal(&Value::Bool(true), &s("x")));
    }

    #[test]
    fn right_coerced_to_left_type() {
        assert!(values_equal(&Value::Bool(true), &num(5.0)));
        assert!(values_equal(&Value::Bool(false), &num(0.0)));
        assert!(values_equal(&num(1.0), &Value::Bool(true)));
        assert!(!values_equal(&num(2.0), &Value::Bool(true)));
    }

    #[test]
    fn not_equal_is_negation() {
        let pairs = [
            (Value::Nil, Value::Nil),
            (num(1.0), num(2.0)),
            (s("a"), s("a")),
            (Value::Bool(true), num(0.0)),
        ];
        for (a, b) in pairs {
            let eq = evaluate_binary(&a, &b, BinaryOp::Eq).unwrap();
            let ne = evaluate_binary(&a, &b, BinaryOp::NotEq).unwrap();
            assert_eq!(ne, Value::Bool(eq == Value::Bool(false)));
        }
    }
}

#[test]
fn error_messages() {
    let msg = |l: &Value, r: &Value, op| evaluate_binary(l, r, op).unwrap_err().message;
    assert_eq!(msg(&Value::Nil, &num(1.0), BinaryOp::Add), "Cannot cast NIL to a number");
    assert_eq!(
        msg(&Value::Nil, &num(1.0), BinaryOp::Lt),
        "Unsupported operation < for NIL"
    );
    assert_eq!(
        msg(&s("a"), &num(1.0), BinaryOp::Add),
        "Unsupported operation + for STRING and non STRING type"
    );
    assert_eq!(
        msg(&s("a"), &s("b"), BinaryOp::Mul),
        "Unsupported operation * for operands STRING STRING"
    );
}
