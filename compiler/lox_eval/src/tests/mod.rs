//! Evaluator tests.
//!
//! - `operators_tests`: binary operator semantics per operand type
//! - `unary_operators_tests`: `-` and `!`
//! - `coerce_tests`: number and truthiness coercion, print form
//! - `interpreter_tests`: statements run from source text

mod operators_tests;
mod unary_operators_tests;
