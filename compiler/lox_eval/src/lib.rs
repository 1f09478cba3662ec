//! Tree-walking evaluator for Lox.
//!
//! Evaluates the statements of one parse against an [`Environment`] that
//! the caller owns and keeps across calls (one per REPL session or file
//! run). A runtime error aborts only the statement it occurs in; the rest
//! of the program still runs and every error is returned in the
//! [`InterpretOutcome`].

mod coerce;
mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use coerce::{to_bool, to_number};
pub use environment::Environment;
pub use errors::{
    invalid_cast, type_mismatch, undefined_variable, unsupported_operand, unsupported_string_op,
    EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{InterpretOutcome, Interpreter};
pub use operators::{evaluate_binary, values_equal};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
