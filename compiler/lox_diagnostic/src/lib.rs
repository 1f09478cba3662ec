//! Diagnostics for the Lox interpreter.
//!
//! Every phase reports problems as a [`Diagnostic`] carrying an
//! [`ErrorCode`]. Compile-time diagnostics carry the 1-based source line
//! and render as `[line N] Error: message`; runtime diagnostics have no
//! line and render as `Error: message`.
//!
//! [`DiagnosticQueue`] collects diagnostics for one unit of input and
//! [`DiagnosticEmitter`] implementations write them out.

mod diagnostic;
mod emitter;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
