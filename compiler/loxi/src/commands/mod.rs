//! Command handlers for the `lox` CLI.
//!
//! Each handler returns the process exit status; `main` only dispatches.
//! The `*_source` and `*_with` variants take their inputs and outputs as
//! arguments so tests can drive them without a terminal.

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use explain::{explain, explain_error};
pub use repl::{repl, run_prompt, PROMPT};
pub use run::{run_file, run_file_with};

/// Report a driver error on stderr and turn it into an exit status.
fn report(error: &crate::DriverError) -> i32 {
    eprintln!("error: {error}");
    error.exit_code()
}
