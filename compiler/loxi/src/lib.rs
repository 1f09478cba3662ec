//! Lox interpreter driver.
//!
//! Owns everything that outlives a single scan/parse/evaluate cycle: the
//! string interner, the variable [`Environment`](lox_eval::Environment),
//! the print sink and the run options. A [`Session`] feeds each unit of
//! input (a whole file, or one REPL line) through the pipeline and reports
//! its diagnostics.

pub mod commands;
mod error;
mod options;
mod session;
mod tracing_setup;

pub use error::{read_file, DriverError};
pub use options::RunOptions;
pub use session::{RunOutcome, Session};
pub use tracing_setup::init_tracing;

/// Exit status for bad command line usage.
pub const EXIT_USAGE: i32 = 64;
/// Exit status when a lexical or syntax error was reported.
pub const EXIT_COMPILE_ERROR: i32 = 65;
/// Exit status when a runtime error was reported.
pub const EXIT_RUNTIME_ERROR: i32 = 70;
/// Exit status when the input file could not be read.
pub const EXIT_IO_ERROR: i32 = 74;
