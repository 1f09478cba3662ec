//! The `run` command: evaluate a whole file in a fresh session.

use lox_diagnostic::{DiagnosticEmitter, TerminalEmitter};

use super::report;
use crate::{read_file, DriverError, RunOptions, RunOutcome, Session};

/// Run a source file, writing program output to stdout and diagnostics to
/// stderr.
pub fn run_file(path: &str, options: RunOptions) -> i32 {
    let mut session = Session::new(options);
    let mut emitter = TerminalEmitter::stderr();
    match run_file_with(path, &mut session, &mut emitter) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => report(&error),
    }
}

/// Run a source file in `session`.
///
/// Every statement is processed; errors never stop the run early.
#[tracing::instrument(level = "debug", skip(session, emitter))]
pub fn run_file_with(
    path: &str,
    session: &mut Session,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<RunOutcome, DriverError> {
    let source = read_file(path)?;
    Ok(session.run_source(&source, emitter))
}
