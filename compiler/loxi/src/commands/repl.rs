//! The interactive prompt.

use std::io::{self, BufRead, Write};

use lox_diagnostic::{DiagnosticEmitter, TerminalEmitter};
use tracing::debug;

use crate::{RunOptions, Session};

pub const PROMPT: &str = ">> ";

/// Line that ends the session.
const END: &str = "end";

/// Run the REPL on stdin until `end` or end of input.
pub fn run_prompt(options: RunOptions) -> i32 {
    let mut session = Session::new(options);
    let mut emitter = TerminalEmitter::stderr();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match repl(stdin.lock(), &mut stdout, &mut session, &mut emitter) {
        Ok(lines) => {
            debug!(lines, "prompt closed");
            0
        }
        Err(error) => {
            eprintln!("error: {error}");
            crate::EXIT_IO_ERROR
        }
    }
}

/// Read lines from `input`, running each as its own unit in `session`.
///
/// The prompt is written to `prompt_out` before every read. Blank lines
/// are skipped. Returns the number of lines run.
pub fn repl<R: BufRead, W: Write>(
    mut input: R,
    prompt_out: &mut W,
    session: &mut Session,
    emitter: &mut impl DiagnosticEmitter,
) -> io::Result<usize> {
    let mut line = String::new();
    let mut count = 0;
    loop {
        prompt_out.write_all(PROMPT.as_bytes())?;
        prompt_out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\n', '\r']);
        if text == END {
            break;
        }
        if text.trim().is_empty() {
            continue;
        }
        session.run_source(text, emitter);
        count += 1;
    }
    Ok(count)
}
