//! Diagnostic emitters.

use std::io::{self, Write};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Plain one-line-per-diagnostic output.
pub struct TerminalEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr() -> Self {
        TerminalEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // A closed error stream is not worth failing the run over.
        let _ = writeln!(self.writer, "{diagnostic}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
