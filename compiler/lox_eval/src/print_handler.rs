//! Output sink for `print` statements.
//!
//! The driver prints to stdout; tests capture into a buffer. Enum dispatch
//! keeps the hot path free of vtable calls.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Value;

/// Writes each line straight to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout (e.g. `lox file | head`) must not abort the run.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

/// Captures lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return everything captured so far and empty the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer (tests, embedding).
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
            Self::Silent => {}
        }
    }

    /// Write a value in its `print` form followed by a newline.
    pub fn print_value(&self, value: &Value) {
        match value {
            Value::Str(s) => self.println(s),
            other => self.println(&other.to_string()),
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drain captured output; empty for handlers that do not capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between the driver and each interpreter.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_captures_value_forms() {
        let handler = buffer_handler();
        handler.print_value(&Value::Number(6.0));
        handler.print_value(&Value::Bool(true));
        handler.print_value(&Value::Nil);
        handler.print_value(&Value::string("raw text"));
        assert_eq!(handler.output(), "6.000000\nTRUE\nNIL\nraw text\n");
    }

    #[test]
    fn take_output_drains() {
        let handler = buffer_handler();
        handler.println("one");
        assert_eq!(handler.take_output(), "one\n");
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn non_capturing_handlers_report_empty() {
        let silent = silent_handler();
        silent.println("ignored");
        assert_eq!(silent.output(), "");
        assert_eq!(stdout_handler().take_output(), "");
    }
}
