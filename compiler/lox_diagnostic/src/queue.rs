//! Diagnostic queue with an optional error limit.

use crate::{Diagnostic, ErrorCode};

/// Queue configuration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DiagnosticConfig {
    /// Stop collecting errors after this many. 0 means unlimited.
    pub error_limit: usize,
}

impl DiagnosticConfig {
    pub fn unlimited() -> Self {
        DiagnosticConfig { error_limit: 0 }
    }

    pub fn with_limit(error_limit: usize) -> Self {
        DiagnosticConfig { error_limit }
    }
}

/// Collects diagnostics in emission order.
///
/// Once the error limit is reached a single E9002 note is appended and
/// further errors are counted but dropped.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    limit_notice_added: bool,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic. Returns `false` if it was dropped by the limit.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if !diag.is_error() {
            self.diagnostics.push(diag);
            return true;
        }
        self.error_count += 1;
        if self.limit_reached_before_push() {
            if !self.limit_notice_added {
                self.limit_notice_added = true;
                self.diagnostics
                    .push(too_many_errors(self.config.error_limit));
            }
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.push(diag);
        }
    }

    fn limit_reached_before_push(&self) -> bool {
        self.config.error_limit != 0 && self.error_count > self.config.error_limit
    }

    /// Whether the configured limit has been hit.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.error_count >= self.config.error_limit
    }

    /// Total errors pushed, including dropped ones.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Take every queued diagnostic, leaving the counters intact.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

/// Note emitted once the error limit is exceeded.
pub fn too_many_errors(limit: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("aborting after {limit} errors"))
}
