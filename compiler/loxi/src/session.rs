//! One interpreter session: a file run or a whole REPL.

use lox_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticEmitter, DiagnosticQueue};
use lox_eval::{stdout_handler, Environment, Interpreter, SharedPrintHandler};
use lox_ir::StringInterner;
use tracing::debug;

use crate::RunOptions;

/// What happened to one unit of input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RunOutcome {
    /// Lexical and syntax errors, including any dropped by the error limit.
    pub compile_errors: usize,
    /// Statements that failed at runtime.
    pub runtime_errors: usize,
    /// Statements that ran to completion.
    pub executed: usize,
    /// Whether evaluation ran at all.
    pub evaluated: bool,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.compile_errors == 0 && self.runtime_errors == 0
    }

    /// Process exit status: compile errors take precedence over runtime
    /// errors.
    pub fn exit_code(&self) -> i32 {
        if self.compile_errors > 0 {
            crate::EXIT_COMPILE_ERROR
        } else if self.runtime_errors > 0 {
            crate::EXIT_RUNTIME_ERROR
        } else {
            0
        }
    }
}

/// State that persists across units of input.
///
/// Each call to [`Session::run_source`] gets its own tokens and arena; the
/// interner and environment carry over, so a REPL line can read variables
/// declared on earlier lines.
pub struct Session {
    interner: StringInterner,
    env: Environment,
    print: SharedPrintHandler,
    options: RunOptions,
}

impl Session {
    pub fn new(options: RunOptions) -> Self {
        Session {
            interner: StringInterner::new(),
            env: Environment::new(),
            print: stdout_handler(),
            options,
        }
    }

    #[must_use]
    pub fn with_print_handler(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Scan, parse and evaluate one unit of input.
    ///
    /// Compile-time diagnostics are reported in line order before anything
    /// runs. Runtime errors are reported as they happen, so they interleave
    /// with program output the way the statements executed.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run_source(
        &mut self,
        source: &str,
        emitter: &mut impl DiagnosticEmitter,
    ) -> RunOutcome {
        let mut queue =
            DiagnosticQueue::with_config(DiagnosticConfig::with_limit(self.options.error_limit));

        let lexed = lox_lexer::lex(source, &mut self.interner);
        let parsed = lox_parse::parse(&lexed.tokens);

        let mut compile: Vec<Diagnostic> =
            lexed.diagnostics().chain(parsed.diagnostics()).collect();
        compile.sort_by_key(|diag| diag.line);

        let mut outcome = RunOutcome {
            compile_errors: compile.len(),
            ..RunOutcome::default()
        };
        queue.extend(compile);
        emitter.emit_all(&queue.flush());

        if outcome.compile_errors > 0 && !self.options.keep_going {
            debug!(errors = outcome.compile_errors, "not evaluating");
            emitter.flush();
            return outcome;
        }

        outcome.evaluated = true;
        let mut interpreter = Interpreter::new(&parsed.arena, &self.interner, &mut self.env)
            .with_print_handler(self.print.clone());
        let interpreted = interpreter.interpret_with(&parsed.program, |error| {
            queue.push(error.to_diagnostic());
            emitter.emit_all(&queue.flush());
        });
        outcome.executed = interpreted.executed;
        outcome.runtime_errors = interpreted.errors.len();
        emitter.flush();

        debug!(
            executed = outcome.executed,
            runtime_errors = outcome.runtime_errors,
            "unit finished"
        );
        outcome
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RunOptions::default())
    }
}
