//! Statement execution and expression evaluation.

use lox_diagnostic::Diagnostic;
use lox_ir::{ExprArena, ExprId, ExprKind, Literal, StmtId, StmtKind, StringInterner};
use lox_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::operators::evaluate_binary;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::unary_operators::evaluate_unary;
use crate::{Environment, EvalError, EvalResult, Value};

/// Aggregate result of running a program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterpretOutcome {
    /// One entry per failed statement, in execution order.
    pub errors: Vec<EvalError>,
    /// Statements that ran to completion.
    pub executed: usize,
}

impl InterpretOutcome {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors as runtime diagnostics (no line prefix).
    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(EvalError::to_diagnostic)
    }
}

/// Evaluates the statements of one parse.
///
/// Borrows the arena and interner of that parse and the caller's
/// environment; only `var` declarations write to the environment.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    env: &'a mut Environment,
    print: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        env: &'a mut Environment,
    ) -> Self {
        Interpreter {
            arena,
            interner,
            env,
            print: stdout_handler(),
        }
    }

    #[must_use]
    pub fn with_print_handler(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }

    /// Run every statement in order. A failing statement is recorded and
    /// skipped; later statements still run.
    pub fn interpret(&mut self, program: &[StmtId]) -> InterpretOutcome {
        self.interpret_with(program, |_| {})
    }

    /// Like [`Interpreter::interpret`], calling `on_error` as each statement
    /// fails, before the next one runs.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn interpret_with(
        &mut self,
        program: &[StmtId],
        mut on_error: impl FnMut(&EvalError),
    ) -> InterpretOutcome {
        let mut outcome = InterpretOutcome::default();
        for &stmt in program {
            match self.execute(stmt) {
                Ok(()) => outcome.executed += 1,
                Err(error) => {
                    debug!(
                        line = self.arena.get_stmt(stmt).line,
                        code = %error.code(),
                        "statement failed"
                    );
                    on_error(&error);
                    outcome.errors.push(error);
                }
            }
        }
        outcome
    }

    /// Execute one statement.
    pub fn execute(&mut self, id: StmtId) -> Result<(), EvalError> {
        let stmt = *self.arena.get_stmt(id);
        trace!(line = stmt.line, "execute");
        match stmt.kind {
            StmtKind::Expression(expr) => {
                self.eval_expr(expr)?;
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.print.print_value(&value);
            }
            StmtKind::Var { name, initializer } => {
                let value = if initializer.is_valid() {
                    self.eval_expr(initializer)?
                } else {
                    Value::Nil
                };
                self.env.define(name, value);
            }
        }
        Ok(())
    }

    /// Evaluate an expression. Never modifies the environment.
    pub fn eval_expr(&self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
            .map_err(|e| e.with_span(self.arena.span(id)))
    }

    fn eval_expr_inner(&self, id: ExprId) -> EvalResult {
        match self.arena.kind(id) {
            ExprKind::Literal(lit) => Ok(self.eval_literal(lit)),
            ExprKind::Variable(name) => self.env.get(name, self.interner),
            ExprKind::Grouping(inner) => self.eval_expr(inner),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(&value, op)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, op)
            }
        }
    }

    fn eval_literal(&self, lit: Literal) -> Value {
        match lit {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(bits) => Value::Number(f64::from_bits(bits)),
            Literal::String(name) => Value::string(self.interner.lookup(name)),
        }
    }
}
