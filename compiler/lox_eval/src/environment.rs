//! Variable store.
//!
//! One flat map per session: no nesting, no shadowing. Redeclaring a name
//! replaces its binding.

use rustc_hash::FxHashMap;

use lox_ir::{Name, StringInterner};

use crate::errors::undefined_variable;
use crate::{EvalResult, Value};

/// Mapping from interned variable names to values.
///
/// Owned by the driver and lent to each [`Interpreter`](crate::Interpreter),
/// so bindings persist across REPL lines.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    /// Read a variable, failing with `UndefinedVariable` when unbound.
    /// `interner` supplies the name for the error message.
    pub fn get(&self, name: Name, interner: &StringInterner) -> EvalResult {
        self.lookup(name)
            .cloned()
            .ok_or_else(|| undefined_variable(interner.lookup(name)))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
