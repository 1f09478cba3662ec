//! Session-scoped string interner.
//!
//! Identifiers and string literal contents are interned while lexing. The
//! interner outlives every per-parse arena, so names bound in the
//! environment stay resolvable across REPL lines.

use rustc_hash::FxHashMap;

use crate::Name;

/// Maps strings to dense [`Name`] handles and back.
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::new(),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    /// Intern `s`, returning the existing handle if it was seen before.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let Ok(raw) = u32::try_from(self.strings.len()) else {
            panic!("string interner exceeded {} entries", u32::MAX);
        };
        let name = Name::from_raw(raw);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        name
    }

    /// Look up a name without interning.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Resolve a handle back to its text.
    ///
    /// Handles from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
