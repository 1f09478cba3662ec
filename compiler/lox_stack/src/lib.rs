//! Stack growth for deeply nested input.
//!
//! The parser and the evaluator recurse once per nesting level of an
//! expression. Input such as `((((...))))` or `- - - - 1` with tens of
//! thousands of levels would otherwise overflow the native stack, which is
//! a process abort rather than a reportable error.
//!
//! Wrap each recursive entry point in [`ensure_sufficient_stack`]. On
//! native targets it grows the stack with `stacker` when fewer than
//! [`RED_ZONE`] bytes remain; on `wasm32` it calls through directly.

/// Grow when less than this much stack is left (128KB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
pub const STACK_SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
