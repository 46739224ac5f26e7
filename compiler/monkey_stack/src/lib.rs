//! Stack growth for deep recursion.
//!
//! The parser descends once per nesting level and the evaluator once per
//! nested expression or call, so `((((...))))` or a deeply recursive Monkey
//! function can exhaust the native stack. Both wrap their recursive entry
//! points in [`ensure_sufficient_stack`], as do the AST's clone, comparison
//! and rendering. The guard moves execution onto a fresh heap-allocated
//! segment when the remaining stack runs low.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
