//! Stack safety for deep recursion.
//!
//! Both the recursive-descent parser and the tree-walking interpreter recurse
//! once per nesting level of the source program. A script with a few thousand
//! nested parentheses, or a deeply recursive Lox function, would overflow the
//! native stack without help. Wrap each recursive entry point in
//! [`ensure_sufficient_stack`] and the stack grows on demand instead.
//!
//! ```text
//! fn expression(&mut self) -> Result<Expr, ParseError> {
//!     ensure_sufficient_stack(|| self.assignment())
//! }
//! ```
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call (the runtime manages its own stack).

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
