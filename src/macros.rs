//! Ergonomic macro for running a block of code under the barrier.
//!
//! # Examples
//!
//! ```
//! use fault_barrier::attempt;
//!
//! let outcome = attempt!({
//!     let parsed: i32 = "17".parse().unwrap();
//!     parsed * 2
//! });
//! assert_eq!(outcome.unwrap(), 34);
//! ```

/// Runs an expression or block under the barrier and returns an
/// [`AttemptResult`](crate::types::AttemptResult).
///
/// This is shorthand for [`attempt_with`](crate::barrier::attempt_with)
/// with one difference: the wrapped closure is marked `AssertUnwindSafe`,
/// so the block may freely capture mutable state from the enclosing scope.
/// Callers who want the compiler to check unwind safety should call
/// [`attempt_with`](crate::barrier::attempt_with) directly.
///
/// # Syntax
///
/// - `attempt!(expr)` - runs a single expression
/// - `attempt!({ ... })` - runs a block of statements
///
/// # Examples
///
/// ```
/// use fault_barrier::attempt;
///
/// let outcome = attempt!(21 * 2);
/// assert_eq!(outcome.unwrap(), 42);
///
/// let mut retries = 0;
/// let outcome = attempt!({
///     retries += 1;
///     panic!("still failing");
/// });
/// assert!(outcome.is_err());
/// assert_eq!(retries, 1);
/// ```
#[macro_export]
macro_rules! attempt {
    ($block:block) => {
        $crate::barrier::attempt_with(::std::panic::AssertUnwindSafe(|| $block))
    };
    ($expr:expr $(,)?) => {
        $crate::barrier::attempt_with(::std::panic::AssertUnwindSafe(|| $expr))
    };
}
