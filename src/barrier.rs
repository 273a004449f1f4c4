//! The fault-bridging invoker.
//!
//! Runs a caller-supplied unit of work synchronously on the calling thread
//! inside a protected region. A fault raised while the work runs is
//! intercepted at the boundary and translated into a [`FaultInfo`] payload
//! instead of unwinding into the caller. The barrier never re-raises, never
//! retries, and never rolls back side effects the work performed before it
//! faulted.
//!
//! # Examples
//!
//! ```
//! use fault_barrier::{attempt, attempt_with};
//!
//! assert!(attempt(|| {}).is_ok());
//!
//! let outcome = attempt_with(|| "ready".len());
//! assert_eq!(outcome.unwrap(), 5);
//!
//! let outcome = attempt(|| panic!("disk gone"));
//! assert_eq!(outcome.unwrap_err().description(), "disk gone");
//! ```

use std::panic::{catch_unwind, UnwindSafe};

use crate::traits::IntoFaultInfo;
use crate::types::{AttemptResult, FaultInfo};

/// Runs a zero-argument unit of work under the barrier.
///
/// On success the error slot stays untouched. On a fault, returns a boxed
/// [`FaultInfo`] whose description is derived from the panic payload.
///
/// The work runs on the calling thread and blocks until it returns or
/// faults; there is no cancellation or timeout.
///
/// # Examples
///
/// ```
/// use fault_barrier::attempt;
///
/// let outcome = attempt(|| panic!("not wired up"));
/// assert_eq!(outcome.unwrap_err().description(), "not wired up");
/// ```
#[inline]
pub fn attempt<F>(work: F) -> AttemptResult<()>
where
    F: FnOnce() + UnwindSafe,
{
    attempt_with(work)
}

/// Runs a value-returning unit of work under the barrier.
///
/// Same contract as [`attempt`], generalized to carry the work's return
/// value through the success arm.
///
/// # Examples
///
/// ```
/// use fault_barrier::attempt_with;
///
/// let outcome = attempt_with(|| 21 * 2);
/// assert_eq!(outcome.unwrap(), 42);
/// ```
pub fn attempt_with<T, F>(work: F) -> AttemptResult<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match catch_unwind(work) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let fault = payload.into_fault_info();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                category = %fault.category(),
                description = %fault.description(),
                "intercepted fault at barrier"
            );
            Err(Box::new(fault))
        }
    }
}

/// Runs an optional, boxed unit of work under the barrier.
///
/// This is the dynamic form for callers that hold the work as a nullable
/// value. `None` fails immediately with [`FaultCategory::MissingWork`]
/// without executing anything; `Some` behaves exactly like [`attempt`].
///
/// The typed entry points cannot receive an absent callable, so this is
/// the only place the missing-work precondition can trip. Argument
/// handling before the work runs is infallible; no fault can escape the
/// barrier from its own code.
///
/// [`FaultCategory::MissingWork`]: crate::types::FaultCategory::MissingWork
///
/// # Examples
///
/// ```
/// use fault_barrier::attempt_boxed;
///
/// let outcome = attempt_boxed(None);
/// assert_eq!(
///     outcome.unwrap_err().description(),
///     "no unit of work was supplied"
/// );
///
/// let outcome = attempt_boxed(Some(Box::new(|| {})));
/// assert!(outcome.is_ok());
/// ```
pub fn attempt_boxed(work: Option<Box<dyn FnOnce() + UnwindSafe>>) -> AttemptResult<()> {
    match work {
        Some(work) => attempt(move || work()),
        None => Err(Box::new(FaultInfo::missing_work())),
    }
}
