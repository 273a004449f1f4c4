//! Extension trait for ergonomic context addition to [`AttemptResult`].
//!
//! This module provides [`AttemptResultExt`], which adds convenient methods
//! for attaching context to an intercepted fault without verbose
//! `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use fault_barrier::{attempt, AttemptResultExt};
//!
//! let outcome = attempt(|| panic!("boom")).ctx("flushing cache");
//! assert_eq!(
//!     outcome.unwrap_err().fault_chain(),
//!     "flushing cache -> boom"
//! );
//! ```

use crate::types::AttemptResult;

/// Extension trait for adding context to [`AttemptResult`] ergonomically.
///
/// # Performance
///
/// [`ctx_with`](AttemptResultExt::ctx_with) takes a closure that only runs
/// when the attempt actually failed, so the success path pays nothing for
/// formatted context.
pub trait AttemptResultExt<T> {
    /// Adds a context message to the fault, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_barrier::{attempt, AttemptResultExt};
    ///
    /// let outcome = attempt(|| panic!("boom")).ctx("loading plugin");
    /// assert!(outcome.is_err());
    /// ```
    fn ctx<S: Into<String>>(self, msg: S) -> Self;

    /// Adds a lazily-built context message to the fault, if any.
    ///
    /// The closure is only called on the failure path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_barrier::{attempt, AttemptResultExt};
    ///
    /// let frame = 3;
    /// let outcome = attempt(|| panic!("boom"))
    ///     .ctx_with(|| format!("rendering frame {}", frame));
    /// assert!(outcome.unwrap_err().fault_chain().contains("frame 3"));
    /// ```
    fn ctx_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String;
}

impl<T> AttemptResultExt<T> for AttemptResult<T> {
    #[inline]
    fn ctx<S: Into<String>>(self, msg: S) -> Self {
        self.map_err(|fault| Box::new((*fault).with_context(msg)))
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.map_err(|fault| Box::new((*fault).with_context(f())))
    }
}
