//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use fault_barrier::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Functions**: [`attempt`], [`attempt_with`], [`attempt_boxed`]
//! - **Macros**: [`attempt!`](crate::attempt!)
//! - **Types**: [`FaultInfo`], [`FaultCategory`], [`AttemptResult`]
//! - **Traits**: [`AttemptResultExt`], [`IntoFaultInfo`]
//!
//! # Examples
//!
//! ```
//! use fault_barrier::prelude::*;
//!
//! fn refresh_index() -> AttemptResult<usize> {
//!     attempt_with(|| "abc".len()).ctx("refreshing search index")
//! }
//!
//! assert_eq!(refresh_index().unwrap(), 3);
//! ```

pub use crate::attempt;

pub use crate::barrier::{attempt_boxed, attempt_with};

pub use crate::traits::{AttemptResultExt, IntoFaultInfo};

pub use crate::types::{AttemptResult, FaultCategory, FaultInfo};
