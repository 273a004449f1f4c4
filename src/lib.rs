//! Run a unit of work under a fault barrier and report the outcome as data.
//!
//! A fault raised inside the work (in Rust, a panic) is intercepted at the
//! barrier and translated into a structured [`FaultInfo`] payload returned
//! through an ordinary `Result`, instead of unwinding into the caller.
//! Catch once, report as data.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `fault_barrier::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Protecting a Fallible Block
//!
//! ```
//! use fault_barrier::attempt;
//!
//! let outcome = attempt(|| {
//!     let values: Vec<u8> = Vec::new();
//!     let _ = values[3];
//! });
//!
//! let fault = outcome.unwrap_err();
//! assert!(fault.description().contains("out of bounds"));
//! ```
//!
//! ## Carrying a Value Through the Barrier
//!
//! ```
//! use fault_barrier::{attempt_with, AttemptResultExt};
//!
//! let outcome = attempt_with(|| "4096".parse::<u32>().unwrap())
//!     .ctx("parsing block size");
//!
//! assert_eq!(outcome.unwrap(), 4096);
//! ```
//!
//! ## Nullable Units of Work
//!
//! ```
//! use fault_barrier::{attempt_boxed, FaultCategory};
//!
//! let fault = attempt_boxed(None).unwrap_err();
//! assert_eq!(fault.category(), FaultCategory::MissingWork);
//! ```

/// The fault-bridging invoker
pub mod barrier;
/// Ergonomic macro for running blocks under the barrier
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for payload translation and result context
pub mod traits;
/// FaultInfo payload and result aliases
pub mod types;

// Re-export the common surface at the root,
// but encourage using the prelude for application code.
pub use barrier::{attempt, attempt_boxed, attempt_with};
pub use traits::{AttemptResultExt, IntoFaultInfo};
pub use types::{AttemptResult, FaultCategory, FaultInfo, FaultVec};
