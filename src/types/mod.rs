//! Types produced and consumed by the fault barrier.
//!
//! # Examples
//!
//! ```
//! use fault_barrier::{FaultCategory, FaultInfo};
//!
//! let fault = FaultInfo::intercepted("connection reset")
//!     .with_context("syncing peer list")
//!     .set_code(54);
//!
//! println!("{}", fault.fault_chain());
//! // Output: syncing peer list -> connection reset (code: 54)
//! assert_eq!(fault.category(), FaultCategory::Intercepted);
//! ```
use smallvec::SmallVec;

pub mod fault_info;

pub use fault_info::*;

/// SmallVec-backed collection used for accumulating context entries.
///
/// Uses inline storage for up to 1 elements to avoid heap allocations
/// in common cases where only a few contexts are attached.
pub type FaultVec<T> = SmallVec<[T; 1]>;

/// Outcome of running a unit of work under the barrier.
///
/// The failure arm boxes the payload so the return slot stays small on the
/// success path.
///
/// # Type Parameters
///
/// * `T` - The value produced by the unit of work
pub type AttemptResult<T> = Result<T, Box<FaultInfo>>;
