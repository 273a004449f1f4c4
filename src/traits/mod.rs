//! Traits at the barrier's seams: payload translation and result context.

pub mod into_fault_info;
pub mod result_ext;

pub use into_fault_info::IntoFaultInfo;
pub use result_ext::AttemptResultExt;
