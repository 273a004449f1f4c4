//! Trait for converting raw material into a [`FaultInfo`] payload.
//!
//! The barrier's failure path builds its payload through this trait, so
//! callers constructing payloads by hand go through the exact same
//! translation — including the `Box<dyn Any + Send>` form that
//! `std::panic::catch_unwind` hands back.
//!
//! # Implementations
//!
//! - `&'static str` / `String` / `Cow<'static, str>` - message becomes the
//!   description
//! - `Box<dyn Any + Send>` - downcast to `&str`, then `String`; anything
//!   else yields the [`OPAQUE_FAULT`](crate::types::OPAQUE_FAULT) fallback
//!
//! # Examples
//!
//! ```
//! use fault_barrier::traits::IntoFaultInfo;
//!
//! let fault = "stream closed early".into_fault_info();
//! assert_eq!(fault.description(), "stream closed early");
//! ```

use std::any::Any;
use std::borrow::Cow;

use crate::types::{FaultInfo, OPAQUE_FAULT};

/// Converts a value into a [`FaultInfo`] with category `Intercepted`.
pub trait IntoFaultInfo {
    /// Converts `self` into a [`FaultInfo`].
    fn into_fault_info(self) -> FaultInfo;
}

impl IntoFaultInfo for String {
    /// Uses the owned string as the description.
    #[inline]
    fn into_fault_info(self) -> FaultInfo {
        FaultInfo::intercepted(self)
    }
}

impl IntoFaultInfo for &'static str {
    /// Uses the string slice as the description.
    #[inline]
    fn into_fault_info(self) -> FaultInfo {
        FaultInfo::intercepted(self)
    }
}

impl IntoFaultInfo for Cow<'static, str> {
    /// Uses the Cow string as the description.
    #[inline]
    fn into_fault_info(self) -> FaultInfo {
        FaultInfo::intercepted(self)
    }
}

impl IntoFaultInfo for Box<dyn Any + Send> {
    /// Translates a panic payload into a description.
    ///
    /// `panic!("literal")` carries `&'static str` and `panic!("{}", x)`
    /// carries `String`; both are extracted verbatim. Any other payload
    /// type is opaque and falls back to a fixed description.
    fn into_fault_info(self) -> FaultInfo {
        match self.downcast::<&'static str>() {
            Ok(message) => FaultInfo::intercepted(*message),
            Err(payload) => match payload.downcast::<String>() {
                Ok(message) => FaultInfo::intercepted(*message),
                Err(_) => FaultInfo::intercepted(OPAQUE_FAULT),
            },
        }
    }
}
