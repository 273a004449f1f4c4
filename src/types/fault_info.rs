//! Structured payload describing an intercepted fault.
//!
//! This module provides [`FaultInfo`], the error value produced when the
//! barrier intercepts a fault. It carries:
//! - A human-readable description derived from the panic payload
//! - A [`FaultCategory`] naming how the failure arose
//! - Caller-attached context entries for incident reports
//! - An optional numeric code

use crate::types::FaultVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Substituted when a fault carries no usable description.
///
/// A payload the barrier cannot read (not `&str` or `String`), or one whose
/// message is blank, still has to produce a non-empty description.
pub const OPAQUE_FAULT: &str = "fault carried no readable description";

/// Description used for the missing-work precondition failure.
pub const MISSING_WORK: &str = "no unit of work was supplied";

/// How a failure reported by the barrier arose.
///
/// Only the two categories the barrier can actually distinguish exist:
/// the unit of work was absent, or it raised a fault while running. The
/// payload does not invent a finer taxonomy; whatever detail the runtime
/// exposes ends up in the description string instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaultCategory {
    /// The caller handed the barrier no work to run (invalid input).
    MissingWork,
    /// The unit of work raised a fault and the barrier intercepted it.
    Intercepted,
}

impl FaultCategory {
    /// Returns the category's display label.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingWork => "missing work",
            Self::Intercepted => "intercepted fault",
        }
    }
}

impl core::fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error payload handed to the caller when an attempt fails.
///
/// A `FaultInfo` only exists on the failure path; success never allocates
/// one. The description is guaranteed non-empty.
///
/// # Examples
///
/// ```
/// use fault_barrier::{FaultCategory, FaultInfo};
///
/// let fault = FaultInfo::intercepted("index out of bounds")
///     .with_context("rendering frame 3")
///     .set_code(11);
///
/// assert_eq!(fault.category(), FaultCategory::Intercepted);
/// assert_eq!(
///     fault.to_string(),
///     "rendering frame 3 -> index out of bounds (code: 11)"
/// );
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultInfo {
    description: String,
    category: FaultCategory,
    context: FaultVec<String>,
    code: Option<u32>,
}

impl FaultInfo {
    /// Creates a payload for a fault intercepted while the work ran.
    ///
    /// A blank description is replaced with [`OPAQUE_FAULT`] so the payload
    /// always carries a readable message.
    #[inline]
    pub fn intercepted<S: Into<String>>(description: S) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            OPAQUE_FAULT.to_string()
        } else {
            description
        };
        Self {
            description,
            category: FaultCategory::Intercepted,
            context: FaultVec::new(),
            code: None,
        }
    }

    /// Creates the payload reported when no unit of work was supplied.
    #[inline]
    pub fn missing_work() -> Self {
        Self {
            description: MISSING_WORK.to_string(),
            category: FaultCategory::MissingWork,
            context: FaultVec::new(),
            code: None,
        }
    }

    /// Appends a context entry. Entries render most-recent first.
    #[inline]
    pub fn with_context<S: Into<String>>(mut self, ctx: S) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Extends the context stack from an iterator.
    #[inline]
    pub fn with_contexts<I>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.context.extend(contexts);
        self
    }

    /// Sets (or overrides) the numeric code.
    #[inline]
    pub fn set_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    /// Returns the human-readable description. Never empty.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the fault category.
    #[inline]
    pub fn category(&self) -> FaultCategory {
        self.category
    }

    /// Returns the optional numeric code.
    #[inline]
    pub fn code(&self) -> Option<u32> {
        self.code
    }

    /// Returns an iterator over context entries in LIFO order.
    #[inline]
    pub fn context_iter(&self) -> core::iter::Rev<core::slice::Iter<'_, String>> {
        self.context.iter().rev()
    }

    /// Formats the payload as a single `->`-separated line.
    ///
    /// Context entries come first (most recent leading), then the
    /// description, then the code if one is set.
    pub fn fault_chain(&self) -> String {
        let mut chain = String::new();

        for (i, ctx) in self.context.iter().rev().enumerate() {
            if i > 0 {
                chain.push_str(" -> ");
            }
            chain.push_str(ctx);
        }

        if !self.context.is_empty() {
            chain.push_str(" -> ");
        }

        chain.push_str(&self.description);

        if let Some(code) = self.code {
            chain.push_str(&format!(" (code: {})", code));
        }

        chain
    }

    /// Formats the payload as a multi-line report, used by `{:#}`.
    fn cascaded(&self) -> String {
        let mut out = String::from("Fault: ");
        out.push_str(&self.description);
        if let Some(code) = self.code {
            out.push_str(&format!(" (code: {})", code));
        }
        out.push_str("\nCategory: ");
        out.push_str(self.category.as_str());
        if !self.context.is_empty() {
            out.push_str("\nContext:\n");
            for ctx in self.context.iter().rev() {
                out.push_str("  - ");
                out.push_str(ctx);
                out.push('\n');
            }
        }
        out
    }
}

impl core::fmt::Display for FaultInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            f.write_str(&self.cascaded())
        } else {
            f.write_str(&self.fault_chain())
        }
    }
}

impl std::error::Error for FaultInfo {}
