//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, &'static str> {
//!     guard!(id != 0, "id 0 is reserved");
//!     Outcome::Success("found")
//! }
//!
//! assert!(lookup(0).is_failure_and(|e| e.contains("reserved")));
//! ```

// Macros
pub use crate::{guard, outcome, propagate};

// Core types
pub use crate::types::{BoxError, BoxedOutcome, Outcome};

// Traits
pub use crate::traits::{Describe, ErrorOps, WithError};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTraceExt;
