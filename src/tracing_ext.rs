//! Tracing integration for outcome-rail.
//!
//! This module lets an [`Outcome`] report itself to the `tracing` ecosystem
//! as it flows through a call chain, without changing its value.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! With the feature enabled, every fatal diagnostic (for example
//! [`Outcome::unwrap`] on a failure) is also emitted as a `tracing::error!`
//! event before the panic.

use core::fmt::Debug;

use tracing::Span;

use crate::traits::Describe;
use crate::types::Outcome;

/// Extension trait that records an [`Outcome`] as tracing events.
///
/// Every method returns `self` unchanged, so calls can sit in the middle of a
/// combinator chain.
///
/// # Example
///
/// ```
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
/// use outcome_rail::Outcome;
///
/// let o = Outcome::<u32, &str>::Failure("upstream timed out")
///     .trace_failure("fetch_profile")
///     .map(|v| v + 1);
/// assert!(o.is_failure());
/// ```
pub trait OutcomeTraceExt<T, E>: Sized {
    /// Emits a `WARN` event carrying the error description when `self` is a failure.
    fn trace_failure(self, operation: &str) -> Self;

    /// Emits a `DEBUG` event carrying the value when `self` is a success.
    fn trace_success(self, operation: &str) -> Self
    where
        T: Debug;

    /// Emits the failure event inside `span` rather than the current span.
    fn in_span(self, span: &Span) -> Self;
}

impl<T, E> OutcomeTraceExt<T, E> for Outcome<T, E>
where
    E: Describe,
{
    fn trace_failure(self, operation: &str) -> Self {
        self.inspect_error(|error| {
            tracing::warn!(operation, error = %error.description(), "operation failed");
        })
    }

    fn trace_success(self, operation: &str) -> Self
    where
        T: Debug,
    {
        self.inspect(|value| {
            tracing::debug!(operation, value = ?value, "operation succeeded");
        })
    }

    fn in_span(self, span: &Span) -> Self {
        self.inspect_error(|error| {
            let _entered = span.enter();
            tracing::warn!(
                span = span_name(span),
                error = %error.description(),
                "operation failed"
            );
        })
    }
}

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
