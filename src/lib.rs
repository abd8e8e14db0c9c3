//! A two-state outcome value: either a success of type `T` or a failure of
//! type `E`, with a combinator API that never runs a callback against the
//! wrong variant.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Transforming an outcome
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let o: Outcome<i32, &str> = Outcome::Success(1);
//! assert_eq!(o.map(|x| x + 1).unwrap(), 2);
//!
//! let f: Outcome<i32, &str> = Outcome::Failure("boom");
//! assert_eq!(f.map_or(-1, |x| x * 10), -1);
//! ```
//!
//! ## Callbacks only see the matching variant
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let mut calls = 0;
//! let f: Outcome<i32, &str> = Outcome::Failure("boom");
//! let f = f.inspect(|_| calls += 1).map(|x| x * 2);
//! assert_eq!(calls, 0);
//! assert_eq!(f, Outcome::Failure("boom"));
//! ```
//!
//! ## Wrong-variant extraction is fatal
//!
//! ```should_panic
//! use outcome_rail::Outcome;
//!
//! let o: Outcome<i32, &str> = Outcome::Success(5);
//! o.failure_value(); // panics: called `Outcome::failure_value()` on a `Success` value
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result and Option
pub mod convert;
/// Early-return macros for Outcome-returning functions
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Describe, WithError and ErrorOps
pub mod traits;
/// Outcome and its iterators
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::{BoxError, BoxedOutcome, Outcome};
