//! Core traits for outcome handling and composition.
//!
//! - [`Describe`]: the error capability, anything that can render a description
//! - [`WithError`]: abstraction for types that carry a remappable error variant
//! - [`ErrorOps`]: recovery and two-sided mapping
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{ErrorOps, WithError};
//! use outcome_rail::Outcome;
//!
//! let outcome: Outcome<i32, &str> = Outcome::Failure("missing");
//! let upper = outcome.fmap_error(|e| e.to_uppercase());
//! assert_eq!(upper, Outcome::Failure("MISSING".to_string()));
//!
//! let doubled = Outcome::<i32, &str>::Success(21).bimap_outcome(|x| x * 2, |e| e.len());
//! assert_eq!(doubled, Outcome::Success(42));
//! ```

pub mod describe;
pub mod error_ops;
pub mod with_error;

pub use describe::{Describe, Description};
pub use error_ops::ErrorOps;
pub use with_error::WithError;
