//! The outcome type and its supporting pieces.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{BoxedOutcome, Outcome};
//!
//! fn load(id: u32) -> BoxedOutcome<&'static str> {
//!     if id == 1 {
//!         Outcome::Success("alice")
//!     } else {
//!         Outcome::Failure(format!("user {id} not found").into())
//!     }
//! }
//!
//! assert_eq!(load(1).unwrap(), "alice");
//! assert!(load(2).is_failure_and(|e| e.to_string().contains("not found")));
//! ```
pub mod alloc_type;
pub(crate) mod fatal;
pub mod iter;
pub mod outcome;

#[cfg(feature = "std")]
mod termination;

pub use iter::{IntoIter, Iter, IterMut};
pub use outcome::*;

use alloc_type::Box;

/// Type-erased error shared by every [`BoxedOutcome`].
///
/// Any `core::error::Error + Send + Sync` converts into it with `.into()`,
/// as do `String` and `&str`.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Outcome alias with a single, crate-wide error type.
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type BoxedOutcome<T> = Outcome<T, BoxError>;
