//! Conversion helpers between `Outcome`, `Result` and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edges
//! of existing code: wrap a `Result` coming from a library, or hand an
//! `Outcome` back to code that expects `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome("42".parse::<i32>());
//! assert_eq!(outcome.map(|n| n + 1).into_success(), Some(43));
//!
//! let missing = option_to_outcome(None::<i32>, "no value");
//! assert_eq!(outcome_to_result(missing), Err("no value"));
//! ```

use crate::types::{BoxError, BoxedOutcome, Outcome};

/// Converts a `Result` to an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome(Ok::<i32, &str>(1)), Outcome::Success(1));
/// assert_eq!(result_to_outcome(Err::<i32, &str>("bad")), Outcome::Failure("bad"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` to a `Result`.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` to an `Outcome`, using `error` for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(3), "absent"), Outcome::Success(3));
/// assert_eq!(option_to_outcome(None::<i32>, "absent"), Outcome::Failure("absent"));
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error),
    }
}

/// Collapses a nested outcome. The outer failure wins over the inner one.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten_outcome;
/// use outcome_rail::Outcome;
///
/// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Failure("inner"));
/// assert_eq!(flatten_outcome(nested), Outcome::Failure("inner"));
/// ```
#[inline]
pub fn flatten_outcome<T, E>(outcome: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    outcome.flatten()
}

/// Swaps `Outcome<Option<T>, E>` into `Option<Outcome<T, E>>`.
#[inline]
pub fn transpose_outcome<T, E>(outcome: Outcome<Option<T>, E>) -> Option<Outcome<T, E>> {
    outcome.transpose()
}

/// Builds a [`BoxedOutcome`] failure from any error convertible into [`BoxError`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::boxed_failure;
///
/// let o = boxed_failure::<u8, _>("disk full");
/// assert!(o.is_failure_and(|e| e.to_string() == "disk full"));
/// ```
#[inline]
pub fn boxed_failure<T, E>(error: E) -> BoxedOutcome<T>
where
    E: Into<BoxError>,
{
    Outcome::Failure(error.into())
}

/// Erases the error type of an outcome into [`BoxError`].
#[inline]
pub fn box_outcome_error<T, E>(outcome: Outcome<T, E>) -> BoxedOutcome<T>
where
    E: core::error::Error + Send + Sync + 'static,
{
    outcome.map_error(BoxError::from)
}
