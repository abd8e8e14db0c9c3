//! The error capability required by outcome diagnostics.
//!
//! [`Describe`] is the minimal contract an error type has to meet: it must be
//! able to render a human-readable description of itself. Fatal diagnostics
//! such as [`Outcome::unwrap`](crate::Outcome::unwrap) embed that description
//! in their panic message.
//!
//! Every type implementing [`Display`] is describable through a blanket
//! implementation, so `&str`, `String`, `std::io::Error` and boxed errors work
//! out of the box.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::Describe;
//!
//! let err = "connection refused";
//! assert_eq!(err.description().to_string(), "connection refused");
//! ```
use core::fmt;

/// Renders a human-readable description of an error value.
///
/// # Implementing for Custom Types
///
/// Types that already implement [`Display`](fmt::Display) are covered by the
/// blanket implementation. Error enums without a `Display` impl can implement
/// the trait directly:
///
/// ```
/// use core::fmt;
/// use outcome_rail::traits::Describe;
///
/// enum StoreError {
///     Missing(u32),
///     Locked,
/// }
///
/// impl Describe for StoreError {
///     fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             StoreError::Missing(id) => write!(f, "record {id} not found"),
///             StoreError::Locked => f.write_str("store is locked"),
///         }
///     }
/// }
///
/// assert_eq!(StoreError::Missing(7).description().to_string(), "record 7 not found");
/// assert_eq!(StoreError::Locked.description().to_string(), "store is locked");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot describe itself as an outcome error",
    label = "this type does not implement `Describe`",
    note = "implement `core::fmt::Display` or `outcome_rail::traits::Describe` for `{Self}`"
)]
pub trait Describe {
    /// Writes the description of `self` into the formatter.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns a [`Display`](fmt::Display) adapter over the description.
    #[inline]
    fn description(&self) -> Description<'_, Self> {
        Description(self)
    }
}

impl<T> Describe for T
where
    T: fmt::Display + ?Sized,
{
    #[inline]
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Borrowing adapter that displays any [`Describe`] value.
///
/// Created by [`Describe::description`].
pub struct Description<'a, E: ?Sized>(&'a E);

impl<E: ?Sized> Clone for Description<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Description<'_, E> {}

impl<E> fmt::Display for Description<'_, E>
where
    E: Describe + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }
}

impl<E> fmt::Debug for Description<'_, E>
where
    E: Describe + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Description").field(&format_args!("{}", self)).finish()
    }
}
