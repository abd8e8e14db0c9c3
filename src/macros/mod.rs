//! Control-flow macros for functions that return [`Outcome`](crate::Outcome).
//!
//! Stable Rust does not let `?` target a user-defined type, so these macros
//! cover the early-return patterns instead:
//!
//! - [`macro@crate::propagate`] - Unwraps a success or returns the failure from
//!   the enclosing function.
//! - [`macro@crate::guard`] - Returns a failure when a condition does not hold.
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression or block
//!   into an `Outcome`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{guard, outcome, propagate, Outcome};
//!
//! fn parse_even(raw: &str) -> Outcome<i32, String> {
//!     let n = propagate!(outcome!(raw.parse::<i32>()).map_error(|e| e.to_string()));
//!     guard!(n % 2 == 0, format!("{n} is odd"));
//!     Outcome::Success(n)
//! }
//!
//! assert_eq!(parse_even("4"), Outcome::Success(4));
//! assert_eq!(parse_even("5"), Outcome::Failure("5 is odd".to_string()));
//! assert!(parse_even("x").is_failure());
//! ```

/// Unwraps a successful [`Outcome`](crate::Outcome) or returns its failure
/// from the enclosing function.
///
/// The error is passed through [`From::from`], so a function returning
/// `Outcome<_, AppError>` can propagate any error type `AppError` converts from.
///
/// # Examples
///
/// ```
/// use outcome_rail::{propagate, Outcome};
///
/// fn first_char(s: Outcome<&str, &'static str>) -> Outcome<char, String> {
///     let s = propagate!(s);
///     match s.chars().next() {
///         Some(c) => Outcome::Success(c),
///         None => Outcome::Failure("empty input".to_string()),
///     }
/// }
///
/// assert_eq!(first_char(Outcome::Success("abc")), Outcome::Success('a'));
/// assert_eq!(first_char(Outcome::Failure("io")), Outcome::Failure("io".to_string()));
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            },
        }
    };
}

/// Returns `Outcome::Failure(error)` from the enclosing function unless
/// `cond` holds.
///
/// `error` is only evaluated when the condition is false.
///
/// # Examples
///
/// ```
/// use outcome_rail::{guard, Outcome};
///
/// fn withdraw(balance: u32, amount: u32) -> Outcome<u32, &'static str> {
///     guard!(amount <= balance, "insufficient funds");
///     Outcome::Success(balance - amount)
/// }
///
/// assert_eq!(withdraw(10, 3), Outcome::Success(7));
/// assert_eq!(withdraw(1, 3), Outcome::Failure("insufficient funds"));
/// ```
#[macro_export]
macro_rules! guard {
    ($cond:expr, $error:expr $(,)?) => {
        if !$cond {
            return $crate::Outcome::Failure(::core::convert::From::from($error));
        }
    };
}

/// Wraps a `Result`-producing expression or block into an
/// [`Outcome`](crate::Outcome).
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use outcome_rail::{outcome, Outcome};
///
/// let parsed = outcome!("7".parse::<u8>());
/// assert_eq!(parsed.map_error(|e| e.to_string()), Outcome::Success(7));
///
/// let read = outcome!({
///     let path = "definitely/missing/file.txt";
///     std::fs::read_to_string(path)
/// });
/// assert!(read.is_failure());
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}
