use crate::traits::Describe;
use crate::types::fatal::fatal;

/// The outcome of an operation: either a success value or a failure.
///
/// `Outcome<T, E>` carries exactly one of its two variants for its whole
/// life. Combinators consume the outcome and build a new one, and they only
/// ever invoke the supplied callback on the matching variant: `map` never
/// runs on a `Failure`, `inspect_error` never runs on a `Success`.
///
/// Extraction on the wrong variant ([`unwrap`](Self::unwrap),
/// [`expect`](Self::expect), [`success_value`](Self::success_value),
/// [`failure_value`](Self::failure_value)) is a programming error and panics
/// rather than returning a sentinel.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type; must implement [`Describe`] wherever a diagnostic
///   embeds it
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     match raw.parse::<u16>() {
///         Ok(port) => Outcome::Success(port),
///         Err(e) => Outcome::Failure(format!("invalid port {raw:?}: {e}")),
///     }
/// }
///
/// assert_eq!(parse_port("8080").map(|p| p + 1).unwrap(), 8081);
/// assert!(parse_port("http").is_failure());
/// ```
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// Contains the success value.
    Success(T),
    /// Contains the error value.
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("timed out");
    /// assert_eq!(o, Outcome::Failure("timed out"));
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Failure(error)
    }

    /// Wraps a standard `Result`, `Ok` becoming `Success` and `Err` becoming `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed = Outcome::from_result("42".parse::<i32>());
    /// assert_eq!(parsed, Outcome::Success(42));
    /// assert!(Outcome::from_result("x".parse::<i32>()).is_failure());
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("bad");
    /// assert_eq!(o.into_result(), Err("bad"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    /// Returns `true` if the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::Success(1).is_success());
    /// assert!(!Outcome::<i32, &str>::Failure("x").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::Failure("x").is_failure());
    /// assert!(!Outcome::<i32, &str>::Success(1).is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if the outcome is a success and the value satisfies `f`.
    ///
    /// `f` is not called on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Success(5);
    /// assert!(o.is_success_and(|x| *x > 3));
    /// assert!(!o.is_success_and(|x| *x > 10));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Success(value) => f(value),
            Failure(_) => false,
        }
    }

    /// Returns `true` if the outcome is a failure and the error satisfies `f`.
    ///
    /// `f` is not called on a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("not found");
    /// assert!(o.is_failure_and(|e| e.starts_with("not")));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Success(_) => false,
            Failure(error) => f(error),
        }
    }

    /// Returns a reference to the error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`. There is no error to report, so
    /// the message is fixed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("denied");
    /// assert_eq!(*o.failure_value(), "denied");
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Success(5);
    /// o.failure_value(); // panics
    /// ```
    #[track_caller]
    pub fn failure_value(&self) -> &E {
        match self {
            Success(_) => {
                fatal(format_args!("called `Outcome::failure_value()` on a `Success` value"))
            },
            Failure(error) => error,
        }
    }

    /// Returns the contained error, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with a fixed message if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("disk full");
    /// assert_eq!(o.unwrap_failure(), "disk full");
    /// ```
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Success(_) => {
                fatal(format_args!("called `Outcome::unwrap_failure()` on a `Success` value"))
            },
            Failure(error) => error,
        }
    }

    /// Returns the contained error, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("disk full");
    /// assert_eq!(o.expect_failure("write should have failed"), "disk full");
    /// ```
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E {
        match self {
            Success(_) => fatal(format_args!("{msg}")),
            Failure(error) => error,
        }
    }

    /// Returns the success value, consuming `self`.
    ///
    /// The wrapped error is not part of the diagnostic: only `msg` is reported,
    /// so callers can phrase the failure in their own domain terms.
    ///
    /// # Panics
    ///
    /// Panics with exactly `msg` if the outcome is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<&str, &str>::Success("config.toml");
    /// assert_eq!(o.expect("config path must resolve"), "config.toml");
    /// ```
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Success(value) => value,
            Failure(_) => fatal(format_args!("{msg}")),
        }
    }

    /// Returns the success value or `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<u16, &str>::Success(8080).unwrap_or(80), 8080);
    /// assert_eq!(Outcome::<u16, &str>::Failure("unset").unwrap_or(80), 80);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<usize, &str>::Failure("four");
    /// assert_eq!(o.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<Vec<u8>, &str>::Failure("empty");
    /// assert!(o.unwrap_or_default().is_empty());
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    /// Maps the success value with `f`, leaving a failure untouched.
    ///
    /// `f` is not called on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Success(1).map(|x| x + 1);
    /// assert_eq!(o.unwrap(), 2);
    ///
    /// let f = Outcome::<i32, &str>::Failure("boom").map(|x| x + 1);
    /// assert_eq!(f, Outcome::Failure("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the success value with `f`, or returns `default` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("boom");
    /// assert_eq!(o.map_or(-1, |x| x * 10), -1);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// Maps the success value with `f`, or calls `fallback` on failure.
    ///
    /// `fallback` is only evaluated for a failure and does not see the error;
    /// use [`unwrap_or_else`](Self::unwrap_or_else) after [`map`](Self::map)
    /// when the error is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Success(4);
    /// assert_eq!(o.map_or_else(|| 0, |x| x * x), 16);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => f(value),
            Failure(_) => fallback(),
        }
    }

    /// Maps the error with `f`, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, u16>::Failure(404).map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(o.failure_value(), "HTTP 404");
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Calls `f` with a reference to the success value, then returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o = Outcome::<i32, &str>::Success(3).inspect(|x| seen.push(*x));
    /// assert_eq!(o, Outcome::Success(3));
    /// assert_eq!(seen, [3]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error, then returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o = Outcome::<i32, &str>::Failure("refused").inspect_error(|e| seen.push(e.to_string()));
    /// assert_eq!(o, Outcome::Failure("refused"));
    /// assert_eq!(seen, ["refused"]);
    ///
    /// let _ = Outcome::<i32, &str>::Success(1).inspect_error(|_| unreachable!());
    /// ```
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(ref error) = self {
            f(error);
        }
        self
    }

    /// Chains a computation that may itself fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 { Outcome::Success(x / 2) } else { Outcome::Failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::Success(8).and_then(half).and_then(half), Outcome::Success(2));
    /// assert_eq!(Outcome::Success(6).and_then(half).and_then(half), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Calls `op` with the error, letting it recover or replace the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn fallback(e: &str) -> Outcome<u16, String> {
    ///     if e == "unset" { Outcome::Success(80) } else { Outcome::Failure(format!("bad port: {e}")) }
    /// }
    ///
    /// assert_eq!(Outcome::<u16, &str>::Failure("unset").or_else(fallback), Outcome::Success(80));
    /// assert_eq!(
    ///     Outcome::<u16, &str>::Failure("abc").or_else(fallback),
    ///     Outcome::Failure("bad port: abc".to_string())
    /// );
    /// assert_eq!(Outcome::<u16, &str>::Success(443).or_else(fallback), Outcome::Success(443));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => op(error),
        }
    }

    /// Converts into `Option<T>`, discarding the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(3).into_success(), Some(3));
    /// assert_eq!(Outcome::<i32, &str>::Failure("x").into_success(), None);
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Failure("x").into_failure(), Some("x"));
    /// assert_eq!(Outcome::<i32, &str>::Success(3).into_failure(), None);
    /// ```
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Borrows the payload: `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<String, &str>::Success("name".to_string());
    /// assert_eq!(o.as_ref().map(|s| s.len()), Outcome::Success(4));
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Mutably borrows the payload: `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    ///
    /// This is the only in-place view. The variant itself cannot change through
    /// it; writing through the reference replaces the payload in one assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut o = Outcome::<i32, &str>::Success(1);
    /// if let Outcome::Success(v) = o.as_mut() {
    ///     *v = 2;
    /// }
    /// assert_eq!(o, Outcome::Success(2));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: Describe,
{
    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, embedding the error's description
    /// in the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Success(7);
    /// assert_eq!(*o.success_value(), 7);
    /// ```
    #[track_caller]
    pub fn success_value(&self) -> &T {
        match self {
            Success(value) => value,
            Failure(error) => fatal(format_args!(
                "called `Outcome::success_value()` on a `Failure` value: {}",
                error.description()
            )),
        }
    }

    /// Returns the success value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, embedding the error's description
    /// in the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(2).unwrap(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::Failure("emergency failure").unwrap(); // panics
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Success(value) => value,
            Failure(error) => fatal(format_args!(
                "called `Outcome::unwrap()` on a `Failure` value: {}",
                error.description()
            )),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested = Outcome::<Outcome<i32, &str>, &str>::Success(Outcome::Failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(core::convert::identity)
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Swaps an `Outcome` of an `Option` into an `Option` of an `Outcome`.
    ///
    /// `Success(None)` maps to `None`; everything else maps to `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<Option<i32>, &str>::Success(Some(1)).transpose(), Some(Outcome::Success(1)));
    /// assert_eq!(Outcome::<Option<i32>, &str>::Success(None).transpose(), None);
    /// ```
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Success(Some(value)) => Some(Success(value)),
            Success(None) => None,
            Failure(error) => Some(Failure(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    /// Collects success values, stopping at the first failure.
    ///
    /// Only the first error is kept; the iterator is not polled past it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let all: Outcome<Vec<i32>, &str> =
    ///     [Outcome::Success(1), Outcome::Success(2)].into_iter().collect();
    /// assert_eq!(all, Outcome::Success(vec![1, 2]));
    ///
    /// let first_bad: Outcome<Vec<i32>, &str> =
    ///     [Outcome::Success(1), Outcome::Failure("a"), Outcome::Failure("b")].into_iter().collect();
    /// assert_eq!(first_bad, Outcome::Failure("a"));
    /// ```
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<A, E>>,
    {
        let mut failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Success(value) => Some(value),
                Failure(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Failure(error),
            None => Success(collected),
        }
    }
}
