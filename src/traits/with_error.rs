use crate::types::Outcome;

/// Abstraction over types that carry an error variant which can be remapped.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::Outcome;
///
/// let outcome: Outcome<i32, &str> = Outcome::Failure("original error");
/// let mapped = outcome.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped, Outcome::Failure("Error: original error".to_string()));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// This operation leaves the success case untouched and only transforms the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::WithError;
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, u32> = Outcome::Failure(404);
    /// let mapped = outcome.fmap_error(|code| format!("HTTP {}", code));
    /// assert_eq!(mapped, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::WithError;
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Success(42);
    /// assert_eq!(outcome.to_result(), Ok(42));
    /// ```
    fn to_result(self) -> Result<Self::Success, E>;
}

/// The success type is spelled `T` here: inside this impl `Self::Success`
/// would also name the enum variant.
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::Outcome;
///
/// fn settle<W: WithError<&'static str>>(w: W) -> Result<W::Success, &'static str> {
///     w.to_result()
/// }
///
/// assert_eq!(settle(Outcome::<u8, &str>::Success(1)), Ok(1));
/// assert_eq!(settle(Outcome::<u8, &str>::Failure("late")), Err("late"));
/// ```
impl<T, E> WithError<E> for Outcome<T, E> {
    type Success = T;
    type ErrorOutput<G> = Outcome<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_error(f)
    }

    #[inline]
    fn to_result(self) -> Result<T, E> {
        self.into_result()
    }
}
