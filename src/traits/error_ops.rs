use crate::traits::with_error::WithError;
use crate::types::Outcome;

/// Recovery and two-sided mapping on top of [`WithError`].
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ErrorOps;
/// use outcome_rail::Outcome;
///
/// let cached = Outcome::<i32, &str>::Failure("cache miss").recover(|_| Outcome::Success(0));
/// assert_eq!(cached, Outcome::Success(0));
/// ```
pub trait ErrorOps<E>: WithError<E> {
    /// Gives a failure the chance to turn into a new outcome of the same type.
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
        Self: Sized;

    /// Maps both sides at once; exactly one of the two functions runs.
    fn bimap_outcome<B, F, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Outcome<B, F>
    where
        SuccessF: FnOnce(Self::Success) -> B,
        ErrorF: FnOnce(E) -> F,
        Self: Sized;
}

impl<T, E> ErrorOps<E> for Outcome<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => recovery(error),
        }
    }

    #[inline]
    fn bimap_outcome<B, F, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Outcome<B, F>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(success_f(value)),
            Outcome::Failure(error) => Outcome::Failure(error_f(error)),
        }
    }
}
