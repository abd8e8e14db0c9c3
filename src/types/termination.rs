use std::process::{ExitCode, Termination};

use crate::traits::Describe;
use crate::types::outcome::Outcome;

/// Lets `main` return an [`Outcome`].
///
/// A failure prints `Error: <description>` to stderr and exits with
/// [`ExitCode::FAILURE`]; a success defers to the value's own `report`.
///
/// ```no_run
/// use outcome_rail::Outcome;
///
/// fn main() -> Outcome<(), String> {
///     Outcome::Failure("missing --config".to_string())
/// }
/// ```
impl<T, E> Termination for Outcome<T, E>
where
    T: Termination,
    E: Describe,
{
    fn report(self) -> ExitCode {
        match self {
            Outcome::Success(value) => value.report(),
            Outcome::Failure(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(error = %error.description(), "process exiting with failure");
                eprintln!("Error: {}", error.description());
                ExitCode::FAILURE
            },
        }
    }
}
