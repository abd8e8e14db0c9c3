pub mod describe;
pub mod with_error;

use outcome_rail::traits::{ErrorOps, WithError};
use outcome_rail::Outcome;

#[test]
fn traits_compose_with_inherent_combinators() {
    let outcome: Outcome<i32, &str> = Outcome::Failure("stale");

    let refreshed = outcome
        .fmap_error(|e| format!("cache: {e}"))
        .recover(|e| if e.ends_with("stale") { Outcome::Success(0) } else { Outcome::Failure(e) })
        .map(|v| v + 1);

    assert_eq!(refreshed, Outcome::Success(1));
}
