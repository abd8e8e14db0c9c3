use outcome_rail::convert::*;
use outcome_rail::{BoxedOutcome, Outcome};

#[test]
fn result_and_outcome_convert_both_ways() {
    let ok: Result<i32, &str> = Ok(42);
    assert_eq!(result_to_outcome(ok), Outcome::Success(42));

    let err: Result<i32, &str> = Err("failed");
    let outcome = result_to_outcome(err);
    assert!(outcome.is_failure());
    assert_eq!(outcome_to_result(outcome), Err("failed"));
}

#[test]
fn option_to_outcome_uses_error_for_none() {
    assert_eq!(option_to_outcome(Some(1), "absent"), Outcome::Success(1));
    assert_eq!(option_to_outcome(None::<i32>, "absent"), Outcome::Failure("absent"));
}

#[test]
fn flatten_outcome_prefers_outer_failure() {
    let outer: Outcome<Outcome<i32, &str>, &str> = Outcome::Failure("outer");
    assert_eq!(flatten_outcome(outer), Outcome::Failure("outer"));

    let inner: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Failure("inner"));
    assert_eq!(flatten_outcome(inner), Outcome::Failure("inner"));

    let both: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Success(5));
    assert_eq!(flatten_outcome(both), Outcome::Success(5));
}

#[test]
fn transpose_outcome_maps_success_none_to_none() {
    assert_eq!(transpose_outcome(Outcome::<Option<u8>, &str>::Success(None)), None);
    assert_eq!(
        transpose_outcome(Outcome::<Option<u8>, &str>::Success(Some(2))),
        Some(Outcome::Success(2))
    );
}

#[test]
fn boxed_failure_accepts_strings_and_errors() {
    let from_str: BoxedOutcome<()> = boxed_failure("disk full");
    assert!(from_str.is_failure_and(|e| e.to_string() == "disk full"));

    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let from_io: BoxedOutcome<()> = boxed_failure(io);
    assert!(from_io.is_failure_and(|e| e.to_string() == "read-only"));
}

#[test]
fn box_outcome_error_erases_concrete_error() {
    let parsed = Outcome::from_result("x1".parse::<u32>());
    let erased = box_outcome_error(parsed);

    assert!(erased.is_failure_and(|e| e.to_string().contains("invalid digit")));
}
