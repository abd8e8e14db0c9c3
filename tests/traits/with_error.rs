use outcome_rail::traits::WithError;
use outcome_rail::Outcome;

#[test]
fn fmap_error_maps_failure_type() {
    let outcome: Outcome<i32, &str> = Outcome::Failure("oops");
    let mapped: Outcome<i32, String> = outcome.fmap_error(|e| format!("ERR:{e}"));

    assert_eq!(mapped.unwrap_failure(), "ERR:oops");
}

#[test]
fn fmap_error_leaves_success_untouched() {
    let mut called = false;
    let outcome: Outcome<i32, &str> = Outcome::Success(3);
    let mapped = outcome.fmap_error(|e| {
        called = true;
        e.len()
    });

    assert_eq!(mapped, Outcome::Success(3));
    assert!(!called, "fmap_error must not run on a success");
}

#[test]
fn to_result_preserves_variant() {
    assert_eq!(Outcome::<i32, &str>::Success(1).to_result(), Ok(1));
    assert_eq!(Outcome::<i32, &str>::Failure("e").to_result(), Err("e"));
}

fn settle<W, E>(container: W) -> Result<W::Success, E>
where
    W: WithError<E>,
{
    container.to_result()
}

#[test]
fn to_result_through_generic_bound_keeps_success_type() {
    let ok: Result<String, &str> = settle(Outcome::<String, &str>::Success("ready".to_string()));
    assert_eq!(ok.as_deref(), Ok("ready"));

    let err: Result<String, &str> = settle(Outcome::<String, &str>::Failure("late"));
    assert_eq!(err, Err("late"));
}
