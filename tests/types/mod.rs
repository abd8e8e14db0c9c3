pub mod iter;

use outcome_rail::{BoxedOutcome, Outcome};

#[test]
fn outcome_is_send_and_sync_when_payloads_are() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Outcome<i32, &'static str>>();
    assert_send_sync::<Outcome<String, std::io::ErrorKind>>();
    assert_send_sync::<BoxedOutcome<Vec<u8>>>();
}

#[test]
fn boxed_outcome_accepts_any_std_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    let outcome: BoxedOutcome<String> = Outcome::Failure(io.into());

    assert!(outcome.is_failure_and(|e| e.to_string() == "config.toml missing"));
}

#[test]
fn boxed_outcome_is_shareable_across_threads() {
    let outcome: BoxedOutcome<u32> = Outcome::Success(9);

    let handle = std::thread::spawn(move || outcome.map(|v| v * 2).unwrap());
    assert_eq!(handle.join().unwrap(), 18);
}

#[cfg(feature = "std")]
#[test]
fn termination_reports_success_and_failure_exit_codes() {
    use std::process::{ExitCode, Termination};

    assert_eq!(Outcome::<(), &str>::Success(()).report(), ExitCode::SUCCESS);
    assert_eq!(Outcome::<(), &str>::Failure("bad flag").report(), ExitCode::FAILURE);
}
