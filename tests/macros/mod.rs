use std::cell::Cell;

use outcome_rail::{guard, outcome, propagate, Outcome};

#[derive(Debug, PartialEq)]
enum AppError {
    Parse(String),
    Range(i64),
}

impl From<std::num::ParseIntError> for AppError {
    fn from(e: std::num::ParseIntError) -> Self {
        AppError::Parse(e.to_string())
    }
}

fn parse_percent(raw: &str) -> Outcome<u8, AppError> {
    let n: i64 = propagate!(outcome!(raw.trim().parse::<i64>()));
    guard!((0..=100).contains(&n), AppError::Range(n));
    Outcome::Success(n as u8)
}

#[test]
fn propagate_yields_value_on_success() {
    assert_eq!(parse_percent(" 42 "), Outcome::Success(42));
}

#[test]
fn propagate_converts_and_returns_failure() {
    let outcome = parse_percent("forty");
    assert!(matches!(outcome, Outcome::Failure(AppError::Parse(_))));
}

#[test]
fn guard_returns_failure_when_condition_fails() {
    assert_eq!(parse_percent("150"), Outcome::Failure(AppError::Range(150)));
}

#[test]
fn guard_only_evaluates_error_on_failure() {
    let built = Cell::new(0);
    let check = |ok: bool| -> Outcome<(), &'static str> {
        guard!(ok, {
            built.set(built.get() + 1);
            "rejected"
        });
        Outcome::Success(())
    };

    assert_eq!(check(true), Outcome::Success(()));
    assert_eq!(built.get(), 0);
    assert_eq!(check(false), Outcome::Failure("rejected"));
    assert_eq!(built.get(), 1);
}

#[test]
fn propagate_stops_before_later_steps() {
    let later = Cell::new(false);
    let run = || -> Outcome<i32, &'static str> {
        let first: i32 = propagate!(Outcome::<i32, &str>::Failure("first step"));
        later.set(true);
        Outcome::Success(first)
    };

    assert_eq!(run(), Outcome::Failure("first step"));
    assert!(!later.get());
}

#[test]
fn outcome_macro_accepts_blocks() {
    let o = outcome!({
        let raw = "12";
        raw.parse::<u8>()
    });
    assert_eq!(o.into_success(), Some(12));
}
