use outcome_rail::Outcome;

#[test]
fn iter_yields_success_value_once() {
    let o = Outcome::<i32, &str>::Success(4);
    let mut it = o.iter();

    assert_eq!(it.len(), 1);
    assert_eq!(it.next(), Some(&4));
    assert_eq!(it.next(), None);
}

#[test]
fn iter_is_empty_on_failure() {
    let o = Outcome::<i32, &str>::Failure("nope");
    assert_eq!(o.iter().count(), 0);
    assert_eq!(o.into_iter().next(), None);
}

#[test]
fn iter_mut_edits_success_in_place() {
    let mut o = Outcome::<i32, &str>::Success(1);
    for v in &mut o {
        *v += 41;
    }
    assert_eq!(o, Outcome::Success(42));

    let mut f = Outcome::<i32, &str>::Failure("untouched");
    assert_eq!(f.iter_mut().count(), 0);
}

#[test]
fn outcomes_flatten_into_their_successes() {
    let outcomes = vec![
        Outcome::Success(1),
        Outcome::Failure("skip"),
        Outcome::Success(3),
    ];

    let values: Vec<i32> = outcomes.iter().flatten().copied().collect();
    assert_eq!(values, vec![1, 3]);

    let owned: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(owned, vec![1, 3]);
}
