//! Tests for message aggregation across both outcome types.

use outcome::{LINE_SEPARATOR, UnitOutcome, ValueOutcome};
use rstest::rstest;

#[rstest]
#[case(vec!["one"])]
#[case(vec!["one", "two"])]
#[case(vec!["one", "two", "three"])]
#[case(vec!["dup", "dup"])]
fn joins_messages_in_insertion_order(#[case] messages: Vec<&str>) {
    let expected = messages.join(LINE_SEPARATOR);
    let saved = UnitOutcome::failure_all(messages.clone());
    assert_eq!(saved.aggregate_errors(), Some(expected.clone()));
    let parsed = ValueOutcome::<u32>::failure_all(messages);
    assert_eq!(parsed.aggregate_errors(), Some(expected));
}

#[test]
fn success_aggregates_to_none() {
    assert_eq!(UnitOutcome::success().aggregate_errors(), None);
    assert_eq!(ValueOutcome::success(7_u32).aggregate_errors(), None);
}

#[test]
fn messageless_failure_aggregates_to_none() {
    let saved = UnitOutcome::failure_all(Vec::<String>::new());
    assert!(saved.is_failure());
    assert_eq!(saved.aggregate_errors(), None);
}

#[test]
fn single_message_has_no_separator() {
    let saved = UnitOutcome::failure("boom");
    assert_eq!(saved.aggregate_errors().as_deref(), Some("boom"));
}

#[test]
fn separator_sits_between_each_pair() {
    let saved = UnitOutcome::failure_all(["a", "b", "c"]);
    let joined = saved.aggregate_errors().unwrap_or_default();
    assert_eq!(joined.matches(LINE_SEPARATOR).count(), 2);
}
