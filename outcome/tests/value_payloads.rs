//! Tests for payload handling on `ValueOutcome`.

use outcome::ValueOutcome;
use rstest::rstest;

#[rstest]
#[case(42_i32)]
#[case(0)]
#[case(-7)]
fn success_round_trips_the_payload(#[case] payload: i32) {
    let parsed = ValueOutcome::success(payload);
    assert!(parsed.is_success());
    assert!(!parsed.is_failure());
    assert_eq!(parsed.value(), payload);
    assert_eq!(parsed.value_ref(), Some(&payload));
    assert_eq!(parsed.aggregate_errors(), None);
}

#[test]
fn failure_reads_as_the_default_payload() {
    let parsed = ValueOutcome::<i32>::failure("bad input");
    assert!(parsed.is_failure());
    assert_eq!(parsed.value(), 0);
    assert_eq!(parsed.value_ref(), None);
    assert_eq!(parsed.into_value(), 0);
}

#[test]
fn default_success_is_an_ordinary_success() {
    let parsed = ValueOutcome::<String>::success_default();
    assert!(parsed.is_success());
    assert_eq!(parsed.value_ref(), Some(&String::new()));
    assert_eq!(parsed, ValueOutcome::success(String::new()));
}

#[test]
fn payloads_survive_cloning() {
    let parsed = ValueOutcome::success(vec![1_u8, 2, 3]);
    let copied = parsed.clone();
    assert_eq!(copied, parsed);
    assert_eq!(copied.into_value(), vec![1, 2, 3]);
}

#[test]
fn borrowing_needs_no_default_or_clone() {
    struct Token(u8);

    let parsed = ValueOutcome::success(Token(9));
    assert_eq!(parsed.value_ref().map(|t| t.0), Some(9));
}
