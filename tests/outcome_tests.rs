#![cfg(feature = "outcome")]
//! Integration tests for the outcome family.
//!
//! - `ResultLogic` / `ErrorLogic<E>`: the tri-state engine
//! - `Outcome`, `OutcomeOf<T>`, `CustomOutcome<E>`, `CustomOutcomeOf<T, E>`
//! - casts between the flavors

use railway::{
    ContractError, CustomOutcome, CustomOutcomeOf, ErrorLogic, Exception, Outcome, OutcomeOf,
    ResultLogic, Status, Unit,
};
use rstest::rstest;
use std::cell::Cell;
use std::cmp::Ordering;

// =============================================================================
// Tri-state Exclusivity
// =============================================================================

fn all_logics() -> Vec<ResultLogic> {
    vec![
        ResultLogic::ok(),
        ResultLogic::warn("slow", None).unwrap(),
        ResultLogic::fail("broken", None).unwrap(),
    ]
}

#[rstest]
fn exactly_one_state_holds() {
    for logic in all_logics() {
        assert_eq!(logic.is_success(), !logic.is_failure());
        if logic.is_warning() {
            assert!(logic.is_success());
        }
        let states = [
            logic.status() == Status::Success,
            logic.status() == Status::Warning,
            logic.status() == Status::Failure,
        ];
        assert_eq!(states.iter().filter(|held| **held).count(), 1);
    }
}

#[rstest]
#[case::warn(Outcome::warn(""))]
#[case::fail(Outcome::fail(""))]
#[case::fail_with_exception(Outcome::fail_with_exception("", Exception::from_message("io")))]
fn empty_message_is_argument_null(#[case] outcome: Result<Outcome, ContractError>) {
    assert_eq!(outcome, Err(ContractError::argument_null("message")));
}

#[rstest]
fn failure_in_error_logic_requires_error() {
    let error = ErrorLogic::<String>::try_fail("broken", None, None).unwrap_err();
    assert!(error.is_argument_null());
}

#[rstest]
fn convertible_to_failure_only_when_not_success() {
    let flags: Vec<bool> = all_logics()
        .iter()
        .map(ResultLogic::is_convertible_to_failure)
        .collect();
    assert_eq!(flags, vec![false, true, true]);
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn value_is_accessible_for_success_and_warning() {
    assert_eq!(OutcomeOf::ok(1).value(), Ok(&1));
    assert_eq!(OutcomeOf::warn(2, "stale").unwrap().value(), Ok(&2));
    let failure: OutcomeOf<i32> = OutcomeOf::fail("broken").unwrap();
    assert!(failure.value().unwrap_err().is_invalid_operation());
}

#[rstest]
fn error_is_accessible_only_for_failure() {
    let success: CustomOutcomeOf<i32, &str> = CustomOutcomeOf::ok(1);
    let warning: CustomOutcomeOf<i32, &str> = CustomOutcomeOf::warn(1, "stale").unwrap();
    let failure: CustomOutcomeOf<i32, &str> = CustomOutcomeOf::fail("broken", "E").unwrap();
    assert!(success.error().unwrap_err().is_invalid_operation());
    assert!(warning.error().unwrap_err().is_invalid_operation());
    assert_eq!(failure.error(), Ok(&"E"));
}

#[rstest]
fn exception_propagates_through_casts() {
    let exception = Exception::from_message("disk full");
    let failure = Outcome::fail_with_exception("write failed", exception.clone()).unwrap();
    let cast: OutcomeOf<i32> = failure.to_failure().unwrap();
    let custom = cast.with_error("E");
    assert_eq!(custom.exception(), Some(&exception));
    assert_eq!(custom.message(), Some("write failed"));
}

// =============================================================================
// Casts
// =============================================================================

#[rstest]
fn value_factory_never_runs_for_failure() {
    let calls = Cell::new(0);
    let factory = || {
        calls.set(calls.get() + 1);
        "value"
    };
    let failure = Outcome::fail("broken").unwrap();
    assert!(failure.with_value_from(factory).is_failure());
    let custom = CustomOutcome::fail("broken", 1).unwrap();
    assert!(custom.with_value_from(factory).is_failure());
    assert_eq!(calls.get(), 0);

    let warning = Outcome::warn("slow").unwrap();
    assert_eq!(warning.with_value_from(factory).value(), Ok(&"value"));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn casts_to_failure_reject_success() {
    assert!(Outcome::ok().to_failure::<i32>().unwrap_err().is_invalid_operation());
    assert!(
        OutcomeOf::ok(1)
            .to_custom_failure("E")
            .unwrap_err()
            .is_invalid_operation()
    );
    assert!(
        CustomOutcomeOf::<i32, &str>::ok(1)
            .to_failure::<u8>()
            .unwrap_err()
            .is_invalid_operation()
    );
}

#[rstest]
fn warning_cannot_become_an_error_typed_failure_without_an_error() {
    let warning: CustomOutcomeOf<i32, &str> = CustomOutcomeOf::warn(1, "stale").unwrap();
    assert!(warning.to_custom_failure().unwrap_err().is_argument_null());

    let plain_warning = Outcome::warn("stale").unwrap();
    let failure = plain_warning.to_custom_failure_of::<i32, _>("E").unwrap();
    assert_eq!(failure.error(), Ok(&"E"));
    assert_eq!(failure.message(), Some("stale"));
}

#[rstest]
fn round_trip_through_all_flavors_keeps_state() {
    let failure = Outcome::fail("broken").unwrap();
    let valued = failure.with_value(1);
    let custom_valued = valued.with_error("E");
    let custom = custom_valued.without_value();
    let plain = custom.without_error();
    assert!(plain.is_failure());
    assert_eq!(plain.message(), Some("broken"));
}

#[rstest]
fn with_unit_attaches_unit() {
    assert_eq!(Outcome::ok().with_unit().value(), Ok(&Unit));
}

#[rstest]
fn map_error_changes_error_type() {
    let failure = CustomOutcome::fail("broken", 404_u16).unwrap();
    let mapped = failure.map_error(|code| format!("HTTP {code}"));
    assert_eq!(mapped.error(), Ok(&"HTTP 404".to_string()));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn bind_short_circuits_on_failure() {
    let calls = Cell::new(0);
    let failure: OutcomeOf<i32> = OutcomeOf::fail("broken").unwrap();
    let bound = failure.bind(|value| {
        calls.set(calls.get() + 1);
        OutcomeOf::ok(value + 1)
    });
    assert!(bound.is_failure());
    assert_eq!(calls.get(), 0);

    let chained = OutcomeOf::ok(1).bind(|value| OutcomeOf::warn(value + 1, "slow").unwrap());
    assert!(chained.is_warning());
    assert_eq!(chained.value(), Ok(&2));
}

#[rstest]
fn bind_keeps_a_warning_when_the_next_step_succeeds() {
    let valued = OutcomeOf::warn(2, "stale cache")
        .unwrap()
        .bind(|value| OutcomeOf::ok(value * 10));
    assert!(valued.is_warning());
    assert_eq!(valued.message(), Some("stale cache"));
    assert_eq!(valued.value(), Ok(&20));

    let plain = Outcome::warn("stale cache").unwrap().bind(Outcome::ok);
    assert!(plain.is_warning());
    assert_eq!(plain.message(), Some("stale cache"));

    let custom = CustomOutcome::<u16>::warn("stale cache")
        .unwrap()
        .bind(CustomOutcome::ok);
    assert!(custom.is_warning());

    let custom_valued = CustomOutcomeOf::<i32, u16>::warn(2, "stale cache")
        .unwrap()
        .bind(|value| CustomOutcomeOf::ok(value + 1));
    assert!(custom_valued.is_warning());
    assert_eq!(custom_valued.value(), Ok(&3));
}

#[rstest]
fn bind_reports_a_failure_of_the_next_step() {
    let exception = Exception::from_message("cache");
    let warning = OutcomeOf::warn_with_exception(2, "stale cache", exception).unwrap();
    let failed: OutcomeOf<i32> = warning.bind(|_| OutcomeOf::fail("broken").unwrap());
    assert!(failed.is_failure());
    assert_eq!(failed.message(), Some("broken"));
    assert_eq!(failed.exception(), None);
}

#[rstest]
fn match_outcome_treats_warning_as_success() {
    let warning = OutcomeOf::warn(5, "slow").unwrap();
    assert_eq!(warning.match_outcome(|value| value, |_| -1), 5);
    let failure: OutcomeOf<i32> = OutcomeOf::fail("broken").unwrap();
    assert_eq!(
        failure.match_outcome(|_| String::new(), |diagnostic| diagnostic.message().to_owned()),
        "broken"
    );
}

#[rstest]
fn on_success_and_on_failure_return_receiver() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);
    let outcome = CustomOutcomeOf::<i32, &str>::fail("broken", "E")
        .unwrap()
        .on_success(|_| successes.set(successes.get() + 1))
        .on_failure(|_, _| failures.set(failures.get() + 1));
    assert!(outcome.is_failure());
    assert_eq!((successes.get(), failures.get()), (0, 1));
}

#[rstest]
fn if_success_and_value_or() {
    let failure: OutcomeOf<i32> = OutcomeOf::fail("broken").unwrap();
    assert_eq!(failure.clone().if_success(|value| value * 2, -1), -1);
    assert_eq!(failure.value_or(7), 7);
    assert_eq!(OutcomeOf::ok(3).if_success(|value| value * 2, -1), 6);
}

// =============================================================================
// Equality and Ordering
// =============================================================================

#[rstest]
fn failure_sorts_before_warning_before_success() {
    let failure = Outcome::fail("broken").unwrap();
    let warning = Outcome::warn("slow").unwrap();
    let success = Outcome::ok();
    assert_eq!(failure.compare_to(&success), Ordering::Less);
    assert_eq!(success.compare_to(&failure), Ordering::Greater);
    assert_eq!(warning.compare_to(&success), Ordering::Less);
    assert_eq!(failure.compare_to(&warning), Ordering::Less);
}

#[rstest]
fn payload_breaks_ties_between_successes() {
    assert_eq!(OutcomeOf::ok(1).compare_to(&OutcomeOf::ok(2)), Ordering::Less);
    assert_eq!(
        CustomOutcomeOf::<i32, ()>::ok(3).compare_to(&CustomOutcomeOf::ok(3)),
        Ordering::Equal
    );
}

#[rstest]
fn equality_considers_logic_and_payload() {
    assert_eq!(OutcomeOf::ok(1), OutcomeOf::ok(1));
    assert_ne!(OutcomeOf::ok(1), OutcomeOf::warn(1, "slow").unwrap());
    assert_ne!(Outcome::fail("a").unwrap(), Outcome::fail("b").unwrap());
}

#[rstest]
fn only_plain_success_equals_raw_value() {
    assert!(OutcomeOf::ok(5).eq_value(&5));
    assert!(!OutcomeOf::warn(5, "slow").unwrap().eq_value(&5));
    assert!(!CustomOutcomeOf::<i32, ()>::fail("broken", ()).unwrap().eq_value(&5));
}

#[rstest]
fn custom_error_comparer() {
    let first = CustomOutcome::fail("broken", "Code").unwrap();
    let second = CustomOutcome::fail("broken", "CODE").unwrap();
    assert_ne!(first, second);
    let ignore_case = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
    assert!(first.eq_with(&second, &ignore_case));
}

#[rstest]
fn shared_success_constant() {
    assert_eq!(Outcome::OK, Outcome::ok());
    assert_eq!(ResultLogic::OK, ResultLogic::default());
}
