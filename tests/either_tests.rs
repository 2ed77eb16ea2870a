#![cfg(feature = "either")]
//! Integration tests for `Either<L, R>`.
//!
//! Either is one of three states:
//! - `Left(L)`: the alternative branch
//! - `Right(R)`: the expected branch
//! - `None`: deliberately empty

use railway::{ContractError, Either, EitherLeft, EitherRight};
use rstest::rstest;
use std::cell::Cell;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Person {
    name: String,
}

fn person(name: &str) -> Person {
    Person {
        name: name.to_string(),
    }
}

// =============================================================================
// Construction and State
// =============================================================================

#[rstest]
fn default_equals_explicit_none() {
    assert_eq!(Either::<Person, i32>::default(), Either::None);
    assert_eq!(Either::<String, Vec<u8>>::default(), Either::none());
}

#[rstest]
fn left_never_equals_right_with_same_payload() {
    let left: Either<i32, i32> = Either::left(7);
    let right: Either<i32, i32> = Either::right(7);
    assert_ne!(left, right);
}

#[rstest]
fn nullable_constructors_reject_null() {
    assert_eq!(
        Either::<Person, i32>::try_left(None),
        Err(ContractError::argument_null("value"))
    );
    assert!(Either::<Person, i32>::try_right(None).unwrap_err().is_argument_null());
    assert_eq!(Either::<i32, Person>::try_right(Some(person("a"))), Ok(Either::Right(person("a"))));
}

#[rstest]
#[case(Either::Left(1))]
#[case(Either::None)]
fn right_value_outside_right_is_invalid_operation(#[case] either: Either<i32, i32>) {
    assert!(either.right_value().unwrap_err().is_invalid_operation());
}

// =============================================================================
// Match
// =============================================================================

#[rstest]
fn match_scenarios() {
    let left: Either<String, usize> = Either::Left("err".to_string());
    assert_eq!(left.match_either(|right| right, |left| left.len()), Ok(3));

    let right: Either<String, i32> = Either::Right(42);
    assert_eq!(right.match_either(|right| right, |_| -1), Ok(42));

    let none: Either<String, i32> = Either::None;
    assert_eq!(none.clone().match_with_none(|right| right, |_| -1, || -99), -99);
    assert!(none.match_either(|right| right, |_| -1).unwrap_err().is_invalid_operation());
}

#[rstest]
fn try_match_with_none_checks_none_handler() {
    let none: Either<String, i32> = Either::None;
    let error = none
        .try_match_with_none(|_| Some(1), |_| Some(2), || None)
        .unwrap_err();
    assert!(error.is_null_result());
}

#[rstest]
fn match_nullable_is_the_only_null_tolerant_match() {
    let right: Either<String, i32> = Either::Right(1);
    assert_eq!(right.clone().match_nullable(|_| None::<Person>, |_| None), Ok(None));
    assert!(right.try_match(|_| None::<Person>, |_| None).unwrap_err().is_null_result());
}

// =============================================================================
// Null-result Enforcement
// =============================================================================

#[rstest]
fn map_returning_null_on_right_is_null_result() {
    let right: Either<String, i32> = Either::Right(1);
    assert!(right.try_map_right(|_| None::<Person>).unwrap_err().is_null_result());
}

#[rstest]
fn map_returning_null_on_left_never_runs() {
    let calls = Cell::new(0);
    let left: Either<String, i32> = Either::Left("err".to_string());
    let mapped = left.clone().try_map_right(|_| {
        calls.set(calls.get() + 1);
        None::<Person>
    });
    assert_eq!(mapped, Ok(Either::Left("err".to_string())));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn fold_on_inactive_branch_returns_seed_without_checking() {
    let left: Either<String, i32> = Either::Left("err".to_string());
    assert_eq!(left.try_fold_right(5, |_, _| None), Ok(5));
}

#[rstest]
fn or_else_factory_is_null_checked_when_invoked() {
    let left: Either<String, Person> = Either::Left("err".to_string());
    assert!(left.clone().try_right_or_else(|| None).unwrap_err().is_null_result());
    assert_eq!(left.try_right_or_else(|| Some(person("fallback"))), Ok(person("fallback")));
}

// =============================================================================
// If / Or
// =============================================================================

#[rstest]
fn if_left_with_default_only_throws_for_none() {
    let right: Either<String, i32> = Either::Right(1);
    assert_eq!(right.if_left(|_| 0, 22), Ok(22));
    let left: Either<String, i32> = Either::Left("abc".to_string());
    assert_eq!(left.if_left(|value| value.len(), 22), Ok(3));
    assert!(Either::<String, i32>::None.if_left(|_| 0, 22).unwrap_err().is_invalid_operation());
}

#[rstest]
#[case(Either::Left("l".to_string()), 0)]
#[case(Either::Right(9), 9)]
#[case(Either::None, 0)]
fn right_or_default_never_throws(#[case] either: Either<String, i32>, #[case] expected: i32) {
    assert_eq!(either.right_or_default(), expected);
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn bimap_applies_only_active_handler() {
    let right: Either<String, i32> = Either::Right(2);
    assert_eq!(right.bimap(|value| value * 10, |left| left.len()), Either::Right(20));
}

#[rstest]
fn bind_right_flattens() {
    let right: Either<String, i32> = Either::Right(4);
    let halved = right.bind_right(|value| {
        if value % 2 == 0 {
            Either::Right(value / 2)
        } else {
            Either::Left(format!("{value} is odd"))
        }
    });
    assert_eq!(halved, Either::Right(2));
}

#[rstest]
fn bibind_can_cross_branches() {
    let left: Either<i32, i32> = Either::Left(-1);
    let result = left.bibind(Either::<String, i32>::Right, |value| Either::Right(value.abs()));
    assert_eq!(result, Either::Right(1));
}

#[rstest]
fn swap_exchanges_branches() {
    let left: Either<&str, i32> = Either::Left("e");
    assert_eq!(left.swap(), Either::Right("e"));
}

// =============================================================================
// Tokens and Comparison
// =============================================================================

#[rstest]
fn tokens_compare_like_full_values() {
    let left: Either<i32, String> = Either::Left(1);
    assert!(left == EitherLeft::new(1));
    assert_eq!(left == EitherLeft::new(1), left == Either::Left(1));
    assert!(left != EitherRight::new("1".to_string()));

    let token_either: Either<i32, String> = EitherLeft::new(1).into();
    assert_eq!(token_either, left);
}

#[rstest]
fn ordering_property() {
    let left: Either<i32, i32> = Either::Left(0);
    let none: Either<i32, i32> = Either::None;
    assert_eq!(left.cmp(&none), Ordering::Greater);
    assert_eq!(none.cmp(&left), Ordering::Less);
    assert!(left < Either::Right(i32::MIN));
}

#[rstest]
fn object_and_generic_entry_points_disagree_on_mismatched_tokens() {
    let left: Either<i32, i32> = Either::Left(1);
    // The generic path orders the mismatch.
    assert_eq!(left.compare_right(&EitherRight::new(0)), Ordering::Less);
    assert!(left < EitherRight::new(0));
    // The object path rejects it.
    assert!(left.compare_any(&EitherRight::new(0)).unwrap_err().is_invalid_operation());
}

#[rstest]
fn object_path_rejects_unrelated_types() {
    let right: Either<i32, i32> = Either::Right(1);
    assert!(right.compare_any(&1_i32).unwrap_err().is_argument_type());
    assert!(!right.equals_any(&1_i32));
}

#[rstest]
fn payload_equality_of_records_is_structural() {
    let first: Either<String, Person> = Either::Right(person("Ada"));
    let second: Either<String, Person> = Either::Right(person("Ada"));
    assert_eq!(first, second);
    assert!(first.eq_with(&second, &railway::DefaultEquality, &railway::DefaultEquality));
    assert!(!first.eq_with(&second, &railway::ReferenceEquality, &railway::DefaultEquality));
}
