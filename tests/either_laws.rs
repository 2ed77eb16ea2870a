#![cfg(feature = "either")]
//! Property-based tests for `Either<L, R>`.
//!
//! - **Identity**: `e.bimap(|r| r, |l| l) == e`
//! - **Composition**: `e.map_right(f).map_right(g) == e.map_right(|r| g(f(r)))`
//! - **Left identity**: `Either::Right(a).bind_right(f) == f(a)`
//! - **Passthrough**: every transformation of `None` is `None` and runs nothing
//! - **Ordering**: `None < Left < Right`, total and antisymmetric

use proptest::prelude::*;
use railway::{Either, EitherLeft, EitherRight};
use std::cell::Cell;
use std::cmp::Ordering;

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        any::<String>().prop_map(Either::Right),
        Just(Either::None),
    ]
}

fn rank(either: &Either<i32, String>) -> u8 {
    match either {
        Either::None => 0,
        Either::Left(_) => 1,
        Either::Right(_) => 2,
    }
}

proptest! {
    #[test]
    fn prop_bimap_identity(value in either_strategy()) {
        let result = value.clone().bimap(|right| right, |left| left);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_map_right_composition(value in either_strategy()) {
        let f = |s: String| s.len();
        let g = |n: usize| n.wrapping_mul(3);

        let composed = value.clone().map_right(|s| g(f(s)));
        let chained = value.map_right(f).map_right(g);

        prop_assert_eq!(composed, chained);
    }

    #[test]
    fn prop_bind_right_left_identity(text in any::<String>()) {
        let f = |s: String| -> Either<i32, usize> {
            if s.is_empty() { Either::Left(0) } else { Either::Right(s.len()) }
        };
        let bound = Either::<i32, String>::Right(text.clone()).bind_right(f);
        prop_assert_eq!(bound, f(text));
    }

    #[test]
    fn prop_bind_right_right_identity(value in either_strategy()) {
        let bound = value.clone().bind_right(Either::Right);
        prop_assert_eq!(bound, value);
    }

    #[test]
    fn prop_swap_is_involution(value in either_strategy()) {
        prop_assert_eq!(value.clone().swap().swap(), value);
    }

    #[test]
    fn prop_ordering_follows_state_rank(first in either_strategy(), second in either_strategy()) {
        if rank(&first) != rank(&second) {
            prop_assert_eq!(first.cmp(&second), rank(&first).cmp(&rank(&second)));
        }
        prop_assert_eq!(first.cmp(&second), second.cmp(&first).reverse());
        prop_assert_eq!(first.compare_any(&second), Ok(first.cmp(&second)));
    }

    #[test]
    fn prop_tokens_agree_with_full_values(
        value in either_strategy(),
        left in any::<i32>(),
        right in any::<String>(),
    ) {
        prop_assert_eq!(value == EitherLeft::new(left), value == Either::Left(left));
        prop_assert_eq!(
            value.partial_cmp(&EitherRight::new(right.clone())),
            value.partial_cmp(&Either::Right(right))
        );
    }

    #[test]
    fn prop_filter_keeps_only_matching_rights(value in either_strategy()) {
        let filtered = value.clone().filter(|s| s.len() % 2 == 0);
        match value {
            Either::Right(s) if s.len() % 2 == 0 => prop_assert_eq!(filtered, Either::Right(s)),
            _ => prop_assert_eq!(filtered, Either::None),
        }
    }
}

#[test]
fn none_passes_through_every_transformation_without_invoking_callbacks() {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);
    let none: Either<i32, String> = Either::None;

    let mapped = none.clone().map_right(|s| {
        count();
        s
    });
    assert_eq!(mapped, Either::None);

    let mapped_left = none.clone().map_left(|l| {
        count();
        l
    });
    assert_eq!(mapped_left, Either::None);

    let bimapped = none.clone().bimap(
        |s| {
            count();
            s
        },
        |l| {
            count();
            l
        },
    );
    assert_eq!(bimapped, Either::None);

    let bound = none.clone().bind_right(|s| {
        count();
        Either::Right(s)
    });
    assert_eq!(bound, Either::None);

    let rebound = none.clone().bibind(
        |s| {
            count();
            Either::<i32, String>::Right(s)
        },
        |l| {
            count();
            Either::Left(l)
        },
    );
    assert_eq!(rebound, Either::None);

    let filtered = none.clone().filter(|_| {
        count();
        true
    });
    assert_eq!(filtered, Either::None);

    assert_eq!(
        none.clone().on_left(|_| count()).on_right(|_| count()),
        Either::None
    );
    assert_eq!(
        none.clone().on_right_or_left(|_| count(), |_| count()),
        Either::None
    );

    let checked = none.clone().try_map_right(|s| {
        count();
        Some(s)
    });
    assert_eq!(checked, Ok(Either::None));

    let folded = none.fold_right(0, |seed, _| {
        count();
        seed
    });
    assert_eq!(folded, 0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn ordering_is_transitive_across_states() {
    let values: [Either<i32, i32>; 3] = [Either::None, Either::Left(0), Either::Right(0)];
    for window in values.windows(2) {
        assert_eq!(window[0].cmp(&window[1]), Ordering::Less);
    }
    assert!(values[0] < values[2]);
}
