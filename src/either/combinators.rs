//! Combinators over `Either<L, R>`.
//!
//! Handler arguments are ordered right first: `match_either(on_right, on_left)`.
//!
//! A two-handler combinator fails with `InvalidOperation` on `None`; the
//! variant with an explicit `None` handler never fails for state reasons.
//! Transformations pass `None` through unchanged without running a handler.
//! The `try_*` combinators accept handlers returning a nullable value and
//! raise `NullResult` when the handler that actually ran returned `None`.

use crate::comparer::EqualityComparer;
use crate::error::{Fallible, NullPolicy, require_result};

use super::Either;
use super::value::none_state;

impl<L, R> Either<L, R> {
    // =========================================================================
    // Match
    // =========================================================================

    /// Eliminates a `Left` or `Right`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Either;
    ///
    /// let left: Either<&str, usize> = Either::Left("err");
    /// assert_eq!(left.match_either(|right| right, str::len), Ok(3));
    ///
    /// let none: Either<&str, usize> = Either::None;
    /// assert!(none.match_either(|right| right, str::len).is_err());
    /// ```
    pub fn match_either<U, FR, FL>(self, on_right: FR, on_left: FL) -> Fallible<U>
    where
        FR: FnOnce(R) -> U,
        FL: FnOnce(L) -> U,
    {
        match self {
            Self::Right(value) => Ok(on_right(value)),
            Self::Left(value) => Ok(on_left(value)),
            Self::None => Err(none_state("Either::match_either")),
        }
    }

    /// Eliminates every state.
    pub fn match_with_none<U, FR, FL, FN>(self, on_right: FR, on_left: FL, on_none: FN) -> U
    where
        FR: FnOnce(R) -> U,
        FL: FnOnce(L) -> U,
        FN: FnOnce() -> U,
    {
        match self {
            Self::Right(value) => on_right(value),
            Self::Left(value) => on_left(value),
            Self::None => on_none(),
        }
    }

    /// Eliminates a `Left` or `Right` with handlers that must not return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`, and [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the handler that ran returned `None`.
    pub fn try_match<U, FR, FL>(self, on_right: FR, on_left: FL) -> Fallible<U>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<U>,
    {
        const OPERATION: &str = "Either::try_match";
        self.dispatch(OPERATION, NullPolicy::Reject, on_right, on_left, || {
            Err(none_state(OPERATION))
        })
        .and_then(|output| require_result(OPERATION, output))
    }

    /// Eliminates every state with handlers that must not return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the handler that ran returned `None`.
    pub fn try_match_with_none<U, FR, FL, FN>(
        self,
        on_right: FR,
        on_left: FL,
        on_none: FN,
    ) -> Fallible<U>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<U>,
        FN: FnOnce() -> Option<U>,
    {
        const OPERATION: &str = "Either::try_match_with_none";
        self.dispatch(OPERATION, NullPolicy::Reject, on_right, on_left, || {
            Ok(on_none())
        })
        .and_then(|output| require_result(OPERATION, output))
    }

    /// Eliminates a `Left` or `Right`, returning a null handler result as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Either;
    ///
    /// let right: Either<(), i32> = Either::Right(1);
    /// assert_eq!(right.match_nullable(|_| None::<String>, |_| None), Ok(None));
    /// ```
    pub fn match_nullable<U, FR, FL>(self, on_right: FR, on_left: FL) -> Fallible<Option<U>>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<U>,
    {
        const OPERATION: &str = "Either::match_nullable";
        self.dispatch(OPERATION, NullPolicy::Propagate, on_right, on_left, || {
            Err(none_state(OPERATION))
        })
    }

    /// Eliminates every state, returning a null handler result as-is.
    pub fn match_nullable_with_none<U, FR, FL, FN>(
        self,
        on_right: FR,
        on_left: FL,
        on_none: FN,
    ) -> Option<U>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<U>,
        FN: FnOnce() -> Option<U>,
    {
        self.match_with_none(on_right, on_left, on_none)
    }

    // =========================================================================
    // Map and bind
    // =========================================================================

    /// Transforms a `Right` payload; `Left` and `None` pass through.
    pub fn map_right<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Right(value) => Either::Right(function(value)),
            Self::Left(value) => Either::Left(value),
            Self::None => Either::None,
        }
    }

    /// Transforms a `Left` payload; `Right` and `None` pass through.
    pub fn map_left<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
            Self::None => Either::None,
        }
    }

    /// Transforms whichever branch is active; `None` passes through.
    pub fn bimap<M, U, FR, FL>(self, on_right: FR, on_left: FL) -> Either<M, U>
    where
        FR: FnOnce(R) -> U,
        FL: FnOnce(L) -> M,
    {
        match self {
            Self::Right(value) => Either::Right(on_right(value)),
            Self::Left(value) => Either::Left(on_left(value)),
            Self::None => Either::None,
        }
    }

    /// Transforms a `Right` payload with a handler that must not return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the handler ran and returned `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(1);
    /// assert!(right.try_map_right(|_| None::<String>).unwrap_err().is_null_result());
    ///
    /// // The handler never runs on a Left, so nothing is checked.
    /// let left: Either<&str, i32> = Either::Left("err");
    /// assert_eq!(left.try_map_right(|_| None::<String>), Ok(Either::Left("err")));
    /// ```
    pub fn try_map_right<U, F>(self, function: F) -> Fallible<Either<L, U>>
    where
        F: FnOnce(R) -> Option<U>,
    {
        match self {
            Self::Right(value) => {
                require_result("Either::try_map_right", function(value)).map(Either::Right)
            }
            Self::Left(value) => Ok(Either::Left(value)),
            Self::None => Ok(Either::None),
        }
    }

    /// Transforms a `Left` payload with a handler that must not return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the handler ran and returned `None`.
    pub fn try_map_left<M, F>(self, function: F) -> Fallible<Either<M, R>>
    where
        F: FnOnce(L) -> Option<M>,
    {
        match self {
            Self::Left(value) => {
                require_result("Either::try_map_left", function(value)).map(Either::Left)
            }
            Self::Right(value) => Ok(Either::Right(value)),
            Self::None => Ok(Either::None),
        }
    }

    /// Transforms whichever branch is active with handlers that must not
    /// return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the handler that ran returned `None`.
    pub fn try_bimap<M, U, FR, FL>(self, on_right: FR, on_left: FL) -> Fallible<Either<M, U>>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<M>,
    {
        const OPERATION: &str = "Either::try_bimap";
        match self {
            Self::Right(value) => require_result(OPERATION, on_right(value)).map(Either::Right),
            Self::Left(value) => require_result(OPERATION, on_left(value)).map(Either::Left),
            Self::None => Ok(Either::None),
        }
    }

    /// Chains a computation on a `Right` payload.
    pub fn bind_right<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Right(value) => function(value),
            Self::Left(value) => Either::Left(value),
            Self::None => Either::None,
        }
    }

    /// Chains a computation on a `Left` payload.
    pub fn bind_left<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
            Self::None => Either::None,
        }
    }

    /// Chains a computation on whichever branch is active.
    pub fn bibind<M, U, FR, FL>(self, on_right: FR, on_left: FL) -> Either<M, U>
    where
        FR: FnOnce(R) -> Either<M, U>,
        FL: FnOnce(L) -> Either<M, U>,
    {
        self.match_with_none(on_right, on_left, || Either::None)
    }

    // =========================================================================
    // Fold
    // =========================================================================

    /// Folds a `Right` payload into `seed`; otherwise returns `seed`.
    pub fn fold_right<S, F>(self, seed: S, function: F) -> S
    where
        F: FnOnce(S, R) -> S,
    {
        match self {
            Self::Right(value) => function(seed, value),
            _ => seed,
        }
    }

    /// Folds a `Left` payload into `seed`; otherwise returns `seed`.
    pub fn fold_left<S, F>(self, seed: S, function: F) -> S
    where
        F: FnOnce(S, L) -> S,
    {
        match self {
            Self::Left(value) => function(seed, value),
            _ => seed,
        }
    }

    /// Folds whichever branch is active into `seed`.
    pub fn bifold<S, FR, FL>(self, seed: S, on_right: FR, on_left: FL) -> S
    where
        FR: FnOnce(S, R) -> S,
        FL: FnOnce(S, L) -> S,
    {
        match self {
            Self::Right(value) => on_right(seed, value),
            Self::Left(value) => on_left(seed, value),
            Self::None => seed,
        }
    }

    /// Folds a `Right` payload with a folder that must not return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the folder ran and returned `None`.
    pub fn try_fold_right<S, F>(self, seed: S, function: F) -> Fallible<S>
    where
        F: FnOnce(S, R) -> Option<S>,
    {
        match self {
            Self::Right(value) => require_result("Either::try_fold_right", function(seed, value)),
            _ => Ok(seed),
        }
    }

    /// Folds a `Left` payload with a folder that must not return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the folder ran and returned `None`.
    pub fn try_fold_left<S, F>(self, seed: S, function: F) -> Fallible<S>
    where
        F: FnOnce(S, L) -> Option<S>,
    {
        match self {
            Self::Left(value) => require_result("Either::try_fold_left", function(seed, value)),
            _ => Ok(seed),
        }
    }

    // =========================================================================
    // If
    // =========================================================================

    /// Applies `on_left` to a `Left`, or returns `default` for a `Right`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(5);
    /// assert_eq!(right.if_left(|_| 0, 22), Ok(22));
    /// assert!(Either::<&str, i32>::None.if_left(|_| 0, 22).is_err());
    /// ```
    pub fn if_left<U, F>(self, on_left: F, default: U) -> Fallible<U>
    where
        F: FnOnce(L) -> U,
    {
        self.if_left_else(on_left, || default)
    }

    /// Applies `on_right` to a `Right`, or returns `default` for a `Left`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    pub fn if_right<U, F>(self, on_right: F, default: U) -> Fallible<U>
    where
        F: FnOnce(R) -> U,
    {
        self.if_right_else(on_right, || default)
    }

    /// Applies `on_left` to a `Left`, or runs `otherwise` for a `Right`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    pub fn if_left_else<U, F, G>(self, on_left: F, otherwise: G) -> Fallible<U>
    where
        F: FnOnce(L) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Left(value) => Ok(on_left(value)),
            Self::Right(_) => Ok(otherwise()),
            Self::None => Err(none_state("Either::if_left")),
        }
    }

    /// Applies `on_right` to a `Right`, or runs `otherwise` for a `Left`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    pub fn if_right_else<U, F, G>(self, on_right: F, otherwise: G) -> Fallible<U>
    where
        F: FnOnce(R) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Right(value) => Ok(on_right(value)),
            Self::Left(_) => Ok(otherwise()),
            Self::None => Err(none_state("Either::if_right")),
        }
    }

    /// Applies `on_left` to a `Left`, or returns `default` for any other state.
    pub fn if_left_or<U, F>(self, on_left: F, default: U) -> U
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(value) => on_left(value),
            _ => default,
        }
    }

    /// Applies `on_right` to a `Right`, or returns `default` for any other state.
    pub fn if_right_or<U, F>(self, on_right: F, default: U) -> U
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Right(value) => on_right(value),
            _ => default,
        }
    }

    // =========================================================================
    // On
    // =========================================================================

    /// Runs `action` on a `Left` payload and returns the `Either` unchanged.
    #[must_use]
    pub fn on_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on a `Right` payload and returns the `Either` unchanged.
    #[must_use]
    pub fn on_right<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on `None` and returns the `Either` unchanged.
    #[must_use]
    pub fn on_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    /// Runs the action of the active branch and returns the `Either`
    /// unchanged; `None` runs neither.
    #[must_use]
    pub fn on_right_or_left<FR, FL>(self, on_right: FR, on_left: FL) -> Self
    where
        FR: FnOnce(&R),
        FL: FnOnce(&L),
    {
        self.on_right(on_right).on_left(on_left)
    }

    // =========================================================================
    // Or
    // =========================================================================

    /// Returns the `Left` payload, or `default`.
    #[inline]
    pub fn left_or(self, default: L) -> L {
        self.left_or_else(|| default)
    }

    /// Returns the `Right` payload, or `default`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        self.right_or_else(|| default)
    }

    /// Returns the `Left` payload, or the result of `default`.
    pub fn left_or_else<F>(self, default: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Left(value) => value,
            _ => default(),
        }
    }

    /// Returns the `Right` payload, or the result of `default`.
    pub fn right_or_else<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Right(value) => value,
            _ => default(),
        }
    }

    /// Returns the `Left` payload, or the result of a factory that must not
    /// return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the factory ran and returned `None`.
    pub fn try_left_or_else<F>(self, default: F) -> Fallible<L>
    where
        F: FnOnce() -> Option<L>,
    {
        match self {
            Self::Left(value) => Ok(value),
            _ => require_result("Either::try_left_or_else", default()),
        }
    }

    /// Returns the `Right` payload, or the result of a factory that must not
    /// return null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if the factory ran and returned `None`.
    pub fn try_right_or_else<F>(self, default: F) -> Fallible<R>
    where
        F: FnOnce() -> Option<R>,
    {
        match self {
            Self::Right(value) => Ok(value),
            _ => require_result("Either::try_right_or_else", default()),
        }
    }

    // =========================================================================
    // Query adapters
    // =========================================================================

    /// Returns `true` if this is a `Right` whose payload satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => predicate(value),
            _ => false,
        }
    }

    /// Returns `true` unless this is a `Right` whose payload fails `predicate`.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => predicate(value),
            _ => true,
        }
    }

    /// Returns `true` if this is a `Right` equal to `expected` under `comparer`.
    pub fn contains_with<C>(&self, expected: &R, comparer: &C) -> bool
    where
        C: EqualityComparer<R> + ?Sized,
    {
        self.any(|value| comparer.equals(value, expected))
    }

    /// Alias of [`Either::map_right`].
    #[inline]
    pub fn select<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map_right(function)
    }

    /// Keeps a `Right` whose payload satisfies `predicate`; every other
    /// state, including a `Left`, becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Either;
    ///
    /// let even: Either<&str, i32> = Either::Right(4);
    /// assert_eq!(even.filter(|n| n % 2 == 0), Either::Right(4));
    /// assert_eq!(Either::<&str, i32>::Left("e").filter(|_| true), Either::None);
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::None
                }
            }
            _ => Self::None,
        }
    }

    /// Runs `action` on a `Right` payload.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = self {
            action(value);
        }
    }

    /// Alias of [`Either::fold_right`].
    #[inline]
    pub fn aggregate<S, F>(self, seed: S, function: F) -> S
    where
        F: FnOnce(S, R) -> S,
    {
        self.fold_right(seed, function)
    }
}

impl<L, R: PartialEq> Either<L, R> {
    /// Returns `true` if this is a `Right` equal to `expected`.
    pub fn contains(&self, expected: &R) -> bool {
        self.any(|value| value == expected)
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the `Left` payload, or `L::default()`.
    pub fn left_or_default(self) -> L {
        self.left_or_else(L::default)
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the `Right` payload, or `R::default()`.
    pub fn right_or_default(self) -> R {
        self.right_or_else(R::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_match_either_scenarios() {
        let left: Either<&str, usize> = Either::Left("err");
        assert_eq!(left.match_either(|right| right, str::len), Ok(3));

        let right: Either<&str, i32> = Either::Right(42);
        assert_eq!(right.match_either(|value| value, |_| -1), Ok(42));

        let none: Either<&str, i32> = Either::None;
        assert_eq!(none.match_with_none(|value| value, |_| -1, || -99), -99);
        assert!(none.match_either(|value| value, |_| -1).unwrap_err().is_invalid_operation());
    }

    #[rstest]
    fn test_try_match_checks_only_selected_handler() {
        let left: Either<&str, i32> = Either::Left("err");
        assert_eq!(left.try_match(|_| None, |value| Some(value.len())), Ok(3));
        assert!(left.try_match(|_| Some(1), |_| None::<usize>).unwrap_err().is_null_result());
    }

    #[rstest]
    fn test_match_nullable_propagates_null() {
        let left: Either<&str, i32> = Either::Left("err");
        assert_eq!(left.match_nullable(|_| Some(1), |_| None), Ok(None));
        assert_eq!(
            Either::<&str, i32>::None.match_nullable_with_none(|_| Some(1), |_| Some(2), || None),
            None
        );
    }

    #[rstest]
    fn test_map_right_on_left_never_invokes_handler() {
        let calls = Cell::new(0);
        let left: Either<&str, i32> = Either::Left("err");
        let mapped = left.try_map_right(|_| {
            calls.set(calls.get() + 1);
            None::<String>
        });
        assert_eq!(mapped, Ok(Either::Left("err")));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_try_bimap_rejects_null_from_active_handler() {
        let right: Either<&str, i32> = Either::Right(1);
        let error = right.try_bimap(|_| None::<i32>, |value| Some(value.len())).unwrap_err();
        assert!(error.is_null_result());
    }

    #[rstest]
    fn test_fold_returns_seed_for_inactive_branch() {
        let left: Either<&str, i32> = Either::Left("err");
        assert_eq!(left.fold_right(10, |seed, value| seed + value), 10);
        assert_eq!(left.try_fold_right(10, |_, _| None), Ok(10));
        assert_eq!(left.fold_left(10, |seed, value| seed + value.len()), 13);
        assert_eq!(left.bifold(0, |seed, value| seed + value, |seed, _| seed - 1), -1);
    }

    #[rstest]
    fn test_if_family() {
        let right: Either<&str, i32> = Either::Right(5);
        assert_eq!(right.if_left(|_| 0, 22), Ok(22));
        assert_eq!(right.if_right(|value| value * 2, 0), Ok(10));
        assert!(Either::<&str, i32>::None.if_right(|value| value, 0).is_err());
        assert_eq!(Either::<&str, i32>::None.if_right_or(|value| value, 7), 7);
    }

    #[rstest]
    fn test_on_family_runs_only_active_branch() {
        let seen = Cell::new(0);
        let left: Either<i32, i32> = Either::Left(3);
        let unchanged = left
            .on_right(|value| seen.set(*value))
            .on_right_or_left(|_| seen.set(-1), |value| seen.set(*value * 10))
            .on_none(|| seen.set(-2));
        assert_eq!(unchanged, Either::Left(3));
        assert_eq!(seen.get(), 30);
    }

    #[rstest]
    fn test_or_family() {
        let left: Either<&str, i32> = Either::Left("err");
        assert_eq!(left.right_or(9), 9);
        assert_eq!(left.left_or("other"), "err");
        assert_eq!(left.right_or_default(), 0);
        assert!(left.try_right_or_else(|| None).unwrap_err().is_null_result());
        assert_eq!(left.try_left_or_else(|| None), Ok("err"));
    }

    #[rstest]
    fn test_filter_clears_non_matching() {
        let right: Either<&str, i32> = Either::Right(3);
        assert_eq!(right.filter(|value| *value > 5), Either::None);
        assert_eq!(right.filter(|value| *value > 1), Either::Right(3));
    }

    #[rstest]
    fn test_query_adapters() {
        let right: Either<&str, i32> = Either::Right(3);
        let left: Either<&str, i32> = Either::Left("err");
        assert!(right.any(|value| *value == 3));
        assert!(!left.any(|_| true));
        assert!(left.all(|_| false));
        assert!(right.contains(&3));
        assert!(right.contains_with(&4, &|a: &i32, b: &i32| (a - b).abs() <= 1));
        assert_eq!(right.aggregate(1, |seed, value| seed * value), 3);
    }
}
