//! Combinators over `Optional<T>`.
//!
//! All combinators inspect the state once and either transform the payload
//! or propagate `None` untouched. A callback is invoked only when the value
//! it would receive is present.

use crate::comparer::EqualityComparer;
use crate::error::{Fallible, require_result};

use super::Optional;

impl<T> Optional<T> {
    // =========================================================================
    // Match
    // =========================================================================

    /// Eliminates the optional by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Optional;
    ///
    /// let described = Optional::some(3).match_with(|n| n * 2, || -1);
    /// assert_eq!(described, 6);
    /// assert_eq!(Optional::<i32>::none().match_with(|n| n * 2, || -1), -1);
    /// ```
    #[inline]
    pub fn match_with<U, F, G>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Map / Bind
    // =========================================================================

    /// Transforms the payload, keeping `None` as `None`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Transforms the payload with a callback whose result must not be null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`](crate::ContractError::NullResult)
    /// if `function` is invoked and returns `None`. An empty optional never
    /// invokes `function` and never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Optional;
    ///
    /// let result = Optional::some(1).try_map(|_| None::<String>);
    /// assert!(result.unwrap_err().is_null_result());
    ///
    /// let untouched = Optional::<i32>::none().try_map(|_| None::<String>);
    /// assert_eq!(untouched, Ok(Optional::none()));
    /// ```
    pub fn try_map<U, F>(self, function: F) -> Fallible<Optional<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => {
                require_result("Optional::try_map", function(value)).map(Optional::Some)
            }
            Self::None => Ok(Optional::None),
        }
    }

    /// Chains a computation returning another optional.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Folds the payload into `seed`; an empty optional returns `seed` untouched.
    #[inline]
    pub fn fold<S, F>(self, seed: S, function: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self {
            Self::Some(value) => function(seed, value),
            Self::None => seed,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the payload when present and returns the optional unchanged.
    #[inline]
    #[must_use]
    pub fn on_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` when empty and returns the optional unchanged.
    #[inline]
    #[must_use]
    pub fn on_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.has_no_value() {
            action();
        }
        self
    }

    // =========================================================================
    // Query Adapters
    // =========================================================================

    /// Alias of [`Optional::map`].
    #[inline]
    pub fn select<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(function)
    }

    /// Keeps the payload only if `predicate` holds; otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Optional;
    ///
    /// assert_eq!(Optional::some(4).filter(|n| n % 2 == 0), Optional::some(4));
    /// assert_eq!(Optional::some(3).filter(|n| n % 2 == 0), Optional::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if empty, or if the value satisfies `predicate`.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// Returns `true` if the payload equals `expected` under `comparer`.
    pub fn contains_with<C>(&self, expected: &T, comparer: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.any(|value| comparer.equals(value, expected))
    }

    /// Runs `action` on the payload when present.
    #[inline]
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Self::Some(value) = self {
            action(value);
        }
    }

    /// Alias of [`Optional::fold`].
    #[inline]
    pub fn aggregate<S, F>(self, seed: S, function: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        self.fold(seed, function)
    }
}

impl<T: PartialEq> Optional<T> {
    /// Returns `true` if the payload equals `expected`.
    #[inline]
    pub fn contains(&self, expected: &T) -> bool {
        self.any(|value| value == expected)
    }
}
