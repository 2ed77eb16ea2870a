//! `CustomOutcomeOf<T, E>` - the result of an operation producing a `T`
//! whose failures carry a typed error `E`.

use std::cmp::Ordering;
use std::fmt;

use crate::comparer::{DefaultOrder, EqualityComparer, OrderComparer};
use crate::error::Fallible;

use super::error_logic::not_failure;
use super::logic::{Diagnostic, Status, not_success};
use super::{CustomOutcome, ErrorLogic, Exception, OutcomeOf};

/// The outcome of an operation producing a `T`, whose failures carry an `E`.
///
/// # Examples
///
/// ```rust
/// use railway::CustomOutcomeOf;
///
/// let found: CustomOutcomeOf<&str, u16> = CustomOutcomeOf::ok("index.html");
/// assert_eq!(found.value(), Ok(&"index.html"));
///
/// let missing: CustomOutcomeOf<&str, u16> = CustomOutcomeOf::fail("not found", 404).unwrap();
/// assert_eq!(missing.error(), Ok(&404));
/// assert!(missing.value().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOutcomeOf<T, E> {
    logic: ErrorLogic<E>,
    value: Option<T>,
}

impl<T, E> CustomOutcomeOf<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success carrying `value`.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self {
            logic: ErrorLogic::ok(),
            value: Some(value),
        }
    }

    /// Creates a warning carrying `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn warn(value: T, message: impl Into<String>) -> Fallible<Self> {
        let logic = ErrorLogic::warn(message, None)?;
        Ok(Self::from_parts(logic, Some(value)))
    }

    /// Creates a warning carrying `value` and an exception.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn warn_with_exception(
        value: T,
        message: impl Into<String>,
        exception: Exception,
    ) -> Fallible<Self> {
        let logic = ErrorLogic::warn(message, Some(exception))?;
        Ok(Self::from_parts(logic, Some(value)))
    }

    /// Creates a failure carrying `error`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn fail(message: impl Into<String>, error: E) -> Fallible<Self> {
        ErrorLogic::fail(message, error, None).map(|logic| Self::from_parts(logic, None))
    }

    /// Creates a failure carrying `error` and an exception.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn fail_with_exception(
        message: impl Into<String>,
        error: E,
        exception: Exception,
    ) -> Fallible<Self> {
        ErrorLogic::fail(message, error, Some(exception)).map(|logic| Self::from_parts(logic, None))
    }

    /// Assembles an outcome; `value` is present exactly when `logic` is a
    /// success or warning.
    pub(crate) const fn from_parts(logic: ErrorLogic<E>, value: Option<T>) -> Self {
        Self { logic, value }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns the underlying logic.
    #[inline]
    pub const fn logic(&self) -> &ErrorLogic<E> {
        &self.logic
    }

    /// Returns the state.
    #[inline]
    pub const fn status(&self) -> Status {
        self.logic.status()
    }

    /// Returns `true` for success and warning.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.logic.is_success()
    }

    /// Returns `true` for a warning.
    #[inline]
    pub const fn is_warning(&self) -> bool {
        self.logic.is_warning()
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.logic.is_failure()
    }

    /// Returns `true` for a warning or a failure.
    #[inline]
    pub const fn is_convertible_to_failure(&self) -> bool {
        self.logic.is_convertible_to_failure()
    }

    /// Returns the message of a warning or failure.
    pub fn message(&self) -> Option<&str> {
        self.logic.message()
    }

    /// Returns the exception of a warning or failure, if any.
    pub fn exception(&self) -> Option<&Exception> {
        self.logic.exception()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the value of a success or warning.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a failure.
    pub fn value(&self) -> Fallible<&T> {
        self.value
            .as_ref()
            .ok_or_else(|| not_success("CustomOutcomeOf::value", self.status()))
    }

    /// Consumes the outcome and returns the value of a success or warning.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a failure.
    pub fn into_value(self) -> Fallible<T> {
        let status = self.status();
        self.value
            .ok_or_else(|| not_success("CustomOutcomeOf::into_value", status))
    }

    /// Returns the error of a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// for a success or a warning.
    pub fn error(&self) -> Fallible<&E> {
        self.logic
            .failure_details()
            .map(|(_, error)| error)
            .ok_or_else(|| not_failure("CustomOutcomeOf::error", self.status()))
    }

    /// Consumes the outcome and returns the error of a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// for a success or a warning.
    pub fn into_error(self) -> Fallible<E> {
        let status = self.status();
        self.logic
            .into_failure_details()
            .map(|(_, error)| error)
            .ok_or_else(|| not_failure("CustomOutcomeOf::into_error", status))
    }

    /// Returns the value, or `default` on failure.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the value, or the result of `default` on failure.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(default)
    }

    /// Splits the outcome into its logic and value.
    pub fn into_parts(self) -> (ErrorLogic<E>, Option<T>) {
        (self.logic, self.value)
    }

    // =========================================================================
    // Casts
    // =========================================================================

    /// Drops the value, keeping state and error.
    pub fn without_value(self) -> CustomOutcome<E> {
        CustomOutcome::from_logic(self.logic)
    }

    /// Drops the typed error, keeping state and value.
    pub fn without_error(self) -> OutcomeOf<T> {
        OutcomeOf::from_parts(self.logic.into_plain(), self.value)
    }

    /// Transforms the value of a success or warning; never runs for a failure.
    pub fn map<U, F>(self, function: F) -> CustomOutcomeOf<U, E>
    where
        F: FnOnce(T) -> U,
    {
        CustomOutcomeOf::from_parts(self.logic, self.value.map(function))
    }

    /// Replaces the value of a success or warning with `value`.
    pub fn cast_value<U>(self, value: U) -> CustomOutcomeOf<U, E> {
        self.map(|_| value)
    }

    /// Transforms the error of a failure; never runs otherwise.
    pub fn map_error<F, G>(self, function: G) -> CustomOutcomeOf<T, F>
    where
        G: FnOnce(E) -> F,
    {
        CustomOutcomeOf::from_parts(self.logic.map_error(function), self.value)
    }

    /// Chains a computation on the value of a success or warning. A warning
    /// is kept when the next step succeeds.
    pub fn bind<U, F>(self, function: F) -> CustomOutcomeOf<U, E>
    where
        F: FnOnce(T) -> CustomOutcomeOf<U, E>,
    {
        match self.value {
            Some(value) => {
                let (logic, value) = function(value).into_parts();
                CustomOutcomeOf::from_parts(self.logic.followed_by(logic), value)
            }
            None => CustomOutcomeOf::from_parts(self.logic, None),
        }
    }

    /// Converts a failure into a failed `CustomOutcomeOf<U, E>`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success, and [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// on a warning, which has no error to carry into the failure.
    pub fn to_failure<U>(self) -> Fallible<CustomOutcomeOf<U, E>> {
        let logic = self.logic.into_failure("CustomOutcomeOf::to_failure")?;
        Ok(CustomOutcomeOf::from_parts(logic, None))
    }

    /// Converts a failure into a failed `CustomOutcome<E>`.
    ///
    /// # Errors
    ///
    /// Same as [`CustomOutcomeOf::to_failure`].
    pub fn to_custom_failure(self) -> Fallible<CustomOutcome<E>> {
        self.logic
            .into_failure("CustomOutcomeOf::to_custom_failure")
            .map(CustomOutcome::from_logic)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Eliminates the outcome. A warning counts as a success.
    pub fn match_outcome<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Diagnostic, E) -> U,
    {
        match (self.value, self.logic.into_failure_details()) {
            (Some(value), _) => on_success(value),
            (None, Some((diagnostic, error))) => on_failure(diagnostic, error),
            (None, None) => unreachable!("a success always carries a value"),
        }
    }

    /// Applies `function` to the value of a success or warning, or returns
    /// `default` on failure.
    pub fn if_success<U, F>(self, function: F, default: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.value.map_or(default, function)
    }

    /// Runs `action` on the value of a success or warning and returns the
    /// outcome unchanged.
    #[must_use]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
        self
    }

    /// Runs `action` on failure and returns the outcome unchanged.
    #[must_use]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Diagnostic, &E),
    {
        if let Some((diagnostic, error)) = self.logic.failure_details() {
            action(diagnostic, error);
        }
        self
    }

    /// Runs one of two actions depending on the state and returns the
    /// outcome unchanged.
    #[must_use]
    pub fn on_success_or_failure<F, G>(self, on_success: F, on_failure: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&Diagnostic, &E),
    {
        self.on_success(on_success).on_failure(on_failure)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compares with custom value and error equalities.
    pub fn eq_with<C, D>(&self, other: &Self, value_comparer: &C, error_comparer: &D) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
        D: EqualityComparer<E> + ?Sized,
    {
        self.logic.eq_with(&other.logic, error_comparer)
            && match (&self.value, &other.value) {
                (Some(left), Some(right)) => value_comparer.equals(left, right),
                (None, None) => true,
                _ => false,
            }
    }

    /// Orders by state first, then by value under `comparer` when both carry one.
    pub fn compare_with<C>(&self, other: &Self, comparer: &C) -> Ordering
    where
        C: OrderComparer<T> + ?Sized,
    {
        self.logic
            .compare_to(&other.logic)
            .then_with(|| match (&self.value, &other.value) {
                (Some(left), Some(right)) => comparer.compare(left, right),
                _ => Ordering::Equal,
            })
    }
}

impl<T: PartialEq, E> CustomOutcomeOf<T, E> {
    /// Returns `true` if this is a plain success whose value equals `expected`.
    pub fn eq_value(&self, expected: &T) -> bool {
        self.status() == Status::Success && self.value.as_ref() == Some(expected)
    }
}

impl<T: Ord, E> CustomOutcomeOf<T, E> {
    /// Orders by state first, then by value when both carry one.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.compare_with(other, &DefaultOrder)
    }
}

impl<T: fmt::Display, E> fmt::Display for CustomOutcomeOf<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, self.logic.diagnostic()) {
            (Some(value), None) => write!(formatter, "Success({value})"),
            (Some(value), Some(diagnostic)) => write!(formatter, "Warning({value}; {diagnostic})"),
            (None, _) => fmt::Display::fmt(&self.logic, formatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_error_runs_only_for_failure() {
        let mut calls = 0;
        let success: CustomOutcomeOf<i32, i32> = CustomOutcomeOf::ok(1);
        let mapped = success.map_error(|error| {
            calls += 1;
            error.to_string()
        });
        assert_eq!(mapped.value(), Ok(&1));
        assert_eq!(calls, 0);

        let failure: CustomOutcomeOf<i32, i32> = CustomOutcomeOf::fail("broken", 4).unwrap();
        assert_eq!(failure.map_error(|error| error * 2).error(), Ok(&8));
    }

    #[rstest]
    fn test_without_error_keeps_value_and_message() {
        let warning: CustomOutcomeOf<i32, String> = CustomOutcomeOf::warn(3, "slow").unwrap();
        let plain = warning.without_error();
        assert!(plain.is_warning());
        assert_eq!(plain.value(), Ok(&3));
    }

    #[rstest]
    fn test_to_failure_keeps_error() {
        let failure: CustomOutcomeOf<i32, &str> = CustomOutcomeOf::fail("broken", "E1").unwrap();
        let converted: CustomOutcomeOf<String, &str> = failure.to_failure().unwrap();
        assert_eq!(converted.error(), Ok(&"E1"));
    }

    #[rstest]
    fn test_compare_to_breaks_ties_by_value() {
        let low: CustomOutcomeOf<i32, ()> = CustomOutcomeOf::ok(1);
        let high: CustomOutcomeOf<i32, ()> = CustomOutcomeOf::ok(2);
        assert_eq!(low.compare_to(&high), Ordering::Less);
    }
}
