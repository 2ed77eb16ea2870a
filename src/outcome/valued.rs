//! `OutcomeOf<T>` - the result of an operation that produces a `T`.

use std::cmp::Ordering;
use std::fmt;

use crate::comparer::{EqualityComparer, OrderComparer};
use crate::error::Fallible;

use super::logic::{Diagnostic, ResultLogic, Status, not_success};
use super::{CustomOutcome, CustomOutcomeOf, ErrorLogic, Exception, Outcome};

/// The outcome of an operation producing a `T`.
///
/// A success or a warning carries a value; a failure carries none.
///
/// # Examples
///
/// ```rust
/// use railway::OutcomeOf;
///
/// let parsed = OutcomeOf::ok(42);
/// assert_eq!(parsed.value(), Ok(&42));
///
/// let cached = OutcomeOf::warn(41, "served from cache").unwrap();
/// assert!(cached.is_success());
/// assert_eq!(cached.value(), Ok(&41));
///
/// let missing: OutcomeOf<i32> = OutcomeOf::fail("not found").unwrap();
/// assert!(missing.value().unwrap_err().is_invalid_operation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeOf<T> {
    logic: ResultLogic,
    value: Option<T>,
}

impl<T> OutcomeOf<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success carrying `value`.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self {
            logic: ResultLogic::ok(),
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
        let logic = ResultLogic::warn(message, None)?;
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
        let logic = ResultLogic::warn(message, Some(exception))?;
        Ok(Self::from_parts(logic, Some(value)))
    }

    /// Creates a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn fail(message: impl Into<String>) -> Fallible<Self> {
        ResultLogic::fail(message, None).map(|logic| Self::from_parts(logic, None))
    }

    /// Creates a failure with an attached exception.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn fail_with_exception(message: impl Into<String>, exception: Exception) -> Fallible<Self> {
        ResultLogic::fail(message, Some(exception)).map(|logic| Self::from_parts(logic, None))
    }

    /// Assembles an outcome; `value` is present exactly when `logic` is a
    /// success or warning.
    pub(crate) const fn from_parts(logic: ResultLogic, value: Option<T>) -> Self {
        Self { logic, value }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns the underlying logic.
    #[inline]
    pub const fn logic(&self) -> &ResultLogic {
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
            .ok_or_else(|| not_success("OutcomeOf::value", self.status()))
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
            .ok_or_else(|| not_success("OutcomeOf::into_value", status))
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
    pub fn into_parts(self) -> (ResultLogic, Option<T>) {
        (self.logic, self.value)
    }

    // =========================================================================
    // Casts
    // =========================================================================

    /// Drops the value, keeping the state.
    pub fn without_value(self) -> Outcome {
        Outcome::from_logic(self.logic)
    }

    /// Transforms the value of a success or warning; never runs for a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::OutcomeOf;
    ///
    /// let length = OutcomeOf::ok("railway").map(str::len);
    /// assert_eq!(length.value(), Ok(&7));
    /// ```
    pub fn map<U, F>(self, function: F) -> OutcomeOf<U>
    where
        F: FnOnce(T) -> U,
    {
        OutcomeOf::from_parts(self.logic, self.value.map(function))
    }

    /// Replaces the value of a success or warning with `value`.
    pub fn cast_value<U>(self, value: U) -> OutcomeOf<U> {
        self.map(|_| value)
    }

    /// Chains a computation on the value of a success or warning.
    ///
    /// A warning is kept when the next step succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::OutcomeOf;
    ///
    /// let cached = OutcomeOf::warn(2, "stale cache").unwrap();
    /// let scaled = cached.bind(|value| OutcomeOf::ok(value * 10));
    /// assert!(scaled.is_warning());
    /// assert_eq!(scaled.message(), Some("stale cache"));
    /// assert_eq!(scaled.value(), Ok(&20));
    /// ```
    pub fn bind<U, F>(self, function: F) -> OutcomeOf<U>
    where
        F: FnOnce(T) -> OutcomeOf<U>,
    {
        match self.value {
            Some(value) => {
                let (logic, value) = function(value).into_parts();
                OutcomeOf::from_parts(self.logic.followed_by(logic), value)
            }
            None => OutcomeOf::from_parts(self.logic, None),
        }
    }

    /// Converts a warning or failure into a failed `OutcomeOf<U>`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success.
    pub fn to_failure<U>(self) -> Fallible<OutcomeOf<U>> {
        let diagnostic = self.logic.into_failure("OutcomeOf::to_failure")?;
        Ok(OutcomeOf::from_parts(ResultLogic::failure(diagnostic), None))
    }

    /// Attaches a typed error used only if this is a failure.
    pub fn with_error<E>(self, error: E) -> CustomOutcomeOf<T, E> {
        self.with_error_from(|| error)
    }

    /// Attaches a typed error produced by `error`, which runs only for a failure.
    pub fn with_error_from<E, F>(self, error: F) -> CustomOutcomeOf<T, E>
    where
        F: FnOnce() -> E,
    {
        CustomOutcomeOf::from_parts(ErrorLogic::from_logic(self.logic, error), self.value)
    }

    /// Converts a warning or failure into a failed `CustomOutcome<E>`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success.
    pub fn to_custom_failure<E>(self, error: E) -> Fallible<CustomOutcome<E>> {
        let diagnostic = self.logic.into_failure("OutcomeOf::to_custom_failure")?;
        Ok(CustomOutcome::from_logic(ErrorLogic::failure(diagnostic, error)))
    }

    /// Converts a warning or failure into a failed `CustomOutcomeOf<U, E>`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success.
    pub fn to_custom_failure_of<U, E>(self, error: E) -> Fallible<CustomOutcomeOf<U, E>> {
        let diagnostic = self.logic.into_failure("OutcomeOf::to_custom_failure_of")?;
        Ok(CustomOutcomeOf::from_parts(
            ErrorLogic::failure(diagnostic, error),
            None,
        ))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Eliminates the outcome. A warning counts as a success.
    pub fn match_outcome<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Diagnostic) -> U,
    {
        match (self.value, self.logic.into_diagnostic()) {
            (Some(value), _) => on_success(value),
            (None, Some(diagnostic)) => on_failure(diagnostic),
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
        F: FnOnce(&Diagnostic),
    {
        if let Some(diagnostic) = self.logic.diagnostic().filter(|_| self.is_failure()) {
            action(diagnostic);
        }
        self
    }

    /// Runs one of two actions depending on the state and returns the
    /// outcome unchanged.
    #[must_use]
    pub fn on_success_or_failure<F, G>(self, on_success: F, on_failure: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&Diagnostic),
    {
        self.on_success(on_success).on_failure(on_failure)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compares with a custom value equality; the logic must also be equal.
    pub fn eq_with<C>(&self, other: &Self, comparer: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.logic == other.logic
            && match (&self.value, &other.value) {
                (Some(left), Some(right)) => comparer.equals(left, right),
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

impl<T: PartialEq> OutcomeOf<T> {
    /// Returns `true` if this is a plain success whose value equals `expected`.
    ///
    /// A warning or failure never equals a raw value.
    pub fn eq_value(&self, expected: &T) -> bool {
        self.status() == Status::Success && self.value.as_ref() == Some(expected)
    }
}

impl<T: Ord> OutcomeOf<T> {
    /// Orders by state first, then by value when both carry one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use railway::OutcomeOf;
    ///
    /// let failure: OutcomeOf<i32> = OutcomeOf::fail("broken").unwrap();
    /// assert_eq!(failure.compare_to(&OutcomeOf::ok(0)), Ordering::Less);
    /// assert_eq!(OutcomeOf::ok(2).compare_to(&OutcomeOf::ok(1)), Ordering::Greater);
    /// ```
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.compare_with(other, &crate::comparer::DefaultOrder)
    }
}

impl<T: fmt::Display> fmt::Display for OutcomeOf<T> {
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
    fn test_map_skips_failure() {
        let mut calls = 0;
        let failure: OutcomeOf<i32> = OutcomeOf::fail("broken").unwrap();
        let mapped = failure.map(|value| {
            calls += 1;
            value + 1
        });
        assert!(mapped.is_failure());
        assert_eq!(mapped.message(), Some("broken"));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_map_keeps_warning() {
        let warning = OutcomeOf::warn(1, "slow").unwrap().map(|value| value * 10);
        assert!(warning.is_warning());
        assert_eq!(warning.value(), Ok(&10));
    }

    #[rstest]
    fn test_bind_keeps_warning_when_next_step_succeeds() {
        let bound = OutcomeOf::warn(2, "stale").unwrap().bind(OutcomeOf::ok);
        assert!(bound.is_warning());
        assert_eq!(bound.message(), Some("stale"));
        assert_eq!(bound.value(), Ok(&2));
    }

    #[rstest]
    fn test_bind_prefers_next_warning() {
        let bound = OutcomeOf::warn(2, "stale")
            .unwrap()
            .bind(|value| OutcomeOf::warn(value, "slow").unwrap());
        assert_eq!(bound.message(), Some("slow"));
    }

    #[rstest]
    fn test_eq_value_requires_plain_success() {
        assert!(OutcomeOf::ok(5).eq_value(&5));
        assert!(!OutcomeOf::warn(5, "slow").unwrap().eq_value(&5));
        assert!(!OutcomeOf::<i32>::fail("broken").unwrap().eq_value(&5));
    }

    #[rstest]
    fn test_with_error_from_runs_only_for_failure() {
        let mut calls = 0;
        let custom: CustomOutcomeOf<i32, &str> = OutcomeOf::ok(1).with_error_from(|| {
            calls += 1;
            "unused"
        });
        assert_eq!(custom.value(), Ok(&1));
        assert_eq!(calls, 0);

        let failure: OutcomeOf<i32> = OutcomeOf::fail("broken").unwrap();
        let custom = failure.with_error("E1");
        assert_eq!(custom.error(), Ok(&"E1"));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(OutcomeOf::ok(1).to_string(), "Success(1)");
        assert_eq!(
            OutcomeOf::warn(1, "slow").unwrap().to_string(),
            "Warning(1; slow)"
        );
        assert_eq!(
            OutcomeOf::<i32>::fail("broken").unwrap().to_string(),
            "Failure(broken)"
        );
    }
}
