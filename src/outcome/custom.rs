//! `CustomOutcome<E>` - the result of an operation with no return value
//! whose failures carry a typed error.

use std::cmp::Ordering;
use std::fmt;

use crate::comparer::EqualityComparer;
use crate::error::Fallible;

use super::error_logic::not_failure;
use super::logic::{Diagnostic, Status};
use super::{CustomOutcomeOf, ErrorLogic, Exception, Outcome};

/// The outcome of an operation returning nothing, whose failures carry an `E`.
///
/// # Examples
///
/// ```rust
/// use railway::CustomOutcome;
///
/// #[derive(Debug, PartialEq)]
/// enum StoreError { Full }
///
/// let stored: CustomOutcome<StoreError> = CustomOutcome::ok();
/// assert!(stored.error().is_err());
///
/// let rejected = CustomOutcome::fail("store is full", StoreError::Full).unwrap();
/// assert_eq!(rejected.error(), Ok(&StoreError::Full));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOutcome<E> {
    logic: ErrorLogic<E>,
}

impl<E> CustomOutcome<E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn ok() -> Self {
        Self {
            logic: ErrorLogic::ok(),
        }
    }

    /// Creates a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn warn(message: impl Into<String>) -> Fallible<Self> {
        ErrorLogic::warn(message, None).map(Self::from_logic)
    }

    /// Creates a warning with an attached exception.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn warn_with_exception(message: impl Into<String>, exception: Exception) -> Fallible<Self> {
        ErrorLogic::warn(message, Some(exception)).map(Self::from_logic)
    }

    /// Creates a failure carrying `error`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn fail(message: impl Into<String>, error: E) -> Fallible<Self> {
        ErrorLogic::fail(message, error, None).map(Self::from_logic)
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
        ErrorLogic::fail(message, error, Some(exception)).map(Self::from_logic)
    }

    /// Wraps an existing logic.
    #[inline]
    pub const fn from_logic(logic: ErrorLogic<E>) -> Self {
        Self { logic }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns the underlying logic.
    #[inline]
    pub const fn logic(&self) -> &ErrorLogic<E> {
        &self.logic
    }

    /// Consumes the outcome and returns the underlying logic.
    #[inline]
    pub fn into_logic(self) -> ErrorLogic<E> {
        self.logic
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
            .ok_or_else(|| not_failure("CustomOutcome::error", self.status()))
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
            .ok_or_else(|| not_failure("CustomOutcome::into_error", status))
    }

    // =========================================================================
    // Casts
    // =========================================================================

    /// Drops the typed error, keeping state, message and exception.
    pub fn without_error(self) -> Outcome {
        Outcome::from_logic(self.logic.into_plain())
    }

    /// Attaches a value, producing `CustomOutcomeOf<T, E>` with the same state.
    pub fn with_value<T>(self, value: T) -> CustomOutcomeOf<T, E> {
        self.with_value_from(|| value)
    }

    /// Attaches a value produced by `value`, which runs only for a success
    /// or a warning.
    pub fn with_value_from<T, F>(self, value: F) -> CustomOutcomeOf<T, E>
    where
        F: FnOnce() -> T,
    {
        let payload = self.logic.is_success().then(value);
        CustomOutcomeOf::from_parts(self.logic, payload)
    }

    /// Converts a failure into a failed `CustomOutcomeOf<T, E>`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success, and [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// on a warning, which has no error to carry into the failure.
    pub fn to_failure_of<T>(self) -> Fallible<CustomOutcomeOf<T, E>> {
        let logic = self.logic.into_failure("CustomOutcome::to_failure_of")?;
        Ok(CustomOutcomeOf::from_parts(logic, None))
    }

    /// Transforms the error of a failure; never runs otherwise.
    pub fn map_error<F, G>(self, function: G) -> CustomOutcome<F>
    where
        G: FnOnce(E) -> F,
    {
        CustomOutcome::from_logic(self.logic.map_error(function))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Eliminates the outcome. A warning counts as a success.
    pub fn match_outcome<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce() -> U,
        G: FnOnce(Diagnostic, E) -> U,
    {
        match self.logic.into_failure_details() {
            Some((diagnostic, error)) => on_failure(diagnostic, error),
            None => on_success(),
        }
    }

    /// Runs `next` after a success or warning; a failure passes through.
    /// A warning is kept when `next` succeeds.
    pub fn bind<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_success() {
            Self::from_logic(self.logic.followed_by(next().logic))
        } else {
            self
        }
    }

    /// Runs `action` on success or warning and returns the outcome unchanged.
    #[must_use]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_success() {
            action();
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
        F: FnOnce(),
        G: FnOnce(&Diagnostic, &E),
    {
        self.on_success(on_success).on_failure(on_failure)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compares with a custom error equality.
    pub fn eq_with<C>(&self, other: &Self, comparer: &C) -> bool
    where
        C: EqualityComparer<E> + ?Sized,
    {
        self.logic.eq_with(&other.logic, comparer)
    }

    /// Orders by state: failure < warning < success.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.logic.compare_to(&other.logic)
    }
}

impl<E> Default for CustomOutcome<E> {
    fn default() -> Self {
        Self::ok()
    }
}

impl<E> From<ErrorLogic<E>> for CustomOutcome<E> {
    fn from(logic: ErrorLogic<E>) -> Self {
        Self::from_logic(logic)
    }
}

impl<E> fmt::Display for CustomOutcome<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.logic, formatter)
    }
}
