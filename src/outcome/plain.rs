//! `Outcome` - the result of an operation with no return value.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Fallible;
use crate::unit::Unit;

use super::logic::{Diagnostic, ResultLogic, Status};
use super::{CustomOutcome, CustomOutcomeOf, ErrorLogic, Exception, OutcomeOf};

/// The outcome of an operation that returns nothing: success, warning or failure.
///
/// # Examples
///
/// ```rust
/// use railway::Outcome;
///
/// let saved = Outcome::ok();
/// assert!(saved.is_success());
///
/// let failed = Outcome::fail("connection refused").unwrap();
/// assert!(failed.is_failure());
/// assert_eq!(failed.message(), Some("connection refused"));
/// assert_eq!(failed.to_string(), "Failure(connection refused)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    logic: ResultLogic,
}

impl Outcome {
    /// The shared success outcome.
    pub const OK: Self = Self::ok();

    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn ok() -> Self {
        Self {
            logic: ResultLogic::ok(),
        }
    }

    /// Creates a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn warn(message: impl Into<String>) -> Fallible<Self> {
        ResultLogic::warn(message, None).map(Self::from_logic)
    }

    /// Creates a warning with an attached exception.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn warn_with_exception(message: impl Into<String>, exception: Exception) -> Fallible<Self> {
        ResultLogic::warn(message, Some(exception)).map(Self::from_logic)
    }

    /// Creates a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn fail(message: impl Into<String>) -> Fallible<Self> {
        ResultLogic::fail(message, None).map(Self::from_logic)
    }

    /// Creates a failure with an attached exception.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty.
    pub fn fail_with_exception(message: impl Into<String>, exception: Exception) -> Fallible<Self> {
        ResultLogic::fail(message, Some(exception)).map(Self::from_logic)
    }

    /// Wraps an existing logic.
    #[inline]
    pub const fn from_logic(logic: ResultLogic) -> Self {
        Self { logic }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns the underlying logic.
    #[inline]
    pub const fn logic(&self) -> &ResultLogic {
        &self.logic
    }

    /// Consumes the outcome and returns the underlying logic.
    #[inline]
    pub fn into_logic(self) -> ResultLogic {
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

    /// Orders by state: failure < warning < success.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.logic.compare_to(&other.logic)
    }

    // =========================================================================
    // Casts
    // =========================================================================

    /// Attaches a value, producing `OutcomeOf<T>` with the same state.
    ///
    /// A failure drops `value`.
    pub fn with_value<T>(self, value: T) -> OutcomeOf<T> {
        self.with_value_from(|| value)
    }

    /// Attaches a value produced by `value`, which runs only for a success
    /// or a warning.
    pub fn with_value_from<T, F>(self, value: F) -> OutcomeOf<T>
    where
        F: FnOnce() -> T,
    {
        let payload = self.logic.is_success().then(value);
        OutcomeOf::from_parts(self.logic, payload)
    }

    /// Attaches [`Unit`] as the value.
    pub fn with_unit(self) -> OutcomeOf<Unit> {
        self.with_value(Unit)
    }

    /// Attaches a typed error used only if this is a failure.
    pub fn with_error<E>(self, error: E) -> CustomOutcome<E> {
        self.with_error_from(|| error)
    }

    /// Attaches a typed error produced by `error`, which runs only for a failure.
    pub fn with_error_from<E, F>(self, error: F) -> CustomOutcome<E>
    where
        F: FnOnce() -> E,
    {
        CustomOutcome::from_logic(ErrorLogic::from_logic(self.logic, error))
    }

    /// Converts a warning or failure into a failed `OutcomeOf<T>` carrying the
    /// same message and exception.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success.
    pub fn to_failure<T>(self) -> Fallible<OutcomeOf<T>> {
        let diagnostic = self.logic.into_failure("Outcome::to_failure")?;
        Ok(OutcomeOf::from_parts(ResultLogic::failure(diagnostic), None))
    }

    /// Converts a warning or failure into a failed `CustomOutcome<E>`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success.
    pub fn to_custom_failure<E>(self, error: E) -> Fallible<CustomOutcome<E>> {
        let diagnostic = self.logic.into_failure("Outcome::to_custom_failure")?;
        Ok(CustomOutcome::from_logic(ErrorLogic::failure(diagnostic, error)))
    }

    /// Converts a warning or failure into a failed `CustomOutcomeOf<T, E>`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on a success.
    pub fn to_custom_failure_of<T, E>(self, error: E) -> Fallible<CustomOutcomeOf<T, E>> {
        let diagnostic = self.logic.into_failure("Outcome::to_custom_failure_of")?;
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
        F: FnOnce() -> U,
        G: FnOnce(Diagnostic) -> U,
    {
        let is_failure = self.is_failure();
        match self.logic.into_diagnostic() {
            Some(diagnostic) if is_failure => on_failure(diagnostic),
            _ => on_success(),
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
        F: FnOnce(),
        G: FnOnce(&Diagnostic),
    {
        self.on_success(on_success).on_failure(on_failure)
    }
}

impl From<ResultLogic> for Outcome {
    fn from(logic: ResultLogic) -> Self {
        Self::from_logic(logic)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.logic, formatter)
    }
}
