//! The tri-state engine of outcomes that carry a typed error.
//!
//! [`ErrorLogic<E>`] follows the same success/warning/failure rules as
//! [`ResultLogic`], and additionally requires a concrete error object for
//! every failure. The error is only reachable in the failure state.

use std::cmp::Ordering;
use std::fmt;

use crate::comparer::{DefaultEquality, EqualityComparer};
use crate::error::{ContractError, Fallible};

use super::logic::{Diagnostic, ResultLogic, Status};
use super::Exception;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorLogicState<E> {
    Success,
    Warning(Diagnostic),
    Failure(Diagnostic, E),
}

/// The success/warning/failure state of an outcome with a typed error `E`.
///
/// # Examples
///
/// ```rust
/// use railway::ErrorLogic;
///
/// let failure = ErrorLogic::fail("not found", 404, None).unwrap();
/// assert_eq!(failure.error(), Ok(&404));
///
/// let warning: ErrorLogic<i32> = ErrorLogic::warn("slow", None).unwrap();
/// assert!(warning.error().unwrap_err().is_invalid_operation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLogic<E> {
    state: ErrorLogicState<E>,
}

impl<E> ErrorLogic<E> {
    /// Creates a success.
    #[inline]
    pub const fn ok() -> Self {
        Self {
            state: ErrorLogicState::Success,
        }
    }

    /// Creates a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `message` is empty.
    pub fn warn(message: impl Into<String>, exception: Option<Exception>) -> Fallible<Self> {
        Diagnostic::new(message, exception).map(Self::warning)
    }

    /// Creates a failure carrying `error`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `message` is empty.
    pub fn fail(
        message: impl Into<String>,
        error: E,
        exception: Option<Exception>,
    ) -> Fallible<Self> {
        Diagnostic::new(message, exception).map(|diagnostic| Self::failure(diagnostic, error))
    }

    /// Creates a failure from a nullable error, which must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `message` is empty or
    /// `error` is `None`.
    pub fn try_fail(
        message: impl Into<String>,
        error: Option<E>,
        exception: Option<Exception>,
    ) -> Fallible<Self> {
        let diagnostic = Diagnostic::new(message, exception)?;
        let error = error.ok_or_else(|| ContractError::argument_null("error"))?;
        Ok(Self::failure(diagnostic, error))
    }

    /// Creates a warning from an already validated diagnostic.
    #[inline]
    pub const fn warning(diagnostic: Diagnostic) -> Self {
        Self {
            state: ErrorLogicState::Warning(diagnostic),
        }
    }

    /// Creates a failure from an already validated diagnostic.
    #[inline]
    pub const fn failure(diagnostic: Diagnostic, error: E) -> Self {
        Self {
            state: ErrorLogicState::Failure(diagnostic, error),
        }
    }

    /// Lifts a plain logic, attaching the error produced by `error` to a
    /// failure. `error` runs only for a failure.
    pub fn from_logic<F>(logic: ResultLogic, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        let status = logic.status();
        match logic.into_diagnostic() {
            None => Self::ok(),
            Some(diagnostic) if status == Status::Warning => Self::warning(diagnostic),
            Some(diagnostic) => Self::failure(diagnostic, error()),
        }
    }

    /// Returns the state.
    #[inline]
    pub const fn status(&self) -> Status {
        match self.state {
            ErrorLogicState::Success => Status::Success,
            ErrorLogicState::Warning(_) => Status::Warning,
            ErrorLogicState::Failure(..) => Status::Failure,
        }
    }

    /// Returns `true` for success and warning.
    #[inline]
    pub const fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// Returns `true` for a warning.
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self.state, ErrorLogicState::Warning(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, ErrorLogicState::Failure(..))
    }

    /// Returns `true` for a warning or a failure.
    #[inline]
    pub const fn is_convertible_to_failure(&self) -> bool {
        !matches!(self.state, ErrorLogicState::Success)
    }

    /// Returns the diagnostic of a warning or failure.
    #[inline]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.state {
            ErrorLogicState::Success => None,
            ErrorLogicState::Warning(diagnostic) | ErrorLogicState::Failure(diagnostic, _) => {
                Some(diagnostic)
            }
        }
    }

    /// Returns the message of a warning or failure.
    pub fn message(&self) -> Option<&str> {
        self.diagnostic().map(Diagnostic::message)
    }

    /// Returns the exception of a warning or failure, if one was attached.
    pub fn exception(&self) -> Option<&Exception> {
        self.diagnostic().and_then(Diagnostic::exception)
    }

    /// Returns the error of a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] for a success or a warning.
    pub fn error(&self) -> Fallible<&E> {
        self.failure_details()
            .map(|(_, error)| error)
            .ok_or_else(|| not_failure("ErrorLogic::error", self.status()))
    }

    /// Consumes the logic and returns the error of a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] for a success or a warning.
    pub fn into_error(self) -> Fallible<E> {
        let status = self.status();
        self.into_failure_details()
            .map(|(_, error)| error)
            .ok_or_else(|| not_failure("ErrorLogic::into_error", status))
    }

    /// Returns the diagnostic and error of a failure.
    pub const fn failure_details(&self) -> Option<(&Diagnostic, &E)> {
        match &self.state {
            ErrorLogicState::Failure(diagnostic, error) => Some((diagnostic, error)),
            _ => None,
        }
    }

    /// Consumes the logic and returns the diagnostic and error of a failure.
    pub fn into_failure_details(self) -> Option<(Diagnostic, E)> {
        match self.state {
            ErrorLogicState::Failure(diagnostic, error) => Some((diagnostic, error)),
            _ => None,
        }
    }

    /// Drops the typed error, keeping state, message and exception.
    pub fn to_plain(&self) -> ResultLogic {
        match &self.state {
            ErrorLogicState::Success => ResultLogic::ok(),
            ErrorLogicState::Warning(diagnostic) => ResultLogic::warning(diagnostic.clone()),
            ErrorLogicState::Failure(diagnostic, _) => ResultLogic::failure(diagnostic.clone()),
        }
    }

    /// Consuming form of [`ErrorLogic::to_plain`].
    pub fn into_plain(self) -> ResultLogic {
        match self.state {
            ErrorLogicState::Success => ResultLogic::ok(),
            ErrorLogicState::Warning(diagnostic) => ResultLogic::warning(diagnostic),
            ErrorLogicState::Failure(diagnostic, _) => ResultLogic::failure(diagnostic),
        }
    }

    /// Splits a warning or failure into its diagnostic and, for a failure,
    /// its error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] on a success.
    pub fn into_failure_parts(self, operation: &'static str) -> Fallible<(Diagnostic, Option<E>)> {
        match self.state {
            ErrorLogicState::Success => Err(ContractError::invalid_operation(
                operation,
                "a successful result cannot be converted to a failure",
            )),
            ErrorLogicState::Warning(diagnostic) => Ok((diagnostic, None)),
            ErrorLogicState::Failure(diagnostic, error) => Ok((diagnostic, Some(error))),
        }
    }

    /// Demotes a warning or failure to a failure. A warning has no error of
    /// its own, so the failure factory rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] on a success and
    /// [`ContractError::ArgumentNull`] on a warning.
    pub fn into_failure(self, operation: &'static str) -> Fallible<Self> {
        let (diagnostic, error) = self.into_failure_parts(operation)?;
        let error = error.ok_or_else(|| ContractError::argument_null("error"))?;
        Ok(Self::failure(diagnostic, error))
    }

    /// Combines this logic with the logic of the step chained after it.
    ///
    /// A warning survives a successful next step; any warning or failure of
    /// the next step wins.
    pub(crate) fn followed_by(self, next: Self) -> Self {
        match (self.state, next.state) {
            (ErrorLogicState::Warning(diagnostic), ErrorLogicState::Success) => {
                Self::warning(diagnostic)
            }
            (_, state) => Self { state },
        }
    }

    /// Transforms the error of a failure. `function` runs only for a failure.
    pub fn map_error<F, G>(self, function: G) -> ErrorLogic<F>
    where
        G: FnOnce(E) -> F,
    {
        let state = match self.state {
            ErrorLogicState::Success => ErrorLogicState::Success,
            ErrorLogicState::Warning(diagnostic) => ErrorLogicState::Warning(diagnostic),
            ErrorLogicState::Failure(diagnostic, error) => {
                ErrorLogicState::Failure(diagnostic, function(error))
            }
        };
        ErrorLogic { state }
    }

    /// Compares two logics with a custom error equality.
    ///
    /// State, message, exception identity and error must all match.
    pub fn eq_with<C>(&self, other: &Self, comparer: &C) -> bool
    where
        C: EqualityComparer<E> + ?Sized,
    {
        match (&self.state, &other.state) {
            (ErrorLogicState::Success, ErrorLogicState::Success) => true,
            (ErrorLogicState::Warning(left), ErrorLogicState::Warning(right)) => left == right,
            (
                ErrorLogicState::Failure(left, left_error),
                ErrorLogicState::Failure(right, right_error),
            ) => left == right && comparer.equals(left_error, right_error),
            _ => false,
        }
    }

    /// Orders by state only: failure < warning < success.
    #[inline]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.status().cmp(&other.status())
    }
}

impl<E: PartialEq> ErrorLogic<E> {
    /// Returns `true` if both logics are equal under `PartialEq` for `E`.
    pub fn eq_default(&self, other: &Self) -> bool {
        self.eq_with(other, &DefaultEquality)
    }
}

impl<E> Default for ErrorLogic<E> {
    fn default() -> Self {
        Self::ok()
    }
}

impl<E> fmt::Display for ErrorLogic<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ErrorLogicState::Success => formatter.write_str("Success"),
            ErrorLogicState::Warning(diagnostic) => write!(formatter, "Warning({diagnostic})"),
            ErrorLogicState::Failure(diagnostic, _) => write!(formatter, "Failure({diagnostic})"),
        }
    }
}

pub(crate) fn not_failure(operation: &'static str, status: Status) -> ContractError {
    ContractError::invalid_operation(operation, format!("the result is a {status}, not a failure"))
}
