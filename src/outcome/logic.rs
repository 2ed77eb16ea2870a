//! The tri-state engine shared by every outcome flavor.
//!
//! [`ResultLogic`] holds exactly one of three states:
//!
//! - **success**: the operation produced its value, no message;
//! - **warning**: the operation succeeded but carries a non-fatal diagnostic;
//! - **failure**: the operation produced no usable value.
//!
//! A warning is a flavor of success (`is_success()` holds for it), so the
//! invariant `is_success() == !is_failure()` is true for every value.
//! Warnings and failures always carry a non-empty message, checked when the
//! logic is constructed.
//!
//! # Ordering
//!
//! "More problematic" sorts first: failure < warning < success. The logic
//! applies no further tie-break; payload-carrying outcomes layer their own
//! payload comparison on top when the logic compares equal.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{ContractError, Fallible};

use super::Exception;

/// The state of an outcome, in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The operation produced no usable value.
    Failure,
    /// The operation succeeded with a caveat.
    Warning,
    /// The operation succeeded.
    Success,
}

impl fmt::Display for Status {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Failure => "Failure",
            Self::Warning => "Warning",
            Self::Success => "Success",
        })
    }
}

/// The message and optional exception of a warning or failure.
///
/// # Examples
///
/// ```rust
/// use railway::Diagnostic;
///
/// let diagnostic = Diagnostic::new("timed out", None).unwrap();
/// assert_eq!(diagnostic.message(), "timed out");
/// assert!(Diagnostic::new("", None).unwrap_err().is_argument_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    exception: Option<Exception>,
}

impl Diagnostic {
    /// Creates a diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `message` is empty.
    pub fn new(message: impl Into<String>, exception: Option<Exception>) -> Fallible<Self> {
        let message = message.into();
        if message.is_empty() {
            return Err(ContractError::argument_null("message"));
        }
        Ok(Self { message, exception })
    }

    /// Creates a diagnostic from a message the crate itself composed.
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "internal diagnostics carry a message");
        Self {
            message,
            exception: None,
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached exception, if any.
    pub const fn exception(&self) -> Option<&Exception> {
        self.exception.as_ref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LogicState {
    Success,
    Warning(Diagnostic),
    Failure(Diagnostic),
}

/// The success/warning/failure state of an outcome without a typed error.
///
/// # Examples
///
/// ```rust
/// use railway::ResultLogic;
///
/// let warning = ResultLogic::warn("low disk space", None).unwrap();
/// assert!(warning.is_success());
/// assert!(warning.is_warning());
/// assert_eq!(warning.to_string(), "Warning(low disk space)");
///
/// let failure = ResultLogic::fail("disk full", None).unwrap();
/// assert!(failure < warning);
/// assert!(warning < ResultLogic::ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLogic {
    state: LogicState,
}

impl ResultLogic {
    /// The shared success logic.
    pub const OK: Self = Self::ok();

    /// Creates a success.
    #[inline]
    pub const fn ok() -> Self {
        Self {
            state: LogicState::Success,
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

    /// Creates a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `message` is empty.
    pub fn fail(message: impl Into<String>, exception: Option<Exception>) -> Fallible<Self> {
        Diagnostic::new(message, exception).map(Self::failure)
    }

    /// Creates a warning from an already validated diagnostic.
    #[inline]
    pub const fn warning(diagnostic: Diagnostic) -> Self {
        Self {
            state: LogicState::Warning(diagnostic),
        }
    }

    /// Creates a failure from an already validated diagnostic.
    #[inline]
    pub const fn failure(diagnostic: Diagnostic) -> Self {
        Self {
            state: LogicState::Failure(diagnostic),
        }
    }

    /// Returns the state.
    #[inline]
    pub const fn status(&self) -> Status {
        match self.state {
            LogicState::Success => Status::Success,
            LogicState::Warning(_) => Status::Warning,
            LogicState::Failure(_) => Status::Failure,
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
        matches!(self.state, LogicState::Warning(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, LogicState::Failure(_))
    }

    /// Returns `true` if the logic may be demoted to a plain failure, i.e.
    /// it is a warning or a failure.
    #[inline]
    pub const fn is_convertible_to_failure(&self) -> bool {
        !matches!(self.state, LogicState::Success)
    }

    /// Returns the diagnostic of a warning or failure.
    #[inline]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.state {
            LogicState::Success => None,
            LogicState::Warning(diagnostic) | LogicState::Failure(diagnostic) => Some(diagnostic),
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

    /// Consumes the logic and returns the diagnostic of a warning or failure.
    pub fn into_diagnostic(self) -> Option<Diagnostic> {
        match self.state {
            LogicState::Success => None,
            LogicState::Warning(diagnostic) | LogicState::Failure(diagnostic) => Some(diagnostic),
        }
    }

    /// Combines this logic with the logic of the step chained after it.
    ///
    /// A warning survives a successful next step; any warning or failure of
    /// the next step wins.
    pub(crate) fn followed_by(self, next: Self) -> Self {
        match (self.state, next.state) {
            (LogicState::Warning(diagnostic), LogicState::Success) => Self::warning(diagnostic),
            (_, state) => Self { state },
        }
    }

    /// Demotes a warning or failure to a failure with the same diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] on a success, which has
    /// nothing to demote.
    pub fn into_failure(self, operation: &'static str) -> Fallible<Diagnostic> {
        self.into_diagnostic().ok_or_else(|| {
            ContractError::invalid_operation(
                operation,
                "a successful result cannot be converted to a failure",
            )
        })
    }

    /// Orders by state only: failure < warning < success.
    #[inline]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.status().cmp(&other.status())
    }
}

impl Default for ResultLogic {
    fn default() -> Self {
        Self::ok()
    }
}

impl PartialOrd for ResultLogic {
    /// Returns `Some` only when the ordering agrees with equality: two
    /// distinct warnings or failures are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare_to(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for ResultLogic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            LogicState::Success => formatter.write_str("Success"),
            LogicState::Warning(diagnostic) => write!(formatter, "Warning({diagnostic})"),
            LogicState::Failure(diagnostic) => write!(formatter, "Failure({diagnostic})"),
        }
    }
}

pub(crate) fn not_success(operation: &'static str, status: Status) -> ContractError {
    ContractError::invalid_operation(operation, format!("the result is a {status}, not a success"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_ok_is_success_only() {
        let logic = ResultLogic::ok();
        assert!(logic.is_success());
        assert!(!logic.is_warning());
        assert!(!logic.is_failure());
        assert_eq!(logic.message(), None);
        assert_eq!(logic, ResultLogic::OK);
    }

    #[rstest]
    fn test_warning_is_success() {
        let logic = ResultLogic::warn("careful", None).unwrap();
        assert!(logic.is_success());
        assert!(logic.is_warning());
        assert!(!logic.is_failure());
        assert_eq!(logic.message(), Some("careful"));
    }

    #[rstest]
    #[case("")]
    fn test_empty_message_is_rejected(#[case] message: &str) {
        assert!(ResultLogic::warn(message, None).unwrap_err().is_argument_null());
        assert!(ResultLogic::fail(message, None).unwrap_err().is_argument_null());
    }

    #[rstest]
    fn test_into_failure_on_success_is_invalid_operation() {
        let error = ResultLogic::ok().into_failure("test").unwrap_err();
        assert!(error.is_invalid_operation());
    }

    #[rstest]
    fn test_compare_ignores_message() {
        let first = ResultLogic::fail("a", None).unwrap();
        let second = ResultLogic::fail("b", None).unwrap();
        assert_eq!(first.compare_to(&second), Ordering::Equal);
        assert_eq!(first.partial_cmp(&second), None);
    }

    #[rstest]
    fn test_equality_uses_exception_identity() {
        let exception = Exception::from_message("boom");
        let first = ResultLogic::fail("a", Some(exception.clone())).unwrap();
        let same = ResultLogic::fail("a", Some(exception)).unwrap();
        let other = ResultLogic::fail("a", Some(Exception::from_message("boom"))).unwrap();
        assert_eq!(first, same);
        assert_ne!(first, other);
    }

    #[rstest]
    #[case::success_then_success(ResultLogic::ok(), ResultLogic::ok(), Status::Success, None)]
    #[case::warning_then_success(
        ResultLogic::warn("stale", None).unwrap(),
        ResultLogic::ok(),
        Status::Warning,
        Some("stale")
    )]
    #[case::warning_then_warning(
        ResultLogic::warn("stale", None).unwrap(),
        ResultLogic::warn("slow", None).unwrap(),
        Status::Warning,
        Some("slow")
    )]
    #[case::warning_then_failure(
        ResultLogic::warn("stale", None).unwrap(),
        ResultLogic::fail("broken", None).unwrap(),
        Status::Failure,
        Some("broken")
    )]
    fn test_followed_by_keeps_warning_over_success(
        #[case] first: ResultLogic,
        #[case] next: ResultLogic,
        #[case] status: Status,
        #[case] message: Option<&str>,
    ) {
        let combined = first.followed_by(next);
        assert_eq!(combined.status(), status);
        assert_eq!(combined.message(), message);
    }
}
