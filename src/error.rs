//! Contract violation errors.
//!
//! The warning/failure/`None` states of the wrappers in this crate are
//! ordinary values, never errors. [`ContractError`] is reserved for genuine
//! programmer mistakes: a required argument was missing, a wrapper was used
//! in a state that does not support the operation, or a callback broke its
//! non-null contract.
//!
//! Every fallible operation returns [`Fallible`], so violations are reported
//! synchronously to the immediate caller and never recovered internally.

use std::fmt;

/// The result type of operations that can violate a caller contract.
pub type Fallible<T> = Result<T, ContractError>;

/// The kinds of contract violation raised by this crate.
///
/// # Examples
///
/// ```rust
/// use railway::ContractError;
///
/// let error = ContractError::argument_null("message");
/// assert_eq!(format!("{error}"), "argument `message` must not be null or empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A required argument was null (or, for messages, empty).
    ArgumentNull {
        /// The name of the offending parameter.
        parameter: &'static str,
    },
    /// An accessor or combinator was invoked in a state that does not support it.
    InvalidOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// A description of why the state does not allow it.
        reason: String,
    },
    /// A callback that must produce a non-null result returned null.
    NullResult {
        /// The combinator whose callback returned null.
        operation: &'static str,
    },
    /// A comparison was attempted against a value of an incompatible type.
    ArgumentType {
        /// The type the operation expected.
        expected: &'static str,
    },
}

impl ContractError {
    /// Creates an [`ContractError::ArgumentNull`] for `parameter`.
    #[must_use]
    pub fn argument_null(parameter: &'static str) -> Self {
        trace_violation(Self::ArgumentNull { parameter })
    }

    /// Creates an [`ContractError::InvalidOperation`].
    #[must_use]
    pub fn invalid_operation(operation: &'static str, reason: impl Into<String>) -> Self {
        trace_violation(Self::InvalidOperation {
            operation,
            reason: reason.into(),
        })
    }

    /// Creates a [`ContractError::NullResult`] for the callback of `operation`.
    #[must_use]
    pub fn null_result(operation: &'static str) -> Self {
        trace_violation(Self::NullResult { operation })
    }

    /// Creates an [`ContractError::ArgumentType`] naming the expected type.
    #[must_use]
    pub fn argument_type(expected: &'static str) -> Self {
        trace_violation(Self::ArgumentType { expected })
    }

    /// Returns `true` for [`ContractError::ArgumentNull`].
    #[must_use]
    pub const fn is_argument_null(&self) -> bool {
        matches!(self, Self::ArgumentNull { .. })
    }

    /// Returns `true` for [`ContractError::InvalidOperation`].
    #[must_use]
    pub const fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }

    /// Returns `true` for [`ContractError::NullResult`].
    #[must_use]
    pub const fn is_null_result(&self) -> bool {
        matches!(self, Self::NullResult { .. })
    }

    /// Returns `true` for [`ContractError::ArgumentType`].
    #[must_use]
    pub const fn is_argument_type(&self) -> bool {
        matches!(self, Self::ArgumentType { .. })
    }

    #[cfg(feature = "tracing")]
    const fn kind(&self) -> &'static str {
        match self {
            Self::ArgumentNull { .. } => "argument_null",
            Self::InvalidOperation { .. } => "invalid_operation",
            Self::NullResult { .. } => "null_result",
            Self::ArgumentType { .. } => "argument_type",
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentNull { parameter } => {
                write!(formatter, "argument `{parameter}` must not be null or empty")
            }
            Self::InvalidOperation { operation, reason } => {
                write!(formatter, "{operation}: {reason}")
            }
            Self::NullResult { operation } => {
                write!(formatter, "{operation}: callback returned null")
            }
            Self::ArgumentType { expected } => {
                write!(formatter, "argument must be of type `{expected}`")
            }
        }
    }
}

impl std::error::Error for ContractError {}

fn trace_violation(error: ContractError) -> ContractError {
    #[cfg(feature = "tracing")]
    tracing::debug!(kind = error.kind(), %error, "contract violation");
    error
}

/// How a combinator treats a null (`None`) result produced by its callback.
///
/// The match family of `Either` shares one dispatch core parameterized by
/// this policy: `match_nullable` uses [`NullPolicy::Propagate`] and
/// `try_match` uses [`NullPolicy::Reject`]. The single-callback `try_*`
/// combinators (`try_map_right`, `try_fold_left`, `Optional::try_map`, ...)
/// always reject and apply the same rule directly to the one output they
/// produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullPolicy {
    /// A null result is returned to the caller as-is.
    Propagate,
    /// A null result raises [`ContractError::NullResult`].
    Reject,
}

impl NullPolicy {
    /// Applies the policy to a callback output.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullResult`] under [`NullPolicy::Reject`]
    /// when `output` is `None`.
    pub fn apply<U>(self, operation: &'static str, output: Option<U>) -> Fallible<Option<U>> {
        match (self, output) {
            (Self::Reject, None) => Err(ContractError::null_result(operation)),
            (_, output) => Ok(output),
        }
    }
}

/// Unwraps a callback output that must not be null; the
/// [`NullPolicy::Reject`] rule for a single output.
pub(crate) fn require_result<U>(operation: &'static str, output: Option<U>) -> Fallible<U> {
    output.ok_or_else(|| ContractError::null_result(operation))
}

/// Unwraps a nullable argument.
pub(crate) fn require_argument<T>(parameter: &'static str, value: Option<T>) -> Fallible<T> {
    value.ok_or_else(|| ContractError::argument_null(parameter))
}
