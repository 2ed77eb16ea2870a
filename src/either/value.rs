//! The `Either<L, R>` type and its state queries.

use std::fmt;

use crate::error::{ContractError, Fallible, NullPolicy, require_argument};

/// A value that is a `Left(L)`, a `Right(R)`, or deliberately empty.
///
/// By convention `Right` carries the expected value and `Left` the
/// alternative (often an error). `None` is a genuine third state, not an
/// error encoding: it is what [`Either::filter`] produces when the predicate
/// rejects a value, and what `Default` returns.
///
/// Ordering places `None` before `Left` before `Right`; two values in the
/// same branch are ordered by payload.
///
/// # Examples
///
/// ```rust
/// use railway::Either;
///
/// let parsed: Either<String, i32> = Either::Right(42);
/// let rejected: Either<String, i32> = Either::Left("not a number".to_string());
///
/// assert_eq!(parsed.right_value(), Ok(&42));
/// assert!(rejected.right_value().unwrap_err().is_invalid_operation());
/// assert_eq!(Either::<String, i32>::default(), Either::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    // Declaration order is the ordering: None < Left < Right.
    /// The empty state.
    None,
    /// The left branch.
    Left(L),
    /// The right branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left`.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right`.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates the empty state.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a `Left` from a nullable value that must not be null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `value` is `None`.
    pub fn try_left(value: Option<L>) -> Fallible<Self> {
        require_argument("value", value).map(Self::Left)
    }

    /// Creates a `Right` from a nullable value that must not be null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Either;
    ///
    /// let right: Either<(), i32> = Either::try_right(Some(1)).unwrap();
    /// assert!(right.is_right());
    /// assert!(Either::<(), i32>::try_right(None).unwrap_err().is_argument_null());
    /// ```
    pub fn try_right(value: Option<R>) -> Fallible<Self> {
        require_argument("value", value).map(Self::Right)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns `true` for a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` for the empty state.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub(crate) const fn state_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Left(_) => "Left",
            Self::Right(_) => "Right",
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the `Left` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] for a `Right` or `None`.
    pub fn left_value(&self) -> Fallible<&L> {
        match self {
            Self::Left(value) => Ok(value),
            _ => Err(wrong_branch("Either::left_value", "Left", self.state_name())),
        }
    }

    /// Returns the `Right` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] for a `Left` or `None`.
    pub fn right_value(&self) -> Fallible<&R> {
        match self {
            Self::Right(value) => Ok(value),
            _ => Err(wrong_branch("Either::right_value", "Right", self.state_name())),
        }
    }

    /// Consumes the `Either` and returns the `Left` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] for a `Right` or `None`.
    pub fn into_left(self) -> Fallible<L> {
        let state = self.state_name();
        match self {
            Self::Left(value) => Ok(value),
            _ => Err(wrong_branch("Either::into_left", "Left", state)),
        }
    }

    /// Consumes the `Either` and returns the `Right` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] for a `Left` or `None`.
    pub fn into_right(self) -> Fallible<R> {
        let state = self.state_name();
        match self {
            Self::Right(value) => Ok(value),
            _ => Err(wrong_branch("Either::into_right", "Right", state)),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::None => Either::None,
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Exchanges the branches; `None` stays `None`.
    #[must_use]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::None => Either::None,
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Core dispatch
    // =========================================================================

    /// Runs the handler of the active branch and applies `policy` to its
    /// output. Only the selected handler runs and only its output is checked.
    pub(crate) fn dispatch<U, FR, FL, FN>(
        self,
        operation: &'static str,
        policy: NullPolicy,
        on_right: FR,
        on_left: FL,
        on_none: FN,
    ) -> Fallible<Option<U>>
    where
        FR: FnOnce(R) -> Option<U>,
        FL: FnOnce(L) -> Option<U>,
        FN: FnOnce() -> Fallible<Option<U>>,
    {
        let output = match self {
            Self::Right(value) => on_right(value),
            Self::Left(value) => on_left(value),
            Self::None => on_none()?,
        };
        policy.apply(operation, output)
    }
}

impl<L, R> Default for Either<L, R> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None"),
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

pub(crate) fn none_state(operation: &'static str) -> ContractError {
    ContractError::invalid_operation(
        operation,
        "the either is None; use the overload with a None handler",
    )
}

fn wrong_branch(operation: &'static str, expected: &str, actual: &str) -> ContractError {
    ContractError::invalid_operation(operation, format!("the either is {actual}, not {expected}"))
}
