//! Single-branch construction tokens.
//!
//! [`EitherLeft<L>`] and [`EitherRight<R>`] name one branch without fixing
//! the other branch's type. They convert into any `Either` with a matching
//! branch type, and an `Either` compares against them exactly as it would
//! against the equivalent full `Either`.

use std::cmp::Ordering;

use crate::error::{Fallible, require_argument};

use super::Either;

/// A `Left` payload whose right type is not yet known.
///
/// # Examples
///
/// ```rust
/// use railway::{Either, EitherLeft};
///
/// let either: Either<&str, i32> = EitherLeft::new("missing").into();
/// assert_eq!(either, EitherLeft::new("missing"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EitherLeft<L>(L);

/// A `Right` payload whose left type is not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EitherRight<R>(R);

impl<L> EitherLeft<L> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: L) -> Self {
        Self(value)
    }

    /// Wraps a nullable value that must not be null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `value` is `None`.
    pub fn try_new(value: Option<L>) -> Fallible<Self> {
        require_argument("value", value).map(Self)
    }

    /// Returns the payload.
    #[inline]
    pub const fn value(&self) -> &L {
        &self.0
    }

    /// Consumes the token and returns the payload.
    #[inline]
    pub fn into_value(self) -> L {
        self.0
    }

    /// Fixes the right type.
    #[inline]
    pub fn into_either<R>(self) -> Either<L, R> {
        Either::Left(self.0)
    }
}

impl<R> EitherRight<R> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: R) -> Self {
        Self(value)
    }

    /// Wraps a nullable value that must not be null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `value` is `None`.
    pub fn try_new(value: Option<R>) -> Fallible<Self> {
        require_argument("value", value).map(Self)
    }

    /// Returns the payload.
    #[inline]
    pub const fn value(&self) -> &R {
        &self.0
    }

    /// Consumes the token and returns the payload.
    #[inline]
    pub fn into_value(self) -> R {
        self.0
    }

    /// Fixes the left type.
    #[inline]
    pub fn into_either<L>(self) -> Either<L, R> {
        Either::Right(self.0)
    }
}

impl<L, R> From<EitherLeft<L>> for Either<L, R> {
    fn from(token: EitherLeft<L>) -> Self {
        token.into_either()
    }
}

impl<L, R> From<EitherRight<R>> for Either<L, R> {
    fn from(token: EitherRight<R>) -> Self {
        token.into_either()
    }
}

impl<L: PartialEq, R> PartialEq<EitherLeft<L>> for Either<L, R> {
    fn eq(&self, other: &EitherLeft<L>) -> bool {
        matches!(self, Self::Left(value) if *value == other.0)
    }
}

impl<L, R: PartialEq> PartialEq<EitherRight<R>> for Either<L, R> {
    fn eq(&self, other: &EitherRight<R>) -> bool {
        matches!(self, Self::Right(value) if *value == other.0)
    }
}

// A `Left` token sits where a full `Left` would: above `None`, below `Right`.
impl<L: PartialOrd, R> PartialOrd<EitherLeft<L>> for Either<L, R> {
    fn partial_cmp(&self, other: &EitherLeft<L>) -> Option<Ordering> {
        match self {
            Self::None => Some(Ordering::Less),
            Self::Left(value) => value.partial_cmp(&other.0),
            Self::Right(_) => Some(Ordering::Greater),
        }
    }
}

impl<L, R: PartialOrd> PartialOrd<EitherRight<R>> for Either<L, R> {
    fn partial_cmp(&self, other: &EitherRight<R>) -> Option<Ordering> {
        match self {
            Self::None | Self::Left(_) => Some(Ordering::Less),
            Self::Right(value) => value.partial_cmp(&other.0),
        }
    }
}
