//! The `Optional<T>` type - a value that may be absent.
//!
//! `Optional<T>` is either `Some(value)` or `None`. Unlike a bare nullable,
//! it never stores a null marker as a present value: constructing it from a
//! nullable source collapses null to `None`.
//!
//! # Examples
//!
//! ```rust
//! use railway::Optional;
//!
//! let present = Optional::some(42);
//! assert!(present.has_value());
//! assert_eq!(present.value(), Ok(&42));
//!
//! let absent: Optional<i32> = Optional::none();
//! assert!(absent.has_no_value());
//! assert!(absent.value().is_err());
//!
//! // Null collapses to empty rather than to "some(null)".
//! let collapsed: Optional<String> = Optional::from_nullable(None);
//! assert_eq!(collapsed, Optional::none());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::comparer::{EqualityComparer, OrderComparer};
use crate::error::{ContractError, Fallible, require_argument};

/// An optional value.
///
/// Every `Optional` is an immutable value: combinators always produce a new
/// instance and leave the receiver untouched.
///
/// Ordering places `None` before any `Some`, and orders two `Some` values
/// by payload.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present `Optional`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Optional`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates an `Optional` from a nullable value; null collapses to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(3)), Optional::some(3));
    /// assert_eq!(Optional::<i32>::from_nullable(None), Optional::none());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    /// Creates a present `Optional` from a nullable value that must not be null.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Optional;
    ///
    /// assert_eq!(Optional::try_some(Some(1)), Ok(Optional::some(1)));
    /// assert!(Optional::<i32>::try_some(None).unwrap_err().is_argument_null());
    /// ```
    pub fn try_some(value: Option<T>) -> Fallible<Self> {
        require_argument("value", value).map(Self::Some)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn has_no_value(&self) -> bool {
        !self.has_value()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] if the optional is empty.
    pub fn value(&self) -> Fallible<&T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(no_value("Optional::value")),
        }
    }

    /// Consumes the optional and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] if the optional is empty.
    pub fn into_value(self) -> Fallible<T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(no_value("Optional::into_value")),
        }
    }

    /// Returns the value, or `default` when empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value, or the result of `default` when empty.
    ///
    /// `default` runs only for an empty optional.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts into a nullable value.
    #[inline]
    pub fn to_nullable(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns a borrowed nullable view of the value.
    #[inline]
    pub const fn as_nullable(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Iterates over the value: one element when present, none when empty.
    ///
    /// The iterator borrows the optional, so it can be re-created any
    /// number of times with identical results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Optional;
    ///
    /// let present = Optional::some(7);
    /// assert_eq!(present.iter().count(), 1);
    /// assert_eq!(present.iter().count(), 1);
    /// assert_eq!(Optional::<i32>::none().iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_nullable().into_iter()
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compares two optionals with a custom payload equality.
    ///
    /// Both empty, or both present with equal payloads, compare equal.
    pub fn eq_with<C>(&self, other: &Self, comparer: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => comparer.equals(left, right),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }

    /// Orders two optionals with a custom payload ordering; `None` sorts first.
    pub fn compare_with<C>(&self, other: &Self, comparer: &C) -> Ordering
    where
        C: OrderComparer<T> + ?Sized,
    {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => comparer.compare(left, right),
            (Self::None, Self::None) => Ordering::Equal,
            (Self::None, Self::Some(_)) => Ordering::Less,
            (Self::Some(_), Self::None) => Ordering::Greater,
        }
    }
}

impl<T: Default> Optional<T> {
    /// Returns the value, or `T::default()` when empty.
    #[inline]
    pub fn value_or_default(self) -> T {
        self.value_or_else(T::default)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

fn no_value(operation: &'static str) -> ContractError {
    ContractError::invalid_operation(operation, "optional has no value")
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.to_nullable()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_nullable().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Optional<T> {
    /// Takes the first element of the iterator, if any.
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_nullable(iterator.into_iter().next())
    }
}
