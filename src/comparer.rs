//! Pluggable equality and ordering strategies.
//!
//! The wrappers compare their payloads with `PartialEq`/`Ord` by default.
//! Where that is ambiguous (types without value equality, or when a caller
//! needs a different notion of sameness) every wrapper also accepts an
//! [`EqualityComparer`] or [`OrderComparer`] through its `*_with` methods.
//!
//! Closures implement both traits, so most callers never name a comparer
//! type:
//!
//! ```rust
//! use railway::{DefaultEquality, EqualityComparer};
//!
//! let left = "Hello".to_string();
//! let right = "hello".to_string();
//!
//! let ignore_case = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
//! assert!(ignore_case.equals(&left, &right));
//! assert!(!DefaultEquality.equals(&left, &right));
//! ```

use std::cmp::Ordering;

/// A strategy deciding whether two values are equal.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if `left` and `right` are considered equal.
    fn equals(&self, left: &T, right: &T) -> bool;
}

/// A strategy ordering two values.
pub trait OrderComparer<T: ?Sized> {
    /// Returns the ordering of `left` relative to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

impl<T: ?Sized, F> OrderComparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Compares values with their `PartialEq` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEquality {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Compares values by address.
///
/// Two values are equal only if they are the same object, the behavior of
/// a type without custom equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReferenceEquality;

impl<T: ?Sized> EqualityComparer<T> for ReferenceEquality {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        std::ptr::addr_eq(left, right)
    }
}

/// Orders values with their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultOrder;

impl<T: Ord + ?Sized> OrderComparer<T> for DefaultOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}
