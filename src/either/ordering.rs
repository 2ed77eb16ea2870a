//! Equality and ordering of `Either` values.
//!
//! Two entry points exist and intentionally disagree on one case:
//!
//! - The typed methods ([`Either::compare_left`], [`Either::compare_right`],
//!   and the `PartialOrd` impls against [`EitherLeft`]/[`EitherRight`]) always
//!   produce an ordering. A `Left` compared with a `Right` token simply sorts
//!   first.
//! - The object-typed [`Either::compare_any`] rejects a token of the other
//!   branch with `InvalidOperation`, and any unrelated type with
//!   `ArgumentType`.

use std::any::{Any, type_name};
use std::cmp::Ordering;

use crate::comparer::{EqualityComparer, OrderComparer};
use crate::error::{ContractError, Fallible};

use super::{Either, EitherLeft, EitherRight};

impl<L, R> Either<L, R> {
    /// Compares with custom payload equalities, right first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::{DefaultEquality, Either};
    ///
    /// let first: Either<i32, String> = Either::Right("Rust".to_string());
    /// let second: Either<i32, String> = Either::Right("RUST".to_string());
    /// let ignore_case = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
    /// assert!(first.eq_with(&second, &ignore_case, &DefaultEquality));
    /// ```
    pub fn eq_with<CR, CL>(&self, other: &Self, right_comparer: &CR, left_comparer: &CL) -> bool
    where
        CR: EqualityComparer<R> + ?Sized,
        CL: EqualityComparer<L> + ?Sized,
    {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Left(left), Self::Left(right)) => left_comparer.equals(left, right),
            (Self::Right(left), Self::Right(right)) => right_comparer.equals(left, right),
            _ => false,
        }
    }

    /// Orders by state (`None < Left < Right`), then by payload with the
    /// comparer of the shared branch.
    pub fn compare_with<CR, CL>(
        &self,
        other: &Self,
        right_comparer: &CR,
        left_comparer: &CL,
    ) -> Ordering
    where
        CR: OrderComparer<R> + ?Sized,
        CL: OrderComparer<L> + ?Sized,
    {
        match (self, other) {
            (Self::Left(left), Self::Left(right)) => left_comparer.compare(left, right),
            (Self::Right(left), Self::Right(right)) => right_comparer.compare(left, right),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Left(_) => 1,
            Self::Right(_) => 2,
        }
    }
}

impl<L: Ord, R> Either<L, R> {
    /// Compares against a `Left` token as if it were a full `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use railway::{Either, EitherLeft};
    ///
    /// let right: Either<i32, i32> = Either::Right(0);
    /// assert_eq!(right.compare_left(&EitherLeft::new(5)), Ordering::Greater);
    /// ```
    pub fn compare_left(&self, other: &EitherLeft<L>) -> Ordering {
        match self {
            Self::None => Ordering::Less,
            Self::Left(value) => value.cmp(other.value()),
            Self::Right(_) => Ordering::Greater,
        }
    }
}

impl<L, R: Ord> Either<L, R> {
    /// Compares against a `Right` token as if it were a full `Right`.
    pub fn compare_right(&self, other: &EitherRight<R>) -> Ordering {
        match self {
            Self::None | Self::Left(_) => Ordering::Less,
            Self::Right(value) => value.cmp(other.value()),
        }
    }
}

impl<L, R> Either<L, R>
where
    L: Ord + 'static,
    R: Ord + 'static,
{
    /// Compares against a value of unknown type.
    ///
    /// Accepts another `Either<L, R>` or a token of the same branch. `None`
    /// compared with a token sorts first.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] when `other` is a token of
    /// the branch this `Either` is not in, and [`ContractError::ArgumentType`]
    /// when `other` is of any other type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use railway::{Either, EitherRight};
    ///
    /// let left: Either<i32, i32> = Either::Left(1);
    /// assert!(left.compare_any(&EitherRight::new(1)).unwrap_err().is_invalid_operation());
    /// assert!(left.compare_any(&"text").unwrap_err().is_argument_type());
    /// assert_eq!(left.compare_any(&Either::<i32, i32>::None), Ok(Ordering::Greater));
    /// ```
    pub fn compare_any(&self, other: &dyn Any) -> Fallible<Ordering> {
        const OPERATION: &str = "Either::compare_any";
        if let Some(other) = other.downcast_ref::<Self>() {
            return Ok(self.cmp(other));
        }
        if let Some(token) = other.downcast_ref::<EitherLeft<L>>() {
            return match self {
                Self::Right(_) => Err(branch_mismatch(OPERATION, "Right", "Left")),
                _ => Ok(self.compare_left(token)),
            };
        }
        if let Some(token) = other.downcast_ref::<EitherRight<R>>() {
            return match self {
                Self::Left(_) => Err(branch_mismatch(OPERATION, "Left", "Right")),
                _ => Ok(self.compare_right(token)),
            };
        }
        Err(ContractError::argument_type(type_name::<Self>()))
    }
}

impl<L, R> Either<L, R>
where
    L: PartialEq + 'static,
    R: PartialEq + 'static,
{
    /// Compares with a value of unknown type; unrelated types are never equal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        if let Some(other) = other.downcast_ref::<Self>() {
            self == other
        } else if let Some(token) = other.downcast_ref::<EitherLeft<L>>() {
            self == token
        } else if let Some(token) = other.downcast_ref::<EitherRight<R>>() {
            self == token
        } else {
            false
        }
    }
}

fn branch_mismatch(operation: &'static str, actual: &str, token: &str) -> ContractError {
    ContractError::invalid_operation(
        operation,
        format!("cannot compare a {actual} either with a {token} token"),
    )
}
