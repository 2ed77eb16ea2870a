//! Conversions out of the outcome family.

use crate::either::Either;
use crate::error::{ContractError, Fallible};
use crate::option::Optional;
use crate::outcome::{CustomOutcomeOf, OutcomeOf};

use super::{CUSTOM_NULL_VALUE_MESSAGE, NULL_VALUE_MESSAGE};

impl<T> OutcomeOf<T> {
    /// A success or warning becomes `Right(value)`; a failure becomes
    /// `Left(message)`.
    ///
    /// The value is moved into `Right` as-is. For a nullable payload
    /// (`OutcomeOf<Option<T>>`) use [`OutcomeOf::to_non_null_either`],
    /// which turns a null success into `Left(NULL_VALUE_MESSAGE)` instead of
    /// `Right(None)`.
    pub fn to_either(self) -> Either<String, T> {
        self.match_outcome(Either::Right, |diagnostic| {
            Either::Left(diagnostic.message().to_owned())
        })
    }

    /// Keeps the value of a success or warning.
    pub fn to_optional(self) -> Optional<T> {
        Optional::from_nullable(self.into_parts().1)
    }
}

impl<T> OutcomeOf<Option<T>> {
    /// Like [`OutcomeOf::to_either`] for a nullable payload: a success whose
    /// value is null becomes `Left(NULL_VALUE_MESSAGE)`, never a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::conversion::NULL_VALUE_MESSAGE;
    /// use railway::{Either, OutcomeOf};
    ///
    /// let person: OutcomeOf<Option<String>> = OutcomeOf::ok(None);
    /// assert_eq!(person.to_non_null_either(), Either::Left(NULL_VALUE_MESSAGE.to_string()));
    /// ```
    pub fn to_non_null_either(self) -> Either<String, T> {
        self.to_either().bind_right(|value| {
            value.map_or_else(|| Either::Left(NULL_VALUE_MESSAGE.to_owned()), Either::Right)
        })
    }
}

impl<T, E> CustomOutcomeOf<T, E> {
    /// A success or warning becomes `Right(value)`; a failure becomes
    /// `Left(message)`, dropping the error.
    pub fn to_message_either(self) -> Either<String, T> {
        self.match_outcome(Either::Right, |diagnostic, _| {
            Either::Left(diagnostic.message().to_owned())
        })
    }

    /// A success or warning becomes `Right(value)`; a failure becomes
    /// `Left(error)`.
    ///
    /// For a nullable payload use [`CustomOutcomeOf::to_non_null_either`],
    /// which rejects a null success.
    pub fn to_either(self) -> Either<E, T> {
        self.match_outcome(Either::Right, |_, error| Either::Left(error))
    }

    /// Keeps the value of a success or warning.
    pub fn to_optional(self) -> Optional<T> {
        Optional::from_nullable(self.into_parts().1)
    }
}

impl<T, E> CustomOutcomeOf<Option<T>, E> {
    /// Like [`CustomOutcomeOf::to_message_either`] for a nullable payload: a
    /// success whose value is null becomes `Left(CUSTOM_NULL_VALUE_MESSAGE)`.
    pub fn to_non_null_message_either(self) -> Either<String, T> {
        self.to_message_either().bind_right(|value| {
            value.map_or_else(
                || Either::Left(CUSTOM_NULL_VALUE_MESSAGE.to_owned()),
                Either::Right,
            )
        })
    }

    /// Like [`CustomOutcomeOf::to_either`] for a nullable payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] for a success whose value
    /// is null: there is no `E` to put in a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::CustomOutcomeOf;
    ///
    /// let found: CustomOutcomeOf<Option<i32>, u16> = CustomOutcomeOf::ok(None);
    /// assert!(found.to_non_null_either().unwrap_err().is_invalid_operation());
    /// ```
    pub fn to_non_null_either(self) -> Fallible<Either<E, T>> {
        match self.to_either() {
            Either::Right(Some(value)) => Ok(Either::Right(value)),
            Either::Right(None) => Err(ContractError::invalid_operation(
                "CustomOutcomeOf::to_non_null_either",
                "the result succeeded but its value is null",
            )),
            Either::Left(error) => Ok(Either::Left(error)),
            Either::None => Ok(Either::None),
        }
    }
}
