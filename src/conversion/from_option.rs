//! Conversions out of `Optional<T>`.

use crate::either::Either;
use crate::error::{Fallible, require_argument};
use crate::option::Optional;
use crate::outcome::{
    CustomOutcome, CustomOutcomeOf, Diagnostic, ErrorLogic, Outcome, OutcomeOf, ResultLogic,
};

use super::{NO_VALUE_MESSAGE, missing_value_message};

impl<T> Optional<T> {
    /// Keeps only presence: `Some` becomes a success, `None` a failure with
    /// [`NO_VALUE_MESSAGE`](super::NO_VALUE_MESSAGE).
    pub fn to_outcome(&self) -> Outcome {
        if self.has_value() {
            Outcome::ok()
        } else {
            Outcome::from_logic(ResultLogic::failure(Diagnostic::internal(NO_VALUE_MESSAGE)))
        }
    }

    /// `Some(value)` becomes `ok(value)`; `None` becomes a failure whose
    /// message names `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Optional;
    ///
    /// let empty: Optional<u32> = Optional::none();
    /// let outcome = empty.to_outcome_of();
    /// assert!(outcome.is_failure());
    /// assert!(outcome.message().unwrap().contains("u32"));
    /// ```
    pub fn to_outcome_of(self) -> OutcomeOf<T> {
        match self {
            Self::Some(value) => OutcomeOf::ok(value),
            Self::None => OutcomeOf::from_parts(
                ResultLogic::failure(Diagnostic::internal(missing_value_message::<T>())),
                None,
            ),
        }
    }

    /// Like [`Optional::to_outcome_of`], with a supplied failure message.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty, whatever the state.
    pub fn to_outcome_of_or(self, message: impl Into<String>) -> Fallible<OutcomeOf<T>> {
        let diagnostic = Diagnostic::new(message, None)?;
        Ok(match self {
            Self::Some(value) => OutcomeOf::ok(value),
            Self::None => OutcomeOf::from_parts(ResultLogic::failure(diagnostic), None),
        })
    }

    /// Keeps only presence; `None` becomes a failure carrying `error`.
    pub fn to_custom_outcome<E>(&self, error: E) -> CustomOutcome<E> {
        self.to_custom_outcome_with(|| error)
    }

    /// Keeps only presence; `None` becomes a failure carrying the error
    /// produced by `error`, which runs only in that case.
    pub fn to_custom_outcome_with<E, F>(&self, error: F) -> CustomOutcome<E>
    where
        F: FnOnce() -> E,
    {
        if self.has_value() {
            CustomOutcome::ok()
        } else {
            CustomOutcome::from_logic(missing(error()))
        }
    }

    /// `Some(value)` becomes `ok(value)`; `None` becomes a failure carrying
    /// `error`.
    pub fn to_custom_outcome_of<E>(self, error: E) -> CustomOutcomeOf<T, E> {
        self.to_custom_outcome_of_with(|| error)
    }

    /// Like [`Optional::to_custom_outcome_of`], with the error produced
    /// lazily for `None` only.
    pub fn to_custom_outcome_of_with<E, F>(self, error: F) -> CustomOutcomeOf<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => CustomOutcomeOf::ok(value),
            Self::None => CustomOutcomeOf::from_parts(missing(error()), None),
        }
    }

    /// Like [`Optional::to_custom_outcome_of`], with a nullable error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `error` is `None`, whatever the state.
    pub fn try_to_custom_outcome_of<E>(self, error: Option<E>) -> Fallible<CustomOutcomeOf<T, E>> {
        let error = require_argument("error", error)?;
        Ok(self.to_custom_outcome_of(error))
    }

    /// `Some(value)` becomes `Right(value)`; `None` becomes `Left(left)`.
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        self.to_either_with(|| left)
    }

    /// `Some(value)` becomes `Right(value)`; `None` becomes the `Left`
    /// produced by `left`, which runs only in that case.
    pub fn to_either_with<L, F>(self, left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left()),
        }
    }

    /// Like [`Optional::to_either`], with a nullable left value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `left` is `None`, whatever the state.
    pub fn try_to_either<L>(self, left: Option<L>) -> Fallible<Either<L, T>> {
        let left = require_argument("left", left)?;
        Ok(self.to_either(left))
    }
}

fn missing<E>(error: E) -> ErrorLogic<E> {
    ErrorLogic::failure(Diagnostic::internal(NO_VALUE_MESSAGE), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_to_outcome_discards_value() {
        assert_eq!(Optional::some(3).to_outcome(), Outcome::ok());
        let failure = Optional::<i32>::none().to_outcome();
        assert_eq!(failure.message(), Some(NO_VALUE_MESSAGE));
    }

    #[rstest]
    fn test_to_outcome_of_or_validates_message() {
        let error = Optional::some(1).to_outcome_of_or("").unwrap_err();
        assert!(error.is_argument_null());
        let failure = Optional::<i32>::none().to_outcome_of_or("missing id").unwrap();
        assert_eq!(failure.message(), Some("missing id"));
    }

    #[rstest]
    fn test_error_factory_runs_only_when_empty() {
        let calls = Cell::new(0);
        let factory = || {
            calls.set(calls.get() + 1);
            "E"
        };
        let present = Optional::some(1).to_custom_outcome_of_with(factory);
        assert_eq!(present.value(), Ok(&1));
        assert_eq!(calls.get(), 0);

        let absent = Optional::<i32>::none().to_custom_outcome_with(factory);
        assert_eq!(absent.error(), Ok(&"E"));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_try_conversions_reject_null_arguments() {
        let optional = Optional::some(1);
        assert!(optional.try_to_either::<&str>(None).unwrap_err().is_argument_null());
        assert!(optional.try_to_custom_outcome_of::<&str>(None).unwrap_err().is_argument_null());
    }

    #[rstest]
    fn test_to_either() {
        assert_eq!(Optional::some(1).to_either("none"), Either::Right(1));
        assert_eq!(Optional::<i32>::none().to_either("none"), Either::Left("none"));
    }
}
