//! Conversions out of `Either<L, R>`.

use crate::either::{Either, none_state};
use crate::error::Fallible;
use crate::option::Optional;
use crate::outcome::{CustomOutcomeOf, Diagnostic, ErrorLogic, OutcomeOf, ResultLogic};

impl<L, R> Either<L, R> {
    /// Keeps a `Left` payload.
    pub fn left_optional(self) -> Optional<L> {
        match self {
            Self::Left(value) => Optional::some(value),
            _ => Optional::none(),
        }
    }

    /// Keeps a `Right` payload.
    pub fn right_optional(self) -> Optional<R> {
        match self {
            Self::Right(value) => Optional::some(value),
            _ => Optional::none(),
        }
    }

    /// `Right(value)` becomes `ok(value)`; `Left(error)` becomes a failure
    /// with `message` carrying `error`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if `message` is empty, and
    /// [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    pub fn to_custom_outcome_of(
        self,
        message: impl Into<String>,
    ) -> Fallible<CustomOutcomeOf<R, L>> {
        let diagnostic = Diagnostic::new(message, None)?;
        match self {
            Self::Right(value) => Ok(CustomOutcomeOf::ok(value)),
            Self::Left(error) => Ok(CustomOutcomeOf::from_parts(
                ErrorLogic::failure(diagnostic, error),
                None,
            )),
            Self::None => Err(none_state("Either::to_custom_outcome_of")),
        }
    }
}

impl<R> Either<String, R> {
    /// `Right(value)` becomes `ok(value)`; `Left(message)` becomes a failure
    /// with that message.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ArgumentNull`](crate::ContractError::ArgumentNull)
    /// if the `Left` message is empty, and
    /// [`ContractError::InvalidOperation`](crate::ContractError::InvalidOperation)
    /// on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Either;
    ///
    /// let failed: Either<String, i32> = Either::Left("timed out".to_string());
    /// let outcome = failed.to_outcome_of().unwrap();
    /// assert_eq!(outcome.message(), Some("timed out"));
    /// ```
    pub fn to_outcome_of(self) -> Fallible<OutcomeOf<R>> {
        match self {
            Self::Right(value) => Ok(OutcomeOf::ok(value)),
            Self::Left(message) => {
                let diagnostic = Diagnostic::new(message, None)?;
                Ok(OutcomeOf::from_parts(ResultLogic::failure(diagnostic), None))
            }
            Self::None => Err(none_state("Either::to_outcome_of")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_branch_optionals() {
        let left: Either<&str, i32> = Either::Left("e");
        assert_eq!(left.left_optional(), Optional::some("e"));
        assert_eq!(left.right_optional(), Optional::none());
        assert_eq!(Either::<&str, i32>::None.left_optional(), Optional::none());
    }

    #[rstest]
    fn test_to_custom_outcome_of_carries_left_as_error() {
        let left: Either<u16, &str> = Either::Left(404);
        let outcome = left.to_custom_outcome_of("lookup failed").unwrap();
        assert_eq!(outcome.error(), Ok(&404));
        assert_eq!(outcome.message(), Some("lookup failed"));
    }

    #[rstest]
    fn test_to_outcome_of_rejects_none_and_empty_message() {
        let none: Either<String, i32> = Either::None;
        assert!(none.to_outcome_of().unwrap_err().is_invalid_operation());
        let empty: Either<String, i32> = Either::Left(String::new());
        assert!(empty.to_outcome_of().unwrap_err().is_argument_null());
    }
}
