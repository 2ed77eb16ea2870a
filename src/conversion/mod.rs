//! Conversions between [`Optional`](crate::Optional), the outcome family
//! and [`Either`](crate::Either).
//!
//! Each conversion keeps its own policy for empty and null values:
//!
//! - An empty `Optional` becomes a failure (with a generic or supplied
//!   message) or a `Left` built from a mandatory left value.
//! - A successful outcome whose payload is null (`OutcomeOf<Option<T>>`
//!   holding `None`) becomes a `Left` carrying a fixed sentinel message
//!   when the target's left type is `String`.
//! - [`CustomOutcomeOf::to_non_null_either`](crate::CustomOutcomeOf::to_non_null_either)
//!   has no string to fall back on, so the same situation is an
//!   `InvalidOperation` there.
//!
//! # Examples
//!
//! ```rust
//! use railway::conversion::NULL_VALUE_MESSAGE;
//! use railway::{Either, Optional, OutcomeOf};
//!
//! let found: OutcomeOf<Option<&str>> = OutcomeOf::ok(None);
//! assert_eq!(found.to_non_null_either(), Either::Left(NULL_VALUE_MESSAGE.to_string()));
//!
//! let port = Optional::some(8080).to_either("no port configured");
//! assert_eq!(port, Either::Right(8080));
//! ```

mod from_either;
mod from_option;
mod from_outcome;

use std::any::type_name;

/// The failure message of an `Outcome` converted from an empty `Optional`.
pub const NO_VALUE_MESSAGE: &str = "The optional has no value.";

/// The `Left` message substituted for a successful `OutcomeOf` whose value is null.
pub const NULL_VALUE_MESSAGE: &str = "Result succeeded but its value is null.";

/// The `Left` message substituted for a successful `CustomOutcomeOf` whose
/// value is null.
pub const CUSTOM_NULL_VALUE_MESSAGE: &str = "Custom result succeeded but its value is null.";

/// The default failure message of an `OutcomeOf<T>` converted from an empty
/// `Optional<T>`.
pub(crate) fn missing_value_message<T>() -> String {
    format!("No value of type `{}` is present.", type_name::<T>())
}
