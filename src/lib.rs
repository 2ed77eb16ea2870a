//! # railway
//!
//! Monadic value wrappers for railway-oriented code.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<T>`], a value that may be absent. Null sources
//!   collapse to `None`.
//! - **Outcomes**: [`Outcome`], [`OutcomeOf<T>`], [`CustomOutcome<E>`] and
//!   [`CustomOutcomeOf<T, E>`], the result of an operation in one of three
//!   states: success, warning (a success with a caveat) or failure.
//! - **Either**: [`Either<L, R>`], a `Left`, a `Right`, or deliberately
//!   `None`.
//! - **Conversions** between the three families, each with a precise policy
//!   for empty and null values.
//!
//! Business-level failure is a value (`Failure`, `Left`, `None`). Misuse of
//! the API, such as reading the value of a failure, is reported as a
//! [`ContractError`] through [`Fallible`].
//!
//! ## Feature Flags
//!
//! - `option`: [`Optional`] and its combinators
//! - `outcome`: the outcome family and its logic types
//! - `either`: [`Either`] and its single-branch tokens
//! - `conversion`: conversions between the families (enables the three above)
//! - `serde`: `Serialize`/`Deserialize` for [`Unit`], `Optional` and `Either`
//! - `tracing`: debug events whenever a [`ContractError`] is raised
//! - `full`: Enable all features
//!
//! ## Example
//!
//! The conversions need the `conversion` feature, which is on by default.
//!
#![cfg_attr(
    feature = "conversion",
    doc = r#"
```rust
use railway::prelude::*;

fn find_port(config: &str) -> Optional<u16> {
    config.strip_prefix("port=").and_then(|port| port.parse::<u16>().ok()).into()
}

let outcome = find_port("port=8080").to_outcome_of();
assert_eq!(outcome.value(), Ok(&8080));

let either = find_port("host=localhost").to_either("no port");
assert_eq!(either, Either::Left("no port"));
```
"#
)]

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparer::*;
    pub use crate::error::{ContractError, Fallible, NullPolicy};
    pub use crate::unit::Unit;

    #[cfg(feature = "option")]
    pub use crate::option::*;

    #[cfg(feature = "outcome")]
    pub use crate::outcome::*;

    #[cfg(feature = "either")]
    pub use crate::either::*;
}

mod comparer;
mod error;
mod unit;

pub use comparer::{
    DefaultEquality, DefaultOrder, EqualityComparer, OrderComparer, ReferenceEquality,
};
pub use error::{ContractError, Fallible, NullPolicy};
pub use unit::Unit;

#[cfg(feature = "option")]
pub mod option;

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "either")]
pub mod either;

#[cfg(feature = "conversion")]
pub mod conversion;

#[cfg(feature = "option")]
pub use option::Optional;

#[cfg(feature = "outcome")]
pub use outcome::{
    CustomOutcome, CustomOutcomeOf, Diagnostic, ErrorLogic, Exception, Outcome, OutcomeOf,
    ResultLogic, Status,
};

#[cfg(feature = "either")]
pub use either::{Either, EitherLeft, EitherRight};
