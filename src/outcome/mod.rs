//! Outcomes of operations: success, warning or failure.
//!
//! Four concrete flavors share one tri-state engine:
//!
//! | Type                    | Value | Typed error | Logic            |
//! |-------------------------|-------|-------------|------------------|
//! | [`Outcome`]             | no    | no          | [`ResultLogic`]  |
//! | [`OutcomeOf<T>`]        | yes   | no          | [`ResultLogic`]  |
//! | [`CustomOutcome<E>`]    | no    | yes         | [`ErrorLogic<E>`]|
//! | [`CustomOutcomeOf<T,E>`]| yes   | yes         | [`ErrorLogic<E>`]|
//!
//! A warning is a success with a caveat: its value (if any) is valid and
//! accessible. A failure has no value; in the error-typed flavors it always
//! carries an error object.
//!
//! All flavors interconvert through named casts (`with_value`,
//! `with_error`, `without_value`, `without_error`, `to_failure`, ...).
//! Every cast builds a new value through the target's own factory, so the
//! target's invariants are checked again, and a value transform never runs
//! for a failure.
//!
//! # Examples
//!
//! ```rust
//! use railway::outcome::{Outcome, OutcomeOf};
//!
//! fn parse(input: &str) -> OutcomeOf<i32> {
//!     match input.parse() {
//!         Ok(value) => OutcomeOf::ok(value),
//!         Err(_) => OutcomeOf::fail(format!("`{input}` is not a number")).unwrap(),
//!     }
//! }
//!
//! assert_eq!(parse("12").map(|n| n * 2).value(), Ok(&24));
//!
//! let failed = parse("x");
//! let demoted: Outcome = failed.without_value();
//! assert_eq!(demoted.message(), Some("`x` is not a number"));
//! ```

mod custom;
mod custom_valued;
mod error_logic;
mod exception;
mod logic;
mod plain;
mod valued;

pub use custom::CustomOutcome;
pub use custom_valued::CustomOutcomeOf;
pub use error_logic::ErrorLogic;
pub use exception::Exception;
pub use logic::{Diagnostic, ResultLogic, Status};
pub use plain::Outcome;
pub use valued::OutcomeOf;

// Exceptions are shared behind an `Arc`, so every outcome is thread-safe when
// its payloads are.
static_assertions::assert_impl_all!(Exception: Send, Sync);
static_assertions::assert_impl_all!(Outcome: Send, Sync);
static_assertions::assert_impl_all!(OutcomeOf<String>: Send, Sync);
static_assertions::assert_impl_all!(CustomOutcome<String>: Send, Sync);
static_assertions::assert_impl_all!(CustomOutcomeOf<String, String>: Send, Sync);
