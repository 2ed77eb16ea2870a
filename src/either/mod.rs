//! A disjoint union of two typed alternatives with an explicit empty state.
//!
//! [`Either<L, R>`] is `Left(L)`, `Right(R)` or `None`. Its combinators
//! dispatch on the three states; two-handler combinators reject `None`
//! while their `*_with_none` counterparts handle it.
//!
//! # Examples
//!
//! ```rust
//! use railway::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|_| format!("bad input: {input}")).into()
//! }
//!
//! let doubled = parse("21").map_right(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let message = parse("x").match_either(|n| n.to_string(), |error| error);
//! assert_eq!(message, Ok("bad input: x".to_string()));
//! ```

mod branch;
mod combinators;
mod ordering;
mod value;

pub use branch::{EitherLeft, EitherRight};
pub use value::Either;
pub(crate) use value::none_state;

static_assertions::assert_impl_all!(Either<String, Vec<u8>>: Send, Sync);
static_assertions::assert_impl_all!(EitherLeft<String>: Send, Sync);
static_assertions::assert_impl_all!(EitherRight<String>: Send, Sync);
