//! The optional value wrapper.
//!
//! - [`Optional`]: a value that is either present (`Some`) or absent (`None`)
//!
//! # Examples
//!
//! ```rust
//! use railway::option::Optional;
//!
//! let name = Optional::some("railway".to_string());
//! let length = name.map(|name| name.len()).value_or(0);
//! assert_eq!(length, 7);
//! ```

mod combinators;
mod optional;

pub use optional::Optional;

static_assertions::assert_impl_all!(Optional<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
