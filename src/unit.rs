//! The `Unit` type - a value carrying no information.
//!
//! [`Unit`] stands in for "no meaningful return value" wherever a wrapper
//! needs a payload type, e.g. `OutcomeOf<Unit>`.

use std::fmt;

/// The single value of a type with no information.
///
/// All `Unit` values are equal and order equally.
///
/// # Examples
///
/// ```rust
/// use railway::Unit;
///
/// assert_eq!(Unit, Unit::default());
/// assert_eq!(format!("{}", Unit), "()");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The unit value.
    pub const VALUE: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
