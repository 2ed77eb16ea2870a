//! Opaque error context carried by warnings and failures.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A shared, opaque error value attached to a warning or failure.
///
/// The crate never interprets an `Exception`; it only stores it and carries
/// it across conversions. Cloning shares the underlying error, and equality
/// is identity: two exceptions are equal only if they share the same error
/// object.
///
/// # Examples
///
/// ```rust
/// use railway::Exception;
///
/// let exception = Exception::from_message("disk full");
/// let shared = exception.clone();
/// assert_eq!(exception, shared);
/// assert_ne!(exception, Exception::from_message("disk full"));
/// assert_eq!(exception.to_string(), "disk full");
/// ```
#[derive(Clone)]
pub struct Exception(Arc<dyn Error + Send + Sync + 'static>);

impl Exception {
    /// Wraps an error.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Creates an exception carrying only a message.
    pub fn from_message(message: impl Into<String>) -> Self {
        let boxed: Box<dyn Error + Send + Sync> = message.into().into();
        Self(Arc::from(boxed))
    }

    /// Returns the wrapped error.
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Returns `true` if both exceptions share the same error object.
    pub fn same_as(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Exception {}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Exception").field(&self.0).finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl<E> From<E> for Exception
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
