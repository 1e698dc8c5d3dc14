//! Escalation of a domain error into a fault.

use super::domain_error::DomainError;
use super::error::Error;

/// A domain error that a caller decided cannot legitimately happen.
///
/// Domain errors normally travel as values. At a trust boundary (for example
/// when rehydrating state that was validated before it was stored) a caller
/// may assert that a failure is impossible; if it happens anyway the error is
/// wrapped here and either returned through [`Result::escalate`](super::Result::escalate)
/// or raised as a panic through [`DomainInvariantError::raise`].
///
/// # Examples
///
/// ```rust
/// use domain_kernel::errs::{DomainInvariantError, Error};
///
/// let fault = DomainInvariantError::new(Error::new("x", "y"));
/// assert_eq!(
///     fault.to_string(),
///     "Domain invariant violated: Error{code='x', message='y'}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Domain invariant violated: {error}")]
pub struct DomainInvariantError<E: DomainError = Error> {
    error: E,
}

impl<E: DomainError> DomainInvariantError<E> {
    /// Wraps `error` as a fault.
    #[must_use]
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Returns the wrapped domain error.
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Unwraps the domain error.
    #[must_use]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Terminates the current operation with this fault.
    ///
    /// # Panics
    ///
    /// Always panics, with the fault's display text as the message.
    #[track_caller]
    pub fn raise(self) -> ! {
        tracing::error!(
            code = self.error.code(),
            message = self.error.message(),
            "domain invariant violated"
        );
        panic!("{self}")
    }
}
