//! `UnitResult` - success or a domain error, with no success payload.

use std::fmt;

use super::domain_error::DomainError;
use super::error::Error;
use super::invariant::DomainInvariantError;
use super::result::Result;

/// The outcome of an operation that has nothing to return on success.
///
/// Commands that mutate an entity (`store`, `clear`, `assign`) return a
/// `UnitResult`. It converts losslessly to and from `Result<(), E>`.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::errs::{Error, UnitResult};
///
/// let checks = UnitResult::<Error>::success()
///     .merge(UnitResult::failure(Error::new("first", "1")))
///     .merge(UnitResult::failure(Error::new("second", "2")));
///
/// assert_eq!(checks.error().code(), "first");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[must_use = "this `UnitResult` may hold a domain error, which should be handled"]
pub struct UnitResult<E: DomainError = Error> {
    error: Option<E>,
}

impl<E: DomainError> UnitResult<E> {
    /// Creates a successful result.
    #[inline]
    pub const fn success() -> Self {
        Self { error: None }
    }

    /// Creates a failed result carrying `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self { error: Some(error) }
    }

    /// Returns `true` on success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` on failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Returns a reference to the error.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        let Some(error) = &self.error else {
            panic!("Cannot get error from success")
        };
        error
    }

    /// Returns the error, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        let Some(error) = self.error else {
            panic!("Cannot get error from success")
        };
        error
    }

    /// Calls `handler` on success, then returns `self` unchanged.
    #[inline]
    pub fn on_success<F>(self, handler: F) -> Self
    where
        F: FnOnce(),
    {
        if self.error.is_none() {
            handler();
        }
        self
    }

    /// Calls `handler` with the error on failure, then returns `self` unchanged.
    #[inline]
    pub fn on_failure<F>(self, handler: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Some(error) = &self.error {
            handler(error);
        }
        self
    }

    /// Reduces the result to a single value by calling exactly one of the functions.
    #[inline]
    pub fn fold<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce() -> U,
        G: FnOnce(E) -> U,
    {
        self.error.map_or_else(on_success, on_failure)
    }

    /// Combines two results: the first failure wins, success only if both succeed.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        if self.is_failure() {
            return self;
        }
        other
    }

    /// Like [`merge`](Self::merge), but `other` is only evaluated when `self` succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::{Error, UnitResult};
    ///
    /// let mut evaluated = false;
    /// let merged = UnitResult::failure(Error::new("x", "y")).merge_with(|| {
    ///     evaluated = true;
    ///     UnitResult::success()
    /// });
    ///
    /// assert!(merged.is_failure());
    /// assert!(!evaluated);
    /// ```
    #[inline]
    pub fn merge_with<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_failure() {
            return self;
        }
        other()
    }

    /// Builds a `UnitResult` from a `Result<(), E>`.
    #[inline]
    pub fn from_result(result: Result<(), E>) -> Self {
        result.fold(|()| Self::success(), Self::failure)
    }

    /// Converts into a `Result<(), E>`.
    #[inline]
    pub fn to_result(self) -> Result<(), E> {
        self.error.map_or_else(Result::success_void, Result::failure)
    }

    /// Returns on success and escalates a failure into a [`DomainInvariantError`].
    ///
    /// Use only where the caller asserts that failure is impossible by contract.
    ///
    /// # Panics
    ///
    /// Panics with `Domain invariant violated: <error>` if this is a failure.
    #[inline]
    #[track_caller]
    pub fn get_or_else_throw(self) {
        if let Some(error) = self.error {
            DomainInvariantError::new(error).raise();
        }
    }

    /// Returns on success and panics with the fault `mapper` builds from the error.
    ///
    /// # Panics
    ///
    /// Panics with the display text of `mapper(error)` if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use domain_kernel::errs::{Error, UnitResult};
    ///
    /// UnitResult::failure(Error::new("x", "y"))
    ///     .get_or_else_throw_with(|error| format!("storage corrupted: {}", error.code()));
    /// ```
    #[inline]
    #[track_caller]
    pub fn get_or_else_throw_with<X, F>(self, mapper: F)
    where
        X: fmt::Display,
        F: FnOnce(E) -> X,
    {
        if let Some(error) = self.error {
            let fault = mapper(error);
            tracing::error!(%fault, "unit result escalated");
            panic!("{fault}");
        }
    }

    /// Converts a failure into a [`DomainInvariantError`] without panicking.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if this is a failure.
    #[inline]
    pub fn escalate(self) -> std::result::Result<(), DomainInvariantError<E>> {
        self.error.map_or(Ok(()), |error| Err(DomainInvariantError::new(error)))
    }
}

impl<E: DomainError> Default for UnitResult<E> {
    fn default() -> Self {
        Self::success()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<E: DomainError> fmt::Debug for UnitResult<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(error) = &self.error else {
            return formatter.write_str("Success");
        };
        formatter.debug_tuple("Failure").field(error).finish()
    }
}

impl<E: DomainError> fmt::Display for UnitResult<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(error) = &self.error else {
            return formatter.write_str("Success");
        };
        write!(formatter, "Failure({error})")
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E: DomainError> From<Result<(), E>> for UnitResult<E> {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        Self::from_result(result)
    }
}

impl<E: DomainError> From<UnitResult<E>> for Result<(), E> {
    #[inline]
    fn from(result: UnitResult<E>) -> Self {
        result.to_result()
    }
}
