//! Result type - a success value or a domain error.
//!
//! This module provides [`Result<T, E>`], which holds exactly one of a success
//! value of type `T` or a failure error of type `E`. It is the return type of
//! every domain operation that can fail for business reasons.
//!
//! Unlike `std::result::Result`, the representation is private: values are
//! created through [`Result::success`], [`Result::success_void`] and
//! [`Result::failure`] (or converted from a standard result), and reading the
//! wrong side panics instead of returning a default.
//!
//! # Examples
//!
//! ```rust
//! use domain_kernel::errs::{Error, Result};
//!
//! let success: Result<i32> = Result::success(21);
//! assert_eq!(success.map(|x| x * 2).get_value_or_throw(), 42);
//!
//! let failure: Result<i32> = Result::failure(Error::new("x", "y"));
//! let text = failure.fold(|value| value.to_string(), |error| error.serialize());
//! assert_eq!(text, "x||y");
//! ```

use std::fmt;

use super::domain_error::DomainError;
use super::error::Error;
use super::invariant::DomainInvariantError;

/// The outcome of an operation that either produced a value or failed with a
/// domain error.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type, a member of the [`DomainError`] family ([`Error`] by default)
///
/// # Examples
///
/// ```rust
/// use domain_kernel::errs::{GeneralErrors, Result};
///
/// fn find_order(id: u32) -> Result<&'static str> {
///     if id == 7 {
///         Result::success("pizza")
///     } else {
///         Result::failure(GeneralErrors::not_found("order", id))
///     }
/// }
///
/// assert!(find_order(7).is_success());
/// assert_eq!(find_order(8).error().code(), "record.not.found");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Result` may hold a domain error, which should be handled"]
pub struct Result<T, E: DomainError = Error> {
    outcome: Outcome<T, E>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E: DomainError> Result<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful result carrying `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            outcome: Outcome::Success(value),
        }
    }

    /// Creates a failed result carrying `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self {
            outcome: Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this result holds a value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Returns `true` if this result holds an error.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failure(_))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::Result;
    ///
    /// let result: Result<i32> = Result::success(3);
    /// assert_eq!(*result.value(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("Cannot get value from failure"),
        }
    }

    /// Returns a reference to the error.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.outcome {
            Outcome::Success(_) => panic!("Cannot get error from success"),
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the success value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("Cannot get value from failure"),
        }
    }

    /// Returns the error, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.outcome {
            Outcome::Success(_) => panic!("Cannot get error from success"),
            Outcome::Failure(error) => error,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value.
    ///
    /// A failure is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::{Error, Result};
    ///
    /// let success: Result<&str> = Result::success("hello");
    /// assert_eq!(success.map(str::len), Result::success(5));
    ///
    /// let failure: Result<&str> = Result::failure(Error::new("x", "y"));
    /// assert_eq!(failure.map(str::len), Result::failure(Error::new("x", "y")));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.outcome {
            Outcome::Success(value) => Result::success(function(value)),
            Outcome::Failure(error) => Result::failure(error),
        }
    }

    /// Chains an operation that can itself fail.
    ///
    /// On success returns `function(value)`; a failure is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::{Guard, Result};
    ///
    /// fn positive(value: i32) -> Result<i32> {
    ///     Guard::against_less_or_equal(value, 0, "value")
    ///         .map_or_else(|| Result::success(value), Result::failure)
    /// }
    ///
    /// assert_eq!(positive(3).flat_map(|x| positive(x - 1)).into_value(), 2);
    /// assert!(positive(1).flat_map(|x| positive(x - 1)).is_failure());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.outcome {
            Outcome::Success(value) => function(value),
            Outcome::Failure(error) => Result::failure(error),
        }
    }

    /// Applies `function` to the error, leaving a success untouched.
    ///
    /// The error type may change to any other member of the error family.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Result<T, E2>
    where
        E2: DomainError,
        F: FnOnce(E) -> E2,
    {
        match self.outcome {
            Outcome::Success(value) => Result::success(value),
            Outcome::Failure(error) => Result::failure(function(error)),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Calls `handler` with the value on success, then returns `self` unchanged.
    #[inline]
    pub fn on_success<F>(self, handler: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self.outcome {
            handler(value);
        }
        self
    }

    /// Calls `handler` with the error on failure, then returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::{Error, Result};
    ///
    /// let mut seen = Vec::new();
    /// let result: Result<i32> = Result::failure(Error::new("x", "y"));
    /// let result = result
    ///     .on_success(|_| seen.push("success"))
    ///     .on_failure(|error| println!("{error}"));
    /// assert!(seen.is_empty());
    /// assert!(result.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<F>(self, handler: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self.outcome {
            handler(error);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Reduces the result to a single value by calling exactly one of the functions.
    #[inline]
    pub fn fold<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self.outcome {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Returns the value, escalating a failure into a [`DomainInvariantError`].
    ///
    /// Use only where the caller asserts that failure is impossible or
    /// unrecoverable at this point.
    ///
    /// # Panics
    ///
    /// Panics with `Domain invariant violated: <error>` if this is a failure.
    #[inline]
    #[track_caller]
    pub fn get_value_or_throw(self) -> T {
        match self.outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => DomainInvariantError::new(error).raise(),
        }
    }

    /// Converts a failure into a [`DomainInvariantError`] without panicking.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::{DomainInvariantError, Error, Result};
    ///
    /// fn boundary(result: Result<u8>) -> std::result::Result<u8, DomainInvariantError> {
    ///     let value = result.escalate()?;
    ///     Ok(value + 1)
    /// }
    ///
    /// assert_eq!(boundary(Result::success(1)), Ok(2));
    /// assert!(boundary(Result::failure(Error::new("x", "y"))).is_err());
    /// ```
    #[inline]
    pub fn escalate(self) -> std::result::Result<T, DomainInvariantError<E>> {
        match self.outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(DomainInvariantError::new(error)),
        }
    }
}

impl<E: DomainError> Result<(), E> {
    /// Creates a successful result with no meaningful value.
    #[inline]
    pub const fn success_void() -> Self {
        Self::success(())
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug, E: DomainError> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Outcome::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: DomainError> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Success(value) => write!(formatter, "Success({value})"),
            Outcome::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E: DomainError> From<std::result::Result<T, E>> for Result<T, E> {
    /// `Ok(v)` becomes a success and `Err(e)` a failure.
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E: DomainError> From<Result<T, E>> for std::result::Result<T, E> {
    /// A success becomes `Ok(v)` and a failure `Err(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result.outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
