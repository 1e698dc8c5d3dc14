//! The error family carried by results.

use std::fmt;

/// The family of error types a [`Result`](super::Result) or
/// [`UnitResult`](super::UnitResult) may carry.
///
/// [`Error`](super::Error) is the canonical member. Applications can define
/// richer error types (for instance an enum per bounded context) and still use
/// every combinator, as long as the type exposes a machine-readable code and a
/// human-readable message.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::errs::{DomainError, Result};
/// use std::fmt;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct InsufficientFunds;
///
/// impl fmt::Display for InsufficientFunds {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         formatter.write_str(self.message())
///     }
/// }
///
/// impl DomainError for InsufficientFunds {
///     fn code(&self) -> &str {
///         "funds.are.insufficient"
///     }
///
///     fn message(&self) -> &str {
///         "The account balance is too low"
///     }
/// }
///
/// let result: Result<u64, InsufficientFunds> = Result::failure(InsufficientFunds);
/// assert_eq!(result.error().code(), "funds.are.insufficient");
/// ```
pub trait DomainError: Clone + fmt::Debug + fmt::Display {
    /// Short machine-readable code, dot-separated (e.g. `value.is.required`).
    fn code(&self) -> &str;

    /// Human-readable description of the violation.
    fn message(&self) -> &str;
}
