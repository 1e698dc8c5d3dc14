//! Explicit success/failure handling for domain code.
//!
//! This module provides the failure-handling contract that entities, value
//! objects and application services build on:
//!
//! - [`Error`]: An immutable (code, message) pair with a `code||message` wire form
//! - [`GeneralErrors`]: Factories for the common violation shapes
//! - [`Guard`]: Precondition checks returning `Option<Error>`
//! - [`Result`]: A value or an error, with composition operators
//! - [`UnitResult`]: The value-less variant of `Result`
//! - [`DomainInvariantError`]: Escalation of a domain error into a fault
//!
//! # Two tiers of failure
//!
//! Domain errors (validation failures, business-rule violations, missing
//! records) travel as values through `Result` and `UnitResult`. Only misuse of
//! the containers themselves and explicit escalation through
//! [`Result::get_value_or_throw`], [`UnitResult::get_or_else_throw`] or
//! [`Error::throw_if`] panic.
//!
//! # Examples
//!
//! ```rust
//! use domain_kernel::errs::{Error, Guard, Result};
//!
//! fn create_name(value: &str) -> Result<String> {
//!     if let Some(error) = Guard::against_null_or_empty(value, "name") {
//!         return Result::failure(error);
//!     }
//!     Result::success(value.trim().to_string())
//! }
//!
//! let greeting = create_name("  Ada ")
//!     .map(|name| format!("Hello, {name}"))
//!     .fold(|text| text, |error: Error| error.serialize());
//! assert_eq!(greeting, "Hello, Ada");
//!
//! let failure = create_name("   ");
//! assert_eq!(failure.error().serialize(), "value.is.required||Value is required for name");
//! ```

mod domain_error;
mod error;
mod general_errors;
mod guard;
mod invariant;
mod result;
mod unit_result;

pub use domain_error::DomainError;
pub use error::{Error, ErrorFormatError};
pub use general_errors::GeneralErrors;
pub use guard::{Guard, Scalar};
pub use invariant::DomainInvariantError;
pub use result::Result;
pub use unit_result::UnitResult;

static_assertions::assert_impl_all!(Error: Send, Sync);
static_assertions::assert_impl_all!(Result<String>: Send, Sync);
static_assertions::assert_impl_all!(UnitResult: Send, Sync);
static_assertions::assert_impl_all!(DomainInvariantError: Send, Sync, std::error::Error);
