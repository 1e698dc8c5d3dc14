//! # domain-kernel
//!
//! Building blocks for modeling domain correctness in business applications.
//!
//! ## Overview
//!
//! Expected failures are values, not panics. The library provides:
//!
//! - **Results**: [`Result`](errs::Result) and [`UnitResult`](errs::UnitResult),
//!   success/failure containers with `map`, `flat_map`, `fold` and friends
//! - **Errors**: the [`Error`](errs::Error) value (code + message) and the
//!   [`GeneralErrors`](errs::GeneralErrors) factory catalogue
//! - **Guards**: [`Guard`](errs::Guard) precondition checks that turn invalid
//!   input into an `Error`
//! - **Escalation**: [`DomainInvariantError`](errs::DomainInvariantError) for the
//!   points where a caller asserts a failure cannot happen
//! - **DDD**: entity identity, value-object equality, aggregate event buffers
//!   and event publishing
//!
//! ## Feature Flags
//!
//! - `errs`: Result/Guard framework
//! - `ddd`: entity, value object and aggregate semantics
//! - `decimal`: `rust_decimal::Decimal` support in guards
//! - `serde`: wire-format serialization for `Error`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use domain_kernel::prelude::*;
//!
//! fn parse_volume(value: i32) -> Result<i32> {
//!     match Guard::against_less_than(value, 1, "volume") {
//!         Some(error) => Result::failure(error),
//!         None => Result::success(value),
//!     }
//! }
//!
//! let doubled = parse_volume(4).map(|volume| volume * 2);
//! assert_eq!(doubled.get_value_or_throw(), 8);
//!
//! let rejected = parse_volume(0);
//! assert_eq!(rejected.error().code(), "value.must.be.greater.or.equal");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. Note that it brings a
/// `Result` type into scope which shadows `std::result::Result`.
///
/// # Usage
///
/// ```rust
/// use domain_kernel::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "errs")]
    pub use crate::errs::*;

    #[cfg(feature = "errs")]
    pub use crate::combine_guards;

    #[cfg(feature = "ddd")]
    pub use crate::ddd::*;

    #[cfg(feature = "ddd")]
    pub use crate::{impl_entity_identity, impl_value_object};
}

#[cfg(feature = "errs")]
pub mod errs;

#[cfg(feature = "ddd")]
pub mod ddd;
