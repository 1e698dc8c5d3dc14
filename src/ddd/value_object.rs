//! Value-object semantics.
//!
//! A value object has no identity: it is equal to any other value of the same
//! type with the same equality components, and it orders lexicographically by
//! those components.
//!
//! # Examples
//!
//! ```rust
//! use domain_kernel::ddd::ValueObject;
//! use domain_kernel::impl_value_object;
//!
//! #[derive(Debug)]
//! struct Money {
//!     amount: i64,
//!     currency: &'static str,
//! }
//!
//! impl ValueObject for Money {
//!     type Components = (&'static str, i64);
//!
//!     fn equality_components(&self) -> Self::Components {
//!         (self.currency, self.amount)
//!     }
//! }
//!
//! impl_value_object!(Money);
//!
//! let ten = Money { amount: 10, currency: "EUR" };
//! assert_eq!(ten, Money { amount: 10, currency: "EUR" });
//! assert!(ten < Money { amount: 11, currency: "EUR" });
//! assert!(ten > Money { amount: 99, currency: "CHF" });
//! ```

use std::cmp::Ordering;

/// A domain value defined entirely by its components.
pub trait ValueObject {
    /// The ordered tuple of components that decides equality and ordering.
    type Components: PartialEq + PartialOrd;

    /// Returns the equality components in significance order.
    fn equality_components(&self) -> Self::Components;
}

/// Total comparison of two component sets.
///
/// # Panics
///
/// Panics with `Fields must be comparable types` when the components have no
/// defined order (for example a `NaN` float).
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use domain_kernel::ddd::value_object::compare;
///
/// assert_eq!(compare(&(1, 2.5), &(1, 3.0)), Ordering::Less);
/// ```
///
/// ```rust,should_panic
/// use domain_kernel::ddd::value_object::compare;
///
/// let _ = compare(&(1, f64::NAN), &(1, 0.0));
/// ```
#[must_use]
#[track_caller]
pub fn compare<C: PartialOrd>(left: &C, right: &C) -> Ordering {
    match left.partial_cmp(right) {
        Some(ordering) => ordering,
        None => panic!("Fields must be comparable types"),
    }
}

/// Implements `PartialEq`, `Eq`, `Hash`, `PartialOrd` and `Ord` for a
/// [`ValueObject`] from its equality components.
///
/// The components must be `Eq + Ord + Hash`; for components without a total
/// order (floats) implement the traits by hand on top of [`compare`].
#[macro_export]
macro_rules! impl_value_object {
    ($value:ty) => {
        impl ::core::cmp::PartialEq for $value {
            fn eq(&self, other: &Self) -> bool {
                $crate::ddd::ValueObject::equality_components(self)
                    == $crate::ddd::ValueObject::equality_components(other)
            }
        }

        impl ::core::cmp::Eq for $value {}

        impl ::core::hash::Hash for $value {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(
                    &$crate::ddd::ValueObject::equality_components(self),
                    state,
                );
            }
        }

        impl ::core::cmp::PartialOrd for $value {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $value {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $crate::ddd::value_object::compare(
                    &$crate::ddd::ValueObject::equality_components(self),
                    &$crate::ddd::ValueObject::equality_components(other),
                )
            }
        }
    };
}
