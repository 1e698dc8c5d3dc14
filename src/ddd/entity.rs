//! Entity identity semantics.
//!
//! An entity is defined by its identity rather than its attributes. Two
//! entities are equal when they are of the same type and carry the same
//! persisted id; attribute values are ignored.
//!
//! # Rules
//!
//! - Comparing a value with itself (same address) is always equal.
//! - A transient entity (no id yet) is never equal to another entity.
//! - Otherwise the ids are compared.
//! - Ordering follows the ids and is undefined (`None`) when either side is
//!   transient.
//!
//! Equality across entity types does not compile, which is the type-exact
//! check.
//!
//! # Examples
//!
//! ```rust
//! use domain_kernel::ddd::Entity;
//! use domain_kernel::impl_entity_identity;
//!
//! struct Courier {
//!     id: Option<u32>,
//!     name: String,
//! }
//!
//! impl Entity for Courier {
//!     type Id = u32;
//!
//!     fn id(&self) -> Option<&u32> {
//!         self.id.as_ref()
//!     }
//! }
//!
//! impl_entity_identity!(Courier);
//!
//! let alice = Courier { id: Some(1), name: "Alice".to_string() };
//! let renamed = Courier { id: Some(1), name: "Alicia".to_string() };
//! let draft = Courier { id: None, name: "Alice".to_string() };
//!
//! assert!(alice == renamed);
//! assert!(alice != draft);
//! assert!(alice < Courier { id: Some(2), name: String::new() });
//! ```

use std::cmp::Ordering;
use std::ptr;

/// A domain object identified by an id.
pub trait Entity {
    /// The identity type.
    type Id: PartialEq + PartialOrd;

    /// Returns the id, or `None` while the entity is transient.
    fn id(&self) -> Option<&Self::Id>;

    /// Returns `true` while the entity has no persisted identity.
    ///
    /// Override when the id type has a placeholder value (such as the nil
    /// UUID) that also means "not yet assigned".
    fn is_transient(&self) -> bool {
        self.id().is_none()
    }
}

/// Identity equality for two entities of the same type.
#[must_use]
pub fn identity_eq<T: Entity + ?Sized>(left: &T, right: &T) -> bool {
    if ptr::eq(left, right) {
        return true;
    }
    if left.is_transient() || right.is_transient() {
        return false;
    }
    match (left.id(), right.id()) {
        (Some(left_id), Some(right_id)) => left_id == right_id,
        _ => false,
    }
}

/// Identity ordering for two entities of the same type.
///
/// Returns `None` when either entity is transient.
#[must_use]
pub fn identity_cmp<T: Entity + ?Sized>(left: &T, right: &T) -> Option<Ordering> {
    if ptr::eq(left, right) {
        return Some(Ordering::Equal);
    }
    if left.is_transient() || right.is_transient() {
        return None;
    }
    match (left.id(), right.id()) {
        (Some(left_id), Some(right_id)) => left_id.partial_cmp(right_id),
        _ => None,
    }
}

/// Implements `PartialEq` and `PartialOrd` for an [`Entity`] through
/// [`identity_eq`] and [`identity_cmp`].
///
/// No `Eq` or `Hash`: a transient entity is not equal to a copy of itself.
#[macro_export]
macro_rules! impl_entity_identity {
    ($entity:ty) => {
        impl ::core::cmp::PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                $crate::ddd::entity::identity_eq(self, other)
            }
        }

        impl ::core::cmp::PartialOrd for $entity {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::ddd::entity::identity_cmp(self, other)
            }
        }
    };
}
