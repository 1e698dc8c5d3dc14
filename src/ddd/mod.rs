//! Domain-driven design building blocks.
//!
//! - [`Entity`]: identity-based equality and ordering
//! - [`ValueObject`]: component-based equality, hashing and ordering
//! - [`Aggregate`] and [`DomainEvents`]: entities that buffer the events they raise
//! - [`DomainEvent`] and [`EventMetadata`]: event id and UTC timestamp
//! - [`DomainEventPublisher`]: hands buffered events to the application
//!
//! The [`impl_entity_identity!`](crate::impl_entity_identity) and
//! [`impl_value_object!`](crate::impl_value_object) macros derive the
//! comparison traits from these definitions.

pub mod entity;
pub mod value_object;

mod aggregate;
mod event;
mod publisher;

pub use aggregate::{Aggregate, DomainEvents};
pub use entity::Entity;
pub use event::{DomainEvent, EventMetadata};
pub use publisher::{ApplicationEventPublisher, DefaultDomainEventPublisher, DomainEventPublisher};
pub use value_object::ValueObject;
