//! Aggregates and their domain-event buffer.

use std::slice;

use super::entity::Entity;
use super::event::DomainEvent;

/// Append-only buffer of events raised by an aggregate.
///
/// Events stay buffered, in the order they were raised, until the publishing
/// side calls [`clear`](Self::clear). Appending and clearing need `&mut`, so
/// an aggregate has a single writer.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::ddd::{DomainEvents, EventMetadata};
///
/// let mut events = DomainEvents::new();
/// events.raise(EventMetadata::new());
/// events.raise(EventMetadata::new());
///
/// assert_eq!(events.len(), 2);
/// events.clear();
/// assert!(events.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEvents<Ev> {
    events: Vec<Ev>,
}

impl<Ev> DomainEvents<Ev> {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends `event`.
    pub fn raise(&mut self, event: Ev) {
        self.events.push(event);
    }

    /// Returns the buffered events, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Ev] {
        &self.events
    }

    /// Drops every buffered event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` when no event is buffered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the buffered events, oldest first.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, Ev> {
        self.events.iter()
    }
}

impl<Ev> Default for DomainEvents<Ev> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Ev> IntoIterator for &'a DomainEvents<Ev> {
    type Item = &'a Ev;
    type IntoIter = slice::Iter<'a, Ev>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An entity that records the domain events it raises.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::ddd::{Aggregate, DomainEvents, Entity, EventMetadata};
///
/// struct Basket {
///     id: Option<u32>,
///     events: DomainEvents<EventMetadata>,
/// }
///
/// impl Entity for Basket {
///     type Id = u32;
///
///     fn id(&self) -> Option<&u32> {
///         self.id.as_ref()
///     }
/// }
///
/// impl Aggregate for Basket {
///     type Event = EventMetadata;
///
///     fn domain_events(&self) -> &[EventMetadata] {
///         self.events.as_slice()
///     }
///
///     fn clear_domain_events(&mut self) {
///         self.events.clear();
///     }
/// }
///
/// let mut basket = Basket { id: Some(1), events: DomainEvents::new() };
/// basket.events.raise(EventMetadata::new());
/// assert_eq!(basket.domain_events().len(), 1);
///
/// basket.clear_domain_events();
/// assert!(basket.domain_events().is_empty());
/// ```
pub trait Aggregate: Entity {
    /// The event type this aggregate raises.
    type Event: DomainEvent;

    /// Returns the events raised since the last clear, oldest first.
    fn domain_events(&self) -> &[Self::Event];

    /// Drops the buffered events once they have been published.
    fn clear_domain_events(&mut self);
}
