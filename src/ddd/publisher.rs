//! Forwarding of buffered domain events to the application.

use super::aggregate::Aggregate;
use super::event::DomainEvent;
use crate::errs::UnitResult;

/// Application-side sink for a single domain event.
///
/// Any `Fn(&Ev) -> UnitResult` is a publisher.
pub trait ApplicationEventPublisher<Ev> {
    /// Delivers `event`.
    fn publish_event(&self, event: &Ev) -> UnitResult;
}

impl<Ev, F> ApplicationEventPublisher<Ev> for F
where
    F: Fn(&Ev) -> UnitResult,
{
    fn publish_event(&self, event: &Ev) -> UnitResult {
        self(event)
    }
}

/// Publishes the events buffered in a batch of aggregates.
pub trait DomainEventPublisher<A: Aggregate> {
    /// Publishes the buffered events of every aggregate, in order.
    fn publish<'a, I>(&self, aggregates: I) -> UnitResult
    where
        I: IntoIterator<Item = &'a A>,
        A: 'a;
}

/// Forwards each buffered event to an [`ApplicationEventPublisher`].
///
/// Events are forwarded aggregate by aggregate, oldest first. Publishing
/// stops at the first failure, and that failure is returned. Buffers are
/// never cleared here; call [`Aggregate::clear_domain_events`] once the
/// batch is committed.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
///
/// use domain_kernel::ddd::{
///     Aggregate, DefaultDomainEventPublisher, DomainEventPublisher, DomainEvents, Entity,
///     EventMetadata,
/// };
/// use domain_kernel::errs::UnitResult;
///
/// struct Courier {
///     id: Option<u32>,
///     events: DomainEvents<EventMetadata>,
/// }
///
/// impl Entity for Courier {
///     type Id = u32;
///
///     fn id(&self) -> Option<&u32> {
///         self.id.as_ref()
///     }
/// }
///
/// impl Aggregate for Courier {
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
/// let mut courier = Courier { id: Some(1), events: DomainEvents::new() };
/// courier.events.raise(EventMetadata::new());
///
/// let delivered = RefCell::new(0);
/// let publisher = DefaultDomainEventPublisher::new(|_: &EventMetadata| {
///     *delivered.borrow_mut() += 1;
///     UnitResult::success()
/// });
///
/// assert!(publisher.publish([&courier]).is_success());
/// assert_eq!(*delivered.borrow(), 1);
/// assert_eq!(courier.domain_events().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DefaultDomainEventPublisher<P> {
    publisher: P,
}

impl<P> DefaultDomainEventPublisher<P> {
    /// Wraps the application publisher.
    pub const fn new(publisher: P) -> Self {
        Self { publisher }
    }

    /// Returns the wrapped application publisher.
    pub const fn publisher(&self) -> &P {
        &self.publisher
    }
}

impl<A, P> DomainEventPublisher<A> for DefaultDomainEventPublisher<P>
where
    A: Aggregate,
    P: ApplicationEventPublisher<A::Event>,
{
    fn publish<'a, I>(&self, aggregates: I) -> UnitResult
    where
        I: IntoIterator<Item = &'a A>,
        A: 'a,
    {
        for aggregate in aggregates {
            for event in aggregate.domain_events() {
                tracing::debug!(
                    event_id = %event.event_id(),
                    occurred_on_utc = %event.occurred_on_utc(),
                    "publishing domain event"
                );
                let published = self.publisher.publish_event(event);
                if published.is_failure() {
                    tracing::warn!(
                        event_id = %event.event_id(),
                        error = %published.error(),
                        "domain event publication failed"
                    );
                    return published;
                }
            }
        }
        UnitResult::success()
    }
}
