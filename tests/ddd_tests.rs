#![cfg(feature = "ddd")]
//! Integration tests for entities, aggregates and event publishing.

use std::cell::RefCell;

use domain_kernel::prelude::*;
use rstest::{fixture, rstest};
use uuid::Uuid;

// =============================================================================
// Test model
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum OrderEvent {
    Created { metadata: EventMetadata, order_id: Uuid },
    Completed { metadata: EventMetadata, order_id: Uuid },
}

impl OrderEvent {
    const fn metadata(&self) -> &EventMetadata {
        match self {
            Self::Created { metadata, .. } | Self::Completed { metadata, .. } => metadata,
        }
    }
}

impl DomainEvent for OrderEvent {
    fn event_id(&self) -> Uuid {
        self.metadata().event_id()
    }

    fn occurred_on_utc(&self) -> chrono::DateTime<chrono::Utc> {
        self.metadata().occurred_on_utc()
    }
}

#[derive(Debug, Clone)]
struct Order {
    id: Uuid,
    completed: bool,
    events: DomainEvents<OrderEvent>,
}

impl Order {
    fn create(id: Uuid) -> Result<Self> {
        if let Some(error) = Guard::against_null_or_empty_uuid(id, "order_id") {
            return Result::failure(error);
        }
        let mut order = Self {
            id,
            completed: false,
            events: DomainEvents::new(),
        };
        order.events.raise(OrderEvent::Created {
            metadata: EventMetadata::new(),
            order_id: id,
        });
        Result::success(order)
    }

    fn complete(&mut self) -> UnitResult {
        if self.completed {
            return UnitResult::failure(Error::new("order.already.completed", "Order is already completed"));
        }
        self.completed = true;
        self.events.raise(OrderEvent::Completed {
            metadata: EventMetadata::new(),
            order_id: self.id,
        });
        UnitResult::success()
    }
}

impl Entity for Order {
    type Id = Uuid;

    fn id(&self) -> Option<&Uuid> {
        Some(&self.id)
    }

    fn is_transient(&self) -> bool {
        self.id == Guard::EMPTY_UUID
    }
}

impl_entity_identity!(Order);

impl Aggregate for Order {
    type Event = OrderEvent;

    fn domain_events(&self) -> &[OrderEvent] {
        self.events.as_slice()
    }

    fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}

#[derive(Default)]
struct RecordingPublisher {
    published: RefCell<Vec<Uuid>>,
    fail_on: Option<usize>,
}

impl ApplicationEventPublisher<OrderEvent> for RecordingPublisher {
    fn publish_event(&self, event: &OrderEvent) -> UnitResult {
        let mut published = self.published.borrow_mut();
        if self.fail_on == Some(published.len()) {
            return UnitResult::failure(Error::new("broker.unavailable", "Broker is unavailable"));
        }
        published.push(event.event_id());
        UnitResult::success()
    }
}

#[fixture]
fn completed_order() -> Order {
    let mut order = Order::create(Uuid::new_v4()).get_value_or_throw();
    order.complete().get_or_else_throw();
    order
}

// =============================================================================
// Entity identity
// =============================================================================

#[rstest]
fn test_orders_with_same_id_are_equal_regardless_of_state(completed_order: Order) {
    let mut reloaded = completed_order.clone();
    reloaded.completed = false;
    reloaded.clear_domain_events();

    assert_eq!(reloaded, completed_order);
}

#[rstest]
fn test_nil_id_is_rejected_at_creation() {
    assert_eq!(Order::create(Uuid::nil()).error().code(), "value.is.required");
}

#[rstest]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn test_nil_id_order_has_no_ordering(completed_order: Order) {
    let draft = Order {
        id: Uuid::nil(),
        completed: false,
        events: DomainEvents::new(),
    };

    assert_eq!(draft.partial_cmp(&completed_order), None);
    assert_eq!(completed_order.partial_cmp(&draft), None);
    assert!(!(draft < completed_order));
    assert!(!(draft > completed_order));
    assert_ne!(draft, draft.clone());
}

// =============================================================================
// Aggregate events
// =============================================================================

#[rstest]
fn test_events_are_buffered_in_raise_order(completed_order: Order) {
    let events = completed_order.domain_events();

    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], OrderEvent::Created { .. }));
    assert!(matches!(events[1], OrderEvent::Completed { .. }));
    assert_ne!(events[0].event_id(), events[1].event_id());
}

#[rstest]
fn test_rejected_command_raises_no_event(mut completed_order: Order) {
    let result = completed_order.complete();

    assert_eq!(result.error().code(), "order.already.completed");
    assert_eq!(completed_order.domain_events().len(), 2);
}

// =============================================================================
// Publishing
// =============================================================================

#[rstest]
fn test_publishes_every_event_in_order(completed_order: Order) {
    let second = Order::create(Uuid::new_v4()).get_value_or_throw();
    let publisher = DefaultDomainEventPublisher::new(RecordingPublisher::default());

    let result = publisher.publish([&completed_order, &second]);

    assert!(result.is_success());
    let expected: Vec<Uuid> = completed_order
        .domain_events()
        .iter()
        .chain(second.domain_events())
        .map(DomainEvent::event_id)
        .collect();
    assert_eq!(*publisher.publisher().published.borrow(), expected);
}

#[rstest]
fn test_publishing_does_not_clear_buffers(completed_order: Order) {
    let publisher = DefaultDomainEventPublisher::new(RecordingPublisher::default());

    assert!(publisher.publish([&completed_order]).is_success());
    assert_eq!(completed_order.domain_events().len(), 2);
}

#[rstest]
fn test_stops_at_first_failed_publish(completed_order: Order) {
    let publisher = DefaultDomainEventPublisher::new(RecordingPublisher {
        published: RefCell::default(),
        fail_on: Some(1),
    });

    let result = publisher.publish(std::iter::once(&completed_order));

    assert_eq!(result.error().code(), "broker.unavailable");
    assert_eq!(publisher.publisher().published.borrow().len(), 1);
}

#[rstest]
fn test_closure_publisher(completed_order: Order) {
    let count = RefCell::new(0);
    let publisher = DefaultDomainEventPublisher::new(|_: &OrderEvent| {
        *count.borrow_mut() += 1;
        UnitResult::success()
    });

    let result = publisher.publish(&[completed_order]);

    assert!(result.is_success());
    assert_eq!(*count.borrow(), 2);
}
