#![cfg(feature = "ddd")]
//! Tests for the tracing events emitted by escalation and publishing.

use std::io;
use std::panic;
use std::sync::{Arc, Mutex};

use domain_kernel::prelude::*;
use rstest::rstest;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(directive: &str, action: F) -> String {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, action);
    output.contents()
}

struct Parcel {
    id: u32,
    events: DomainEvents<EventMetadata>,
}

impl Entity for Parcel {
    type Id = u32;

    fn id(&self) -> Option<&u32> {
        Some(&self.id)
    }
}

impl Aggregate for Parcel {
    type Event = EventMetadata;

    fn domain_events(&self) -> &[EventMetadata] {
        self.events.as_slice()
    }

    fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}

#[rstest]
fn test_raise_logs_at_error_level() {
    let logs = capture("error", || {
        let fault = DomainInvariantError::new(Error::new("storage.corrupted", "bad row"));
        let _ = panic::catch_unwind(move || {
            fault.raise();
        });
    });

    assert!(logs.contains("ERROR"));
    assert!(logs.contains("domain invariant violated"));
    assert!(logs.contains("storage.corrupted"));
}

#[rstest]
fn test_publish_logs_each_event_at_debug_level() {
    let mut parcel = Parcel { id: 1, events: DomainEvents::new() };
    let first = EventMetadata::new();
    parcel.events.raise(first);
    parcel.events.raise(EventMetadata::new());

    let logs = capture("debug", || {
        let publisher = DefaultDomainEventPublisher::new(|_: &EventMetadata| UnitResult::success());
        assert!(publisher.publish([&parcel]).is_success());
    });

    assert_eq!(logs.matches("publishing domain event").count(), 2);
    assert!(logs.contains(&first.event_id().to_string()));
}

#[rstest]
fn test_publish_is_silent_above_debug() {
    let mut parcel = Parcel { id: 2, events: DomainEvents::new() };
    parcel.events.raise(EventMetadata::new());

    let logs = capture("info", || {
        let publisher = DefaultDomainEventPublisher::new(|_: &EventMetadata| UnitResult::success());
        let _ = publisher.publish([&parcel]);
    });

    assert!(logs.is_empty());
}
