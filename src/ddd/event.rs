//! Domain events and their metadata.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Something that happened in the domain, recorded by an aggregate.
///
/// Events are immutable once raised. Implementors usually embed an
/// [`EventMetadata`] and delegate to it.
pub trait DomainEvent {
    /// Unique id of this occurrence.
    fn event_id(&self) -> Uuid;

    /// When the event happened, in UTC.
    fn occurred_on_utc(&self) -> DateTime<Utc>;
}

/// Identity and timestamp stamped on every domain event.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::ddd::{DomainEvent, EventMetadata};
///
/// let first = EventMetadata::new();
/// let second = EventMetadata::new();
///
/// assert_ne!(first.event_id(), second.event_id());
/// assert!(first.occurred_on_utc() <= second.occurred_on_utc());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventMetadata {
    event_id: Uuid,
    occurred_on_utc: DateTime<Utc>,
}

impl EventMetadata {
    /// Stamps a new occurrence with a random v4 id and the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_on_utc: Utc::now(),
        }
    }

    /// Rebuilds metadata from stored values.
    #[must_use]
    pub const fn from_parts(event_id: Uuid, occurred_on_utc: DateTime<Utc>) -> Self {
        Self {
            event_id,
            occurred_on_utc,
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for EventMetadata {
    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn occurred_on_utc(&self) -> DateTime<Utc> {
        self.occurred_on_utc
    }
}
