//! Shared value objects.

mod location;
mod volume;

pub use location::Location;
pub use volume::Volume;
