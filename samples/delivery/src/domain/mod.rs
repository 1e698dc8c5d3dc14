//! Domain layer for the delivery application.
//!
//! - `kernel` - value objects shared by every aggregate
//! - `courier` - the courier's storage places

pub mod courier;
pub mod kernel;

pub use courier::StoragePlace;
pub use kernel::{Location, Volume};
