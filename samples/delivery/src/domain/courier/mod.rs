//! Courier model.

mod storage_place;

pub use storage_place::StoragePlace;
