//! Delivery Sample Application
//!
//! The courier side of a food-delivery service, modeled with domain-kernel.
//!
//! # Architecture
//!
//! - **Domain Layer**: value objects (`Location`, `Volume`) and the
//!   `StoragePlace` entity, all validated through `Guard` checks
//! - **Infrastructure Layer**: environment-driven configuration and the
//!   tracing bootstrap
//!
//! # domain-kernel Features Used
//!
//! - `Result` / `UnitResult` for expected failures
//! - `Guard` and `GeneralErrors` for constructor validation
//! - `impl_value_object!` and `impl_entity_identity!` for equality semantics

pub mod domain;
pub mod infrastructure;
