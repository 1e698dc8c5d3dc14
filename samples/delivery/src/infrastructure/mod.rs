//! Infrastructure layer for the delivery application.
//!
//! - `config` - application properties loaded from environment variables
//! - `telemetry` - tracing subscriber bootstrap

mod config;
mod telemetry;

pub use config::{
    ApplicationProperties, AutoOffsetReset, ConfigError, DbProperties, GeoProperties,
    KafkaConsumerProperties, KafkaProperties,
};
pub use telemetry::{env_filter, init_tracing};
