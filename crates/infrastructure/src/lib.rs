//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer over the OpenWeatherMap
//! and Yelp clients, and provides configuration loading, environment
//! secrets and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, OpenWeatherAppConfig, YelpAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_logging};
