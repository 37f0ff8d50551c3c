//! Logging infrastructure
//!
//! Sets up the `tracing` subscriber once per process. All output goes to
//! stderr so it never mixes with rendered results on stdout.

mod logging;

pub use logging::{TelemetryConfig, TelemetryError, init_logging};
