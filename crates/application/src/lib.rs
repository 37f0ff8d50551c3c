//! Application layer - Use cases and orchestration
//!
//! Defines the ports every collaborator is reached through and the services
//! that drive one city lookup: resolve the coordinates, fetch the weather and
//! the nearby restaurants, and hand both to the presenter.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
