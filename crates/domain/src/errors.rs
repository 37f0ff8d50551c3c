//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Location query was empty or whitespace only
    #[error("Location query must not be empty")]
    EmptyQuery,

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
