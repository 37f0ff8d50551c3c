//! OpenWeatherMap error types

use thiserror::Error;

/// Errors that can occur when talking to OpenWeatherMap
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The city name did not match any known location
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// API key is missing or was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The response body reported a non-success `cod`
    #[error("Upstream error {code}: {message}")]
    Upstream {
        /// Status code carried in the body
        code: String,
        /// Upstream message, if any
        message: String,
    },

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
