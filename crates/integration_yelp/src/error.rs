//! Yelp error types

use thiserror::Error;

/// Errors that can occur during a Yelp business search
#[derive(Debug, Error)]
pub enum YelpError {
    /// Connection to Yelp failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to Yelp failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from Yelp
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key is missing or invalid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Search succeeded but matched no businesses
    #[error("No businesses found near {latitude}, {longitude}")]
    NoResults {
        /// Search latitude
        latitude: f64,
        /// Search longitude
        longitude: f64,
    },

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

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

impl YelpError {
    /// Returns true when the search ran but found nothing
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }
}
