//! Weather service port
//!
//! Defines the interface for current-conditions retrieval.

use async_trait::async_trait;
use domain::{GeoLocation, WeatherReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a location
    ///
    /// The report is returned as the upstream sent it; fields the upstream
    /// omitted stay `None`.
    async fn current_weather(
        &self,
        location: GeoLocation,
    ) -> Result<WeatherReport, ApplicationError>;
}
