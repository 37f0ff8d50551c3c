//! Geocoding port
//!
//! Resolves a free-text location into coordinates.

use async_trait::async_trait;
use domain::{GeoLocation, LocationQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning a city name into a coordinate pair
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve the query to coordinates
    ///
    /// Returns [`ApplicationError::NotFound`] when the upstream has no match
    /// for the name; every other failure is some other variant.
    async fn geocode(&self, query: &LocationQuery) -> Result<GeoLocation, ApplicationError>;
}
