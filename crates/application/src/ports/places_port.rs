//! Nearby places port

use async_trait::async_trait;
use domain::{GeoLocation, Place};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for searching restaurants around a point
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesPort: Send + Sync {
    /// Search restaurants near a location
    ///
    /// Results keep the upstream ranking. A search that matched nothing is
    /// `Ok` with an empty list.
    async fn nearby_restaurants(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<Place>, ApplicationError>;
}
