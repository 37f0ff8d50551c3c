//! Yelp adapter - Implements PlacesPort using integration_yelp

use application::error::ApplicationError;
use application::ports::PlacesPort;
use async_trait::async_trait;
use domain::{GeoLocation, Place};
use integration_yelp::{Business, BusinessSearch, YelpConfig, YelpError, YelpFusionClient};
use tracing::{debug, instrument};

/// Adapter for nearby restaurant search via Yelp Fusion
pub struct YelpPlacesAdapter {
    client: YelpFusionClient,
}

impl std::fmt::Debug for YelpPlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YelpPlacesAdapter")
            .field("client", &"YelpFusionClient")
            .finish()
    }
}

impl YelpPlacesAdapter {
    /// Create the adapter from a client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to initialize.
    pub fn new(config: YelpConfig) -> Result<Self, ApplicationError> {
        let client = YelpFusionClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: YelpError) -> ApplicationError {
        match err {
            YelpError::ConnectionFailed(e)
            | YelpError::RequestFailed(e)
            | YelpError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            e @ (YelpError::Timeout { .. } | YelpError::NoResults { .. }) => {
                ApplicationError::ExternalService(e.to_string())
            },
            YelpError::ParseError(e) => ApplicationError::Internal(e),
            YelpError::AuthenticationFailed(e) | YelpError::ConfigurationError(e) => {
                ApplicationError::Configuration(e)
            },
            YelpError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
            YelpError::InvalidCoordinates => {
                ApplicationError::InvalidInput("Invalid coordinates".into())
            },
        }
    }

    fn map_business(business: Business) -> Place {
        Place {
            name: business.name,
            address: business.address,
        }
    }
}

#[async_trait]
impl PlacesPort for YelpPlacesAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn nearby_restaurants(
        &self,
        location: GeoLocation,
    ) -> Result<Vec<Place>, ApplicationError> {
        match self
            .client
            .search_nearby(location.latitude(), location.longitude())
            .await
        {
            Ok(businesses) => {
                debug!(count = businesses.len(), "Retrieved nearby businesses");
                Ok(businesses.into_iter().map(Self::map_business).collect())
            },
            Err(e) if e.is_empty_result() => {
                debug!("Yelp search matched no businesses");
                Ok(Vec::new())
            },
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
