//! OpenWeatherMap adapter - Implements GeocodingPort and WeatherPort
//!
//! Both ports are served by the same current-weather endpoint: geocoding
//! queries it by city name and keeps only the coordinates.

use application::error::ApplicationError;
use application::ports::{GeocodingPort, WeatherPort};
use async_trait::async_trait;
use domain::{GeoLocation, LocationQuery, WeatherReport};
use integration_openweather::{
    CurrentConditions, HttpOpenWeatherClient, OpenWeatherClient, OpenWeatherConfig,
    OpenWeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap API
pub struct OpenWeatherAdapter {
    client: HttpOpenWeatherClient,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"HttpOpenWeatherClient")
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create the adapter from a client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = HttpOpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::CityNotFound(city) => ApplicationError::NotFound(city),
            OpenWeatherError::ConnectionFailed(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            e @ (OpenWeatherError::Upstream { .. } | OpenWeatherError::Timeout { .. }) => {
                ApplicationError::ExternalService(e.to_string())
            },
            OpenWeatherError::ParseError(e) => ApplicationError::Internal(e),
            OpenWeatherError::AuthenticationFailed(e) | OpenWeatherError::ConfigurationError(e) => {
                ApplicationError::Configuration(e)
            },
            OpenWeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            OpenWeatherError::InvalidCoordinates => {
                ApplicationError::InvalidInput("Invalid coordinates".into())
            },
        }
    }

    fn map_conditions(conditions: CurrentConditions) -> WeatherReport {
        WeatherReport {
            temperature: conditions.temperature,
            description: conditions.description,
        }
    }
}

#[async_trait]
impl GeocodingPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(query = %query))]
    async fn geocode(&self, query: &LocationQuery) -> Result<GeoLocation, ApplicationError> {
        let city = self
            .client
            .locate(query.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(name = ?city.name, lat = city.latitude, lon = city.longitude, "Geocoded city");
        Ok(GeoLocation::new(city.latitude, city.longitude)?)
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_weather(
        &self,
        location: GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        let conditions = self
            .client
            .current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(
            temperature = ?conditions.temperature,
            description = ?conditions.description,
            "Retrieved current weather"
        );
        Ok(Self::map_conditions(conditions))
    }
}
