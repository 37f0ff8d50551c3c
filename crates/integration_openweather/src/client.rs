//! OpenWeatherMap HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::OpenWeatherConfig;
use crate::error::OpenWeatherError;
use crate::models::{ApiResponse, CityLocation, CurrentConditions};

const USER_AGENT: &str = concat!("CityBrief/", env!("CARGO_PKG_VERSION"));

/// Temperatures are always requested in Celsius
const UNITS: &str = "metric";

/// Client trait for the OpenWeatherMap current-weather endpoint
#[async_trait]
pub trait OpenWeatherClient: Send + Sync {
    /// Look up a city by name and return its coordinates
    async fn locate(&self, city: &str) -> Result<CityLocation, OpenWeatherError>;

    /// Get current conditions for a latitude/longitude pair
    async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, OpenWeatherError>;
}

/// reqwest-based OpenWeatherMap client
pub struct HttpOpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
    api_key: String,
}

impl std::fmt::Debug for HttpOpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOpenWeatherClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpOpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot
    /// be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                OpenWeatherError::ConfigurationError(
                    "OpenWeatherMap API key is required".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenWeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenWeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn map_send_error(&self, e: &reqwest::Error) -> OpenWeatherError {
        if e.is_timeout() {
            OpenWeatherError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if e.is_connect() {
            OpenWeatherError::ConnectionFailed(e.to_string())
        } else {
            OpenWeatherError::RequestFailed(e.to_string())
        }
    }

    fn current_params(&self, latitude: f64, longitude: f64) -> [(&'static str, String); 4] {
        [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("units", UNITS.to_string()),
            ("lang", self.config.lang.clone()),
        ]
    }

    /// Send a GET to `/weather` and return a body whose `cod` is 200
    async fn fetch(&self, params: &[(&str, String)]) -> Result<ApiResponse, OpenWeatherError> {
        let url = self.endpoint();
        debug!(url = %url, "Sending OpenWeatherMap request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        debug!(status = %status, "Received OpenWeatherMap response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(OpenWeatherError::AuthenticationFailed(
                "OpenWeatherMap rejected the API key".to_string(),
            ));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenWeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenWeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiResponse>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(text);
            return Err(OpenWeatherError::Upstream {
                code: status.as_u16().to_string(),
                message,
            });
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;

        match &body.cod {
            Some(cod) if cod.is_success() => Ok(body),
            Some(cod) => Err(OpenWeatherError::Upstream {
                code: cod.to_string(),
                message: body.message.clone().unwrap_or_default(),
            }),
            None => Err(OpenWeatherError::ParseError(
                "response carries no status code".to_string(),
            )),
        }
    }
}

#[async_trait]
impl OpenWeatherClient for HttpOpenWeatherClient {
    #[instrument(skip(self))]
    async fn locate(&self, city: &str) -> Result<CityLocation, OpenWeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(OpenWeatherError::CityNotFound(
                "city name must not be empty".to_string(),
            ));
        }

        let body = self
            .fetch(&[("q", city.to_string())])
            .await
            .map_err(|e| match e {
                OpenWeatherError::Upstream { ref code, .. } if code == "404" => {
                    OpenWeatherError::CityNotFound(city.to_string())
                },
                other => other,
            })?;

        let coord = body
            .coord
            .ok_or_else(|| OpenWeatherError::CityNotFound(city.to_string()))?;
        Self::validate_coordinates(coord.lat, coord.lon)?;

        debug!(lat = coord.lat, lon = coord.lon, "Located city");

        Ok(CityLocation {
            latitude: coord.lat,
            longitude: coord.lon,
            name: body.name.filter(|n| !n.is_empty()),
        })
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let params = self.current_params(latitude, longitude);
        let body = self.fetch(&params).await?;
        Ok(body.into_conditions())
    }
}
