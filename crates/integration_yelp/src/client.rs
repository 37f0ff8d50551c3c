//! Yelp Fusion API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, instrument};

use crate::{
    config::YelpConfig,
    error::YelpError,
    models::{Business, api},
};

/// Search for businesses near a point
#[async_trait]
pub trait BusinessSearch: Send + Sync {
    /// Return up to the configured limit of businesses around a location,
    /// in the order Yelp ranks them
    ///
    /// An empty match is reported as [`YelpError::NoResults`].
    async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Business>, YelpError>;
}

/// Yelp Fusion business search client
pub struct YelpFusionClient {
    client: Client,
    api_key: String,
    config: YelpConfig,
}

impl std::fmt::Debug for YelpFusionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YelpFusionClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl YelpFusionClient {
    /// Create a new Yelp client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or HTTP client cannot be created.
    pub fn new(config: YelpConfig) -> Result<Self, YelpError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| YelpError::ConfigurationError("Yelp API key is required".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| YelpError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn search_url(&self) -> String {
        format!(
            "{}/businesses/search",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn search_params(&self, latitude: f64, longitude: f64) -> [(&'static str, String); 4] {
        [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("categories", self.config.category.clone()),
            ("limit", self.config.limit.to_string()),
        ]
    }

    fn map_send_error(&self, e: &reqwest::Error) -> YelpError {
        if e.is_timeout() {
            YelpError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if e.is_connect() {
            YelpError::ConnectionFailed(e.to_string())
        } else {
            YelpError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl BusinessSearch for YelpFusionClient {
    #[instrument(skip(self), fields(category = %self.config.category))]
    async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Business>, YelpError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(YelpError::InvalidCoordinates);
        }

        let url = self.search_url();
        debug!(url = %url, "Sending Yelp business search");

        let response = self
            .client
            .get(&url)
            .query(&self.search_params(latitude, longitude))
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT_LANGUAGE, &self.config.accept_language)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        debug!(status = %status, "Received Yelp response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(YelpError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(YelpError::AuthenticationFailed(format!(
                "Yelp rejected the API key (HTTP {status})"
            )));
        }

        if status.is_server_error() {
            return Err(YelpError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(YelpError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let api_response: api::SearchResponse = response
            .json()
            .await
            .map_err(|e| YelpError::ParseError(e.to_string()))?;

        let businesses: Vec<Business> = api_response
            .businesses
            .unwrap_or_default()
            .into_iter()
            .take(usize::from(self.config.limit))
            .map(Business::from)
            .collect();

        if businesses.is_empty() {
            return Err(YelpError::NoResults {
                latitude,
                longitude,
            });
        }

        debug!(results = businesses.len(), "Yelp search completed");
        Ok(businesses)
    }
}
