//! Application configuration
//!
//! Layered from built-in defaults, an optional TOML file and `CITYBRIEF_*`
//! environment variables. API keys missing from all three are looked up in
//! a secret store.
//!
//! - `integrations`: OpenWeatherMap and Yelp settings

mod integrations;

use std::path::Path;

use application::error::ApplicationError;
use application::ports::SecretStorePort;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::telemetry::TelemetryConfig;

pub use integrations::{OpenWeatherAppConfig, YelpAppConfig};

/// Prefix for environment overrides and environment secrets
pub const ENV_PREFIX: &str = "CITYBRIEF";

/// Secret store key of the OpenWeatherMap API key
pub const OPENWEATHER_API_KEY_SECRET: &str = "openweather.api_key";

/// Secret store key of the Yelp API key
pub const YELP_API_KEY_SECRET: &str = "yelp.api_key";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap (geocoding and weather)
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,

    /// Yelp Fusion (nearby restaurants)
    #[serde(default)]
    pub yelp: YelpAppConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and an optional file
    ///
    /// Without an explicit path, `config.toml` in the working directory is
    /// read if present. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., CITYBRIEF_YELP__LIMIT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Fill missing API keys from a secret store
    ///
    /// Keys already present in the file or the environment overrides are
    /// never replaced. A key the store does not have is left empty and
    /// reported by [`AppConfig::validate`].
    pub async fn resolve_secrets(&mut self, store: &dyn SecretStorePort) {
        if self.openweather.api_key.is_none() {
            self.openweather.api_key =
                Self::lookup_secret(store, OPENWEATHER_API_KEY_SECRET).await;
        }
        if self.yelp.api_key.is_none() {
            self.yelp.api_key = Self::lookup_secret(store, YELP_API_KEY_SECRET).await;
        }
        info!(
            openweather_key = self.openweather.api_key.is_some(),
            yelp_key = self.yelp.api_key.is_some(),
            "Secret resolution completed"
        );
    }

    async fn lookup_secret(store: &dyn SecretStorePort, key: &str) -> Option<SecretString> {
        match store.get_secret(key).await {
            Ok(value) if !value.trim().is_empty() => {
                debug!(key, "Loaded secret from secret store");
                Some(SecretString::from(value))
            },
            Ok(_) => {
                warn!(key, "Secret store returned an empty value");
                None
            },
            Err(e) => {
                warn!(key, error = %e, "Failed to resolve secret");
                None
            },
        }
    }

    /// Validate everything needed to build the HTTP clients
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.openweather
            .to_client_config()
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("openweather: {e}")))?;
        self.yelp
            .to_client_config()
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("yelp: {e}")))?;
        Ok(())
    }
}
