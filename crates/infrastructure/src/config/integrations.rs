//! Upstream service configuration: OpenWeatherMap and Yelp Fusion.

use integration_openweather::OpenWeatherConfig;
use integration_yelp::YelpConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeatherMap configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherAppConfig {
    /// API base URL
    #[serde(default = "default_openweather_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Language of condition descriptions
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenWeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_openweather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_lang() -> String {
    "es".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_openweather_base_url(),
            api_key: None,
            lang: default_lang(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenWeatherAppConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key_str().map(str::to_owned),
            lang: self.lang.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Yelp Fusion configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct YelpAppConfig {
    /// API base URL
    #[serde(default = "default_yelp_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Business category filter
    #[serde(default = "default_category")]
    pub category: String,

    /// Maximum number of places shown
    #[serde(default = "default_limit")]
    pub limit: u8,

    /// `Accept-Language` sent with each search
    #[serde(default = "default_lang")]
    pub accept_language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for YelpAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YelpAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("category", &self.category)
            .field("limit", &self.limit)
            .field("accept_language", &self.accept_language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_yelp_base_url() -> String {
    "https://api.yelp.com/v3".to_string()
}

fn default_category() -> String {
    "restaurants".to_string()
}

const fn default_limit() -> u8 {
    5
}

impl Default for YelpAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_yelp_base_url(),
            api_key: None,
            category: default_category(),
            limit: default_limit(),
            accept_language: default_lang(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl YelpAppConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> YelpConfig {
        YelpConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key_str().map(str::to_owned),
            category: self.category.clone(),
            limit: self.limit,
            accept_language: self.accept_language.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
