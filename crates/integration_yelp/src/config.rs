//! Yelp client configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Yelp caps `limit` at 50 per request
const MAX_LIMIT: u8 = 50;

/// Configuration for the Yelp Fusion client
#[derive(Clone, Serialize, Deserialize)]
pub struct YelpConfig {
    /// API base URL (default: <https://api.yelp.com/v3>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as a bearer token
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Business category filter
    #[serde(default = "default_category")]
    pub category: String,

    /// Maximum number of businesses to return
    #[serde(default = "default_limit")]
    pub limit: u8,

    /// Value of the `Accept-Language` header
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.yelp.com/v3".to_string()
}

fn default_category() -> String {
    "restaurants".to_string()
}

const fn default_limit() -> u8 {
    5
}

fn default_accept_language() -> String {
    "es".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for YelpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            category: default_category(),
            limit: default_limit(),
            accept_language: default_accept_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for YelpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YelpConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("category", &self.category)
            .field("limit", &self.limit)
            .field("accept_language", &self.accept_language)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl YelpConfig {
    /// Create a configuration for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some("test-yelp-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must be an http or https URL".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.limit == 0 {
            return Err("limit must be greater than 0".to_string());
        }

        if self.limit > MAX_LIMIT {
            return Err(format!("limit must be {MAX_LIMIT} or less"));
        }

        if self.category.trim().is_empty() {
            return Err("category must not be empty".to_string());
        }

        match self.api_key.as_deref() {
            None => Err("api_key is required".to_string()),
            Some(key) if key.trim().is_empty() => Err("api_key must not be empty".to_string()),
            Some(_) => Ok(()),
        }
    }
}
