//! OpenWeatherMap client configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for the OpenWeatherMap client
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Response language for condition descriptions (ISO 639-1)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_lang() -> String {
    "es".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            lang: default_lang(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl OpenWeatherConfig {
    /// Create a configuration for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some("test-api-key".to_string()),
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

        if self.lang.trim().is_empty() {
            return Err("lang must not be empty".to_string());
        }

        match self.api_key.as_deref() {
            None => Err("api_key is required".to_string()),
            Some(key) if key.trim().is_empty() => Err("api_key must not be empty".to_string()),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenWeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert!(config.api_key.is_none());
        assert_eq!(config.lang, "es");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_validation_success() {
        let config = OpenWeatherConfig::for_testing("http://localhost:1234");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_api_key() {
        let config = OpenWeatherConfig::default();
        assert!(config.validate().unwrap_err().contains("api_key"));

        let config = OpenWeatherConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_url_and_timeout() {
        let config = OpenWeatherConfig {
            base_url: "ftp://example.com".to_string(),
            ..OpenWeatherConfig::for_testing("http://x")
        };
        assert!(config.validate().is_err());

        let config = OpenWeatherConfig {
            timeout_secs: 0,
            ..OpenWeatherConfig::for_testing("http://x")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = OpenWeatherConfig::for_testing("http://localhost");
        let debug = format!("{config:?}");
        assert!(!debug.contains("test-api-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let config = OpenWeatherConfig::for_testing("http://localhost");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("test-api-key"));
        assert!(json.contains("\"lang\":\"es\""));
    }
}
