//! API keys read from the process environment

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use std::env;
use tracing::{debug, instrument};

/// Resolves dotted secret names to prefixed environment variables
///
/// With prefix `CITYBRIEF`, `yelp.api_key` is read from
/// `CITYBRIEF_YELP_API_KEY`.
#[derive(Debug, Clone)]
pub struct EnvSecretStore {
    prefix: String,
}

impl EnvSecretStore {
    /// Create a store that reads `{prefix}_{KEY}` variables
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn env_var_name(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key.replace(['.', '-'], "_").to_uppercase())
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let name = self.env_var_name(key);
        match env::var(&name) {
            Ok(value) => {
                debug!(env_var = %name, "Secret read from environment");
                Ok(value)
            },
            Err(env::VarError::NotPresent) => {
                Err(ApplicationError::NotFound(format!("{key} ({name} is not set)")))
            },
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "{name} is not valid UTF-8"
            ))),
        }
    }
}
