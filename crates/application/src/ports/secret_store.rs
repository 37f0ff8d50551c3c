//! Port for secret storage and retrieval
//!
//! API credentials are looked up through this port when the configuration
//! file does not carry them.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for secret storage operations
///
/// This trait is object-safe to allow dynamic dispatch.
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key
    ///
    /// # Arguments
    /// * `key` - The key of the secret (e.g., "openweather.api_key")
    ///
    /// # Returns
    /// The secret value, or [`ApplicationError::NotFound`] if absent
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;
}
