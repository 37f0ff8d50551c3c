//! Nearby point of interest

use serde::{Deserialize, Serialize};

/// A nearby restaurant returned by the places service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Business name
    pub name: String,
    /// Primary address line
    pub address: Option<String>,
}

impl Place {
    /// Create a place with a name and primary address line
    #[must_use]
    pub fn new(name: impl Into<String>, address: Option<String>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// Primary address line, empty when the service returned none
    #[must_use]
    pub fn address_line(&self) -> &str {
        self.address.as_deref().unwrap_or_default()
    }
}
