//! Current weather conditions for a resolved location

use serde::{Deserialize, Serialize};

/// Current conditions as reported by the upstream weather service
///
/// Both fields are optional because the upstream payload is not validated at
/// fetch time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Human-readable condition text, localised by the upstream service
    pub description: Option<String>,
}

impl WeatherReport {
    /// Temperature and description, if both are present
    #[must_use]
    pub fn displayable(&self) -> Option<(f64, &str)> {
        match (self.temperature, self.description.as_deref()) {
            (Some(temperature), Some(description)) => Some((temperature, description)),
            _ => None,
        }
    }
}
