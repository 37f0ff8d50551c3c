//! Weather fetcher service

use std::sync::Arc;

use domain::{GeoLocation, WeatherReport};
use tracing::{debug, error, instrument};

use crate::ports::WeatherPort;

/// Fetches current conditions for resolved coordinates
#[derive(Clone)]
pub struct WeatherFetcher {
    port: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherFetcher").finish_non_exhaustive()
    }
}

impl WeatherFetcher {
    /// Create a fetcher over the given weather port
    pub fn new(port: Arc<dyn WeatherPort>) -> Self {
        Self { port }
    }

    /// Fetch the report, or `None` on any failure
    ///
    /// The report is not checked for completeness here; the presenter
    /// decides whether it can be shown.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn fetch(&self, location: GeoLocation) -> Option<WeatherReport> {
        match self.port.current_weather(location).await {
            Ok(report) => {
                debug!(
                    temperature = ?report.temperature,
                    description = ?report.description,
                    "Fetched weather"
                );
                Some(report)
            },
            Err(e) => {
                error!(error = %e, "Weather request failed");
                None
            },
        }
    }
}
