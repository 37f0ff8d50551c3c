//! Geocode resolver service
//!
//! Wraps the geocoding port so that callers only ever see a resolved
//! location or nothing.

use std::sync::Arc;

use domain::{GeoLocation, LocationQuery};
use tracing::{debug, error, instrument, warn};

use crate::ports::GeocodingPort;

/// Resolves free-text locations to coordinates
#[derive(Clone)]
pub struct GeocodeResolver {
    port: Arc<dyn GeocodingPort>,
}

impl std::fmt::Debug for GeocodeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeResolver").finish_non_exhaustive()
    }
}

impl GeocodeResolver {
    /// Create a resolver over the given geocoding port
    pub fn new(port: Arc<dyn GeocodingPort>) -> Self {
        Self { port }
    }

    /// Resolve the query, or `None` if the location could not be found
    ///
    /// Failures never leave this method. An unknown name is logged as a
    /// warning, a transport or upstream failure as an error.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn resolve(&self, query: &LocationQuery) -> Option<GeoLocation> {
        match self.port.geocode(query).await {
            Ok(location) => {
                debug!(%location, "Resolved location");
                Some(location)
            },
            Err(e) if e.is_not_found() => {
                warn!(error = %e, "Location not found");
                None
            },
            Err(e) => {
                error!(error = %e, "Geocoding request failed");
                None
            },
        }
    }
}
