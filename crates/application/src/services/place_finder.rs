//! Place finder service

use std::sync::Arc;

use domain::{GeoLocation, Place};
use tracing::{debug, error, info, instrument};

use crate::ports::PlacesPort;

/// Maximum number of places shown per lookup
pub const DEFAULT_PLACE_LIMIT: usize = 5;

/// Finds restaurants near resolved coordinates
#[derive(Clone)]
pub struct PlaceFinder {
    port: Arc<dyn PlacesPort>,
    limit: usize,
}

impl std::fmt::Debug for PlaceFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceFinder")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl PlaceFinder {
    /// Create a finder over the given places port
    pub fn new(port: Arc<dyn PlacesPort>) -> Self {
        Self {
            port,
            limit: DEFAULT_PLACE_LIMIT,
        }
    }

    /// Override the maximum number of places returned
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Find nearby restaurants in upstream order, at most `limit` of them
    ///
    /// Never fails: an empty match and a failed request both come back as an
    /// empty list and differ only in how they are logged.
    #[instrument(skip(self), fields(location = %location, limit = self.limit))]
    pub async fn find(&self, location: GeoLocation) -> Vec<Place> {
        match self.port.nearby_restaurants(location).await {
            Ok(places) if places.is_empty() => {
                info!("No nearby restaurants found");
                places
            },
            Ok(mut places) => {
                places.truncate(self.limit);
                debug!(count = places.len(), "Found nearby restaurants");
                places
            },
            Err(e) => {
                error!(error = %e, "Places request failed");
                Vec::new()
            },
        }
    }
}
