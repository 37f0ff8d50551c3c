//! Yelp data models

use serde::{Deserialize, Serialize};

/// A business returned by the search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Business name
    pub name: String,
    /// Primary address line
    pub address: Option<String>,
}

/// Raw Yelp API response structures
pub(crate) mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        pub businesses: Option<Vec<ApiBusiness>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ApiBusiness {
        pub name: String,
        pub location: Option<ApiLocation>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ApiLocation {
        pub address1: Option<String>,
        #[serde(default)]
        pub display_address: Vec<String>,
    }
}

impl From<api::ApiBusiness> for Business {
    fn from(raw: api::ApiBusiness) -> Self {
        // address1 may be null or "" for food trucks; fall back to the first
        // formatted line
        let address = raw.location.and_then(|loc| {
            loc.address1
                .filter(|a| !a.trim().is_empty())
                .or_else(|| loc.display_address.into_iter().next())
        });

        Self {
            name: raw.name,
            address,
        }
    }
}
