//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A resolved latitude/longitude pair
///
/// Produced once per lookup by the geocoder and read by the weather and
/// places lookups. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoLocation")]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Unchecked wire shape, validated through `GeoLocation::new`
#[derive(Deserialize)]
struct RawGeoLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoLocation> for GeoLocation {
    type Error = DomainError;

    fn try_from(raw: RawGeoLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180], including NaN values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(39.8, -89.6).expect("valid coordinates");
        assert!((loc.latitude() - 39.8).abs() < f64::EPSILON);
        assert!((loc.longitude() - -89.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(90.5, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 180.1).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(matches!(
            GeoLocation::new(f64::NAN, 0.0),
            Err(DomainError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(39.8, -89.6).expect("valid");
        assert_eq!(loc.to_string(), "39.8000, -89.6000");
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("\"latitude\":52.52"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }

    #[test]
    fn test_deserialization_checks_range() {
        let result = serde_json::from_str::<GeoLocation>(r#"{"latitude":95.0,"longitude":0.0}"#);
        let err = result.expect_err("out-of-range latitude must be rejected");
        assert!(err.to_string().contains("95"));

        let result = serde_json::from_str::<GeoLocation>(r#"{"latitude":0.0,"longitude":-200.0}"#);
        assert!(result.is_err());
    }
}
