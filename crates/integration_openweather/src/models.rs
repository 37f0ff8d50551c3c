//! OpenWeatherMap data models

use serde::{Deserialize, Serialize};

/// A city matched by name, with its coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLocation {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// City name as spelled by the upstream service
    pub name: Option<String>,
}

/// Current conditions at a location
///
/// Fields are optional because the upstream body is not validated beyond
/// its status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Localised description of the first reported condition
    pub description: Option<String>,
}

/// Status carried in the `cod` field
///
/// OpenWeatherMap sends a number on success and a string on errors
/// (`{"cod":"404","message":"city not found"}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ResponseCode {
    Number(u16),
    Text(String),
}

impl ResponseCode {
    pub(crate) fn as_u16(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    pub(crate) fn is_success(&self) -> bool {
        self.as_u16() == Some(200)
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Raw API response from `/weather`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub cod: Option<ResponseCode>,
    pub message: Option<String>,
    pub coord: Option<Coord>,
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainBlock {
    pub temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherEntry {
    pub description: Option<String>,
}

impl ApiResponse {
    /// Project the fields the application reads
    pub(crate) fn into_conditions(self) -> CurrentConditions {
        CurrentConditions {
            temperature: self.main.and_then(|m| m.temp),
            description: self.weather.into_iter().next().and_then(|w| w.description),
        }
    }
}
