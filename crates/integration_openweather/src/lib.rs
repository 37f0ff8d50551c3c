//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap "current weather" API
//! (<https://openweathermap.org/current>).
//!
//! The same endpoint serves two purposes: looking up a city by name (the
//! response carries a `coord` block) and fetching current conditions for a
//! latitude/longitude pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_openweather::{HttpOpenWeatherClient, OpenWeatherClient, OpenWeatherConfig};
//!
//! let config = OpenWeatherConfig {
//!     api_key: Some(std::env::var("CITYBRIEF_OPENWEATHER_API_KEY")?),
//!     ..Default::default()
//! };
//! let client = HttpOpenWeatherClient::new(config)?;
//!
//! let city = client.locate("Springfield").await?;
//! let now = client.current(city.latitude, city.longitude).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{HttpOpenWeatherClient, OpenWeatherClient};
pub use config::OpenWeatherConfig;
pub use error::OpenWeatherError;
pub use models::{CityLocation, CurrentConditions};
