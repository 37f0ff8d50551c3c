//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod env_secret_store;
mod openweather_adapter;
mod yelp_places_adapter;

pub use env_secret_store::EnvSecretStore;
pub use openweather_adapter::OpenWeatherAdapter;
pub use yelp_places_adapter::YelpPlacesAdapter;
