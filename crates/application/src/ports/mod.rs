//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement the
//! network ports; the presentation layer implements the UI ports.

mod geocoding_port;
mod places_port;
mod secret_store;
mod ui_port;
mod weather_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use places_port::MockPlacesPort;
pub use places_port::PlacesPort;
pub use secret_store::SecretStorePort;
#[cfg(test)]
pub use ui_port::MockUserInputPort;
pub use ui_port::{NotifierPort, PlacesDisplayPort, UserInputPort, WeatherDisplayPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
