//! Application services - Use case implementations

mod geocode_resolver;
mod lookup_service;
mod place_finder;
pub mod presenter;
mod weather_fetcher;

#[cfg(test)]
pub(crate) mod test_support;

pub use geocode_resolver::GeocodeResolver;
pub use lookup_service::{
    EMPTY_INPUT_ALERT, LOCATION_NOT_FOUND_ALERT, LookupOutcome, LookupService, LookupUi,
};
pub use place_finder::{DEFAULT_PLACE_LIMIT, PlaceFinder};
pub use presenter::WeatherView;
pub use weather_fetcher::WeatherFetcher;
