//! Domain entities - Records produced by one lookup run

mod place;
mod weather_report;

pub use place::Place;
pub use weather_report::WeatherReport;
