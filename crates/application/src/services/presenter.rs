//! Presenter - maps lookup results onto visible text
//!
//! The `format_*` functions are pure; the `render_*` functions push their
//! output into a display sink.

use domain::{Place, WeatherReport};

use crate::ports::{PlacesDisplayPort, WeatherDisplayPort};

/// Shown in place of the temperature when no usable report is available
pub const WEATHER_ERROR_TEXT: &str = "Error al obtener clima";

/// Single line shown when no restaurant was found
pub const NO_PLACES_TEXT: &str = "No se encontraron restaurantes cercanos.";

/// The two weather lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherView {
    /// e.g. "Temperatura: 21.5°C"
    pub temperature_text: String,
    /// e.g. "Condición: clear sky"
    pub condition_text: String,
}

/// Format a weather report
///
/// A report missing either the temperature or the description counts as
/// absent.
pub fn format_weather(report: Option<&WeatherReport>) -> WeatherView {
    match report.and_then(WeatherReport::displayable) {
        Some((temperature, description)) => WeatherView {
            temperature_text: format!("Temperatura: {temperature:.1}°C"),
            condition_text: format!("Condición: {description}"),
        },
        None => WeatherView {
            temperature_text: WEATHER_ERROR_TEXT.to_string(),
            condition_text: String::new(),
        },
    }
}

/// Format the place list, one line per place in the given order
pub fn format_places(places: &[Place]) -> Vec<String> {
    if places.is_empty() {
        return vec![NO_PLACES_TEXT.to_string()];
    }

    places
        .iter()
        .map(|place| format!("{} - {}", place.name, place.address_line()))
        .collect()
}

/// Replace the weather display with the formatted report
pub fn render_weather(sink: &dyn WeatherDisplayPort, report: Option<&WeatherReport>) {
    let view = format_weather(report);
    sink.show_weather(&view.temperature_text, &view.condition_text);
}

/// Clear the places display and append one line per place
pub fn render_places(sink: &dyn PlacesDisplayPort, places: &[Place]) {
    sink.clear();
    for line in format_places(places) {
        sink.append(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{RecordingPlacesDisplay, RecordingWeatherDisplay};

    fn report(temperature: Option<f64>, description: Option<&str>) -> WeatherReport {
        WeatherReport {
            temperature,
            description: description.map(ToString::to_string),
        }
    }

    #[test]
    fn formats_complete_report() {
        let view = format_weather(Some(&report(Some(21.5), Some("clear sky"))));
        assert_eq!(view.temperature_text, "Temperatura: 21.5°C");
        assert_eq!(view.condition_text, "Condición: clear sky");
    }

    #[test]
    fn temperature_uses_one_decimal() {
        let view = format_weather(Some(&report(Some(-3.0), Some("nieve"))));
        assert_eq!(view.temperature_text, "Temperatura: -3.0°C");

        let view = format_weather(Some(&report(Some(18.26), Some("nubes"))));
        assert_eq!(view.temperature_text, "Temperatura: 18.3°C");
    }

    #[test]
    fn absent_report_uses_error_text() {
        let view = format_weather(None);
        assert_eq!(view.temperature_text, WEATHER_ERROR_TEXT);
        assert_eq!(view.condition_text, "");
    }

    #[test]
    fn incomplete_report_uses_error_text() {
        let missing_description = format_weather(Some(&report(Some(21.5), None)));
        let missing_temperature = format_weather(Some(&report(None, Some("clear sky"))));

        assert_eq!(missing_description, format_weather(None));
        assert_eq!(missing_temperature, format_weather(None));
    }

    #[test]
    fn formats_places_in_order() {
        let places = vec![
            Place::new("Cozy Dog Drive In", Some("2935 S 6th St".into())),
            Place::new("Maid-Rite", Some("118 N Pasfield St".into())),
            Place::new("Food Truck", None),
        ];

        assert_eq!(
            format_places(&places),
            vec![
                "Cozy Dog Drive In - 2935 S 6th St",
                "Maid-Rite - 118 N Pasfield St",
                "Food Truck - ",
            ]
        );
    }

    #[test]
    fn empty_places_yield_single_line() {
        assert_eq!(format_places(&[]), vec![NO_PLACES_TEXT]);
    }

    #[test]
    fn render_weather_replaces_content() {
        let sink = RecordingWeatherDisplay::default();

        render_weather(&sink, None);
        render_weather(&sink, Some(&report(Some(21.5), Some("clear sky"))));

        assert_eq!(
            sink.current(),
            Some(("Temperatura: 21.5°C".to_string(), "Condición: clear sky".to_string()))
        );
    }

    #[test]
    fn render_places_is_idempotent() {
        let sink = RecordingPlacesDisplay::default();
        let places = vec![
            Place::new("A", Some("1 Main St".into())),
            Place::new("B", Some("2 Main St".into())),
        ];

        render_places(&sink, &places);
        render_places(&sink, &places);

        assert_eq!(sink.lines(), vec!["A - 1 Main St", "B - 2 Main St"]);
    }

    #[test]
    fn render_places_clears_previous_results() {
        let sink = RecordingPlacesDisplay::default();

        render_places(&sink, &[Place::new("A", Some("1 Main St".into()))]);
        render_places(&sink, &[]);

        assert_eq!(sink.lines(), vec![NO_PLACES_TEXT]);
    }
}
