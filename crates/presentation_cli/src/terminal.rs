//! Terminal implementation of the UI ports
//!
//! The location "field" is a buffer the command loop fills before each
//! submit; alerts and results are written to the wrapped writer.

use std::io::Write;
use std::sync::Mutex;

use application::ports::{NotifierPort, PlacesDisplayPort, UserInputPort, WeatherDisplayPort};
use async_trait::async_trait;
use tracing::warn;

/// Terminal front end writing to `W` (stdout in the binary)
#[derive(Debug)]
pub struct TerminalUi<W> {
    location: Mutex<String>,
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalUi<W> {
    /// Create a terminal UI over a writer
    pub fn new(out: W) -> Self {
        Self {
            location: Mutex::new(String::new()),
            out: Mutex::new(out),
        }
    }

    /// Replace the content of the location field
    pub fn set_location(&self, text: &str) {
        if let Ok(mut location) = self.location.lock() {
            text.clone_into(&mut *location);
        }
    }

    /// Write raw text and flush
    pub fn write_str(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    /// Consume the UI and return the writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> UserInputPort for TerminalUi<W> {
    async fn read_location(&self) -> String {
        self.location
            .lock()
            .map(|location| location.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl<W: Write + Send> NotifierPort for TerminalUi<W> {
    async fn alert(&self, message: &str) {
        self.write_str(&format!("⚠️  {message}\n"));
    }
}

impl<W: Write + Send> WeatherDisplayPort for TerminalUi<W> {
    fn show_weather(&self, temperature_text: &str, condition_text: &str) {
        if condition_text.is_empty() {
            self.write_str(&format!("🌡️  {temperature_text}\n"));
        } else {
            self.write_str(&format!("🌡️  {temperature_text}\n☁️  {condition_text}\n"));
        }
    }
}

impl<W: Write + Send> PlacesDisplayPort for TerminalUi<W> {
    fn clear(&self) {
        self.write_str("\n🍽️  Restaurantes:\n");
    }

    fn append(&self, line: &str) {
        self.write_str(&format!("   - {line}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(ui: TerminalUi<Vec<u8>>) -> String {
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn location_field_roundtrip() {
        let ui = TerminalUi::new(Vec::new());
        assert_eq!(ui.read_location().await, "");

        ui.set_location("Springfield");
        assert_eq!(ui.read_location().await, "Springfield");

        ui.set_location("");
        assert_eq!(ui.read_location().await, "");
    }

    #[tokio::test]
    async fn alert_is_written() {
        let ui = TerminalUi::new(Vec::new());
        ui.alert("Por favor, ingresa una ciudad.").await;
        assert!(output(ui).contains("Por favor, ingresa una ciudad."));
    }

    #[test]
    fn weather_lines() {
        let ui = TerminalUi::new(Vec::new());
        ui.show_weather("Temperatura: 21.5°C", "Condición: clear sky");
        let out = output(ui);
        assert!(out.contains("Temperatura: 21.5°C\n"));
        assert!(out.contains("Condición: clear sky\n"));
    }

    #[test]
    fn empty_condition_is_skipped() {
        let ui = TerminalUi::new(Vec::new());
        ui.show_weather("Error al obtener clima", "");
        assert_eq!(output(ui).lines().count(), 1);
    }

    #[test]
    fn places_lines_in_order() {
        let ui = TerminalUi::new(Vec::new());
        ui.clear();
        ui.append("A - 1 Main St");
        ui.append("B - 2 Main St");

        let out = output(ui);
        let a = out.find("A - 1 Main St").unwrap();
        let b = out.find("B - 2 Main St").unwrap();
        assert!(a < b);
    }
}
