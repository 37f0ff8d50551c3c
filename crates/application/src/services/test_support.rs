//! Recording fakes for the UI ports

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{NotifierPort, PlacesDisplayPort, WeatherDisplayPort};

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifierPort for RecordingNotifier {
    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingWeatherDisplay {
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingWeatherDisplay {
    pub fn current(&self) -> Option<(String, String)> {
        self.shown.lock().unwrap().last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }
}

impl WeatherDisplayPort for RecordingWeatherDisplay {
    fn show_weather(&self, temperature_text: &str, condition_text: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((temperature_text.to_string(), condition_text.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingPlacesDisplay {
    lines: Mutex<Vec<String>>,
    clears: Mutex<usize>,
}

impl RecordingPlacesDisplay {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        *self.clears.lock().unwrap()
    }
}

impl PlacesDisplayPort for RecordingPlacesDisplay {
    fn clear(&self) {
        self.lines.lock().unwrap().clear();
        *self.clears.lock().unwrap() += 1;
    }

    fn append(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
