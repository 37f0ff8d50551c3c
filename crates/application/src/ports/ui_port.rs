//! User interface ports
//!
//! The front end is reached only through these capabilities: one text
//! input, one blocking alert and two render sinks.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Source of the location typed by the user
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserInputPort: Send + Sync {
    /// Current content of the location field, untrimmed
    async fn read_location(&self) -> String;
}

/// Blocking user notification
#[async_trait]
pub trait NotifierPort: Send + Sync {
    /// Show a message; completes once it has been shown
    async fn alert(&self, message: &str);
}

/// Sink for the two weather lines
pub trait WeatherDisplayPort: Send + Sync {
    /// Replace the displayed weather with the given texts
    fn show_weather(&self, temperature_text: &str, condition_text: &str);
}

/// Sink for the restaurant list
pub trait PlacesDisplayPort: Send + Sync {
    /// Remove every displayed line
    fn clear(&self);

    /// Append one line below the existing ones
    fn append(&self, line: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(
        _: &dyn UserInputPort,
        _: &dyn NotifierPort,
        _: &dyn WeatherDisplayPort,
        _: &dyn PlacesDisplayPort,
    ) {
    }

    #[tokio::test]
    async fn mock_input_returns_text() {
        let mut input = MockUserInputPort::new();
        input
            .expect_read_location()
            .returning(|| "  Springfield ".to_string());

        assert_eq!(input.read_location().await, "  Springfield ");
    }
}
