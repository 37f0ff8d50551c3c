//! Lookup service - one city lookup from input to rendered output
//!
//! A run validates the input, resolves the coordinates, fetches the weather
//! and the nearby restaurants concurrently, and renders both. Only an empty
//! input and an unknown location are reported to the user; every other
//! failure degrades to placeholder text.

use std::sync::Arc;

use domain::{DomainError, LocationQuery};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::{GeocodeResolver, PlaceFinder, WeatherFetcher, presenter};
use crate::ports::{NotifierPort, PlacesDisplayPort, UserInputPort, WeatherDisplayPort};

/// Alert shown when the location field is empty
pub const EMPTY_INPUT_ALERT: &str = "Por favor, ingresa una ciudad.";

/// Alert shown when the location cannot be resolved
pub const LOCATION_NOT_FOUND_ALERT: &str =
    "No se pudo encontrar la ubicación. Intenta con un nombre de ciudad válido.";

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Input was empty; nothing was requested
    AbortedNoInput,
    /// Geocoding found nothing; weather and places were not requested
    AbortedNotFound,
    /// Weather and places were rendered, possibly with placeholders
    Completed,
}

impl LookupOutcome {
    /// Whether the run reached the render step
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// The user-facing capabilities a lookup needs
#[derive(Clone)]
pub struct LookupUi {
    /// Location text field
    pub input: Arc<dyn UserInputPort>,
    /// Blocking alert
    pub notifier: Arc<dyn NotifierPort>,
    /// Weather sink
    pub weather_display: Arc<dyn WeatherDisplayPort>,
    /// Restaurant list sink
    pub places_display: Arc<dyn PlacesDisplayPort>,
}

impl std::fmt::Debug for LookupUi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupUi").finish_non_exhaustive()
    }
}

/// Orchestrates a lookup run
#[derive(Debug)]
pub struct LookupService {
    resolver: GeocodeResolver,
    weather: WeatherFetcher,
    places: PlaceFinder,
    ui: LookupUi,
    /// Held for the whole run so sinks never see interleaved renders
    run_lock: Mutex<()>,
}

impl LookupService {
    /// Create a new lookup service
    pub fn new(
        resolver: GeocodeResolver,
        weather: WeatherFetcher,
        places: PlaceFinder,
        ui: LookupUi,
    ) -> Self {
        Self {
            resolver,
            weather,
            places,
            ui,
            run_lock: Mutex::new(()),
        }
    }

    /// Read the location field and run a lookup with its content
    ///
    /// This is the "search" action of the front end.
    pub async fn submit(&self) -> LookupOutcome {
        let raw = self.ui.input.read_location().await;
        self.run(&raw).await
    }

    /// Run a lookup for the given raw input
    #[instrument(skip(self))]
    pub async fn run(&self, raw_input: &str) -> LookupOutcome {
        let _guard = self.run_lock.lock().await;

        let query = match LocationQuery::parse(raw_input) {
            Ok(query) => query,
            Err(DomainError::EmptyQuery) => {
                debug!("Empty location input");
                self.ui.notifier.alert(EMPTY_INPUT_ALERT).await;
                return LookupOutcome::AbortedNoInput;
            },
            Err(e) => {
                warn!(error = %e, "Rejected location input");
                self.ui.notifier.alert(LOCATION_NOT_FOUND_ALERT).await;
                return LookupOutcome::AbortedNotFound;
            },
        };

        let Some(location) = self.resolver.resolve(&query).await else {
            self.ui.notifier.alert(LOCATION_NOT_FOUND_ALERT).await;
            return LookupOutcome::AbortedNotFound;
        };

        let (report, places) = tokio::join!(
            self.weather.fetch(location),
            self.places.find(location)
        );

        presenter::render_weather(self.ui.weather_display.as_ref(), report.as_ref());
        presenter::render_places(self.ui.places_display.as_ref(), &places);

        info!(
            query = %query,
            %location,
            weather = report.is_some(),
            places = places.len(),
            "Lookup completed"
        );
        LookupOutcome::Completed
    }
}
