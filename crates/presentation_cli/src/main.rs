//! CityBrief CLI
//!
//! Looks up the current weather and nearby restaurants for a city.

#![allow(clippy::print_stdout)]

mod terminal;

use std::{io::Stdout, path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context;
use application::{
    GeocodeResolver, GeocodingPort, LookupOutcome, LookupService, LookupUi, PlaceFinder,
    PlacesPort, WeatherFetcher, WeatherPort,
};
use clap::{Parser, Subcommand};
use infrastructure::{
    AppConfig, EnvSecretStore, OpenWeatherAdapter, YelpPlacesAdapter, config::ENV_PREFIX,
    init_logging,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::terminal::TerminalUi;

/// CityBrief CLI
#[derive(Parser)]
#[command(name = "citybrief")]
#[command(author, version, about = "Weather and nearby restaurants for a city", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "CITYBRIEF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single city
    ///
    /// Example: citybrief lookup "Springfield"
    Lookup {
        /// City name
        city: String,
    },

    /// Read city names from stdin, one lookup per line
    ///
    /// Type `quit` or `exit` (or close stdin) to stop.
    Interactive,

    /// Load and validate the configuration, then print it with keys redacted
    CheckConfig,
}

/// Determine log filter override from verbosity count
///
/// Without `-v` the configured filter (or `RUST_LOG`) applies.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Whether an interactive line ends the session
fn is_quit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "quit" | "exit")
}

/// Process exit status for a one-shot lookup
const fn exit_status(outcome: LookupOutcome) -> u8 {
    if outcome.is_completed() { 0 } else { 1 }
}

/// Wire the adapters and the terminal into a lookup service
fn build_lookup_service(
    config: &AppConfig,
    ui: &Arc<TerminalUi<Stdout>>,
) -> anyhow::Result<LookupService> {
    let openweather = Arc::new(
        OpenWeatherAdapter::new(config.openweather.to_client_config())
            .context("Failed to create OpenWeatherMap client")?,
    );
    let yelp: Arc<dyn PlacesPort> = Arc::new(
        YelpPlacesAdapter::new(config.yelp.to_client_config())
            .context("Failed to create Yelp client")?,
    );
    let geocoding: Arc<dyn GeocodingPort> = openweather.clone();
    let weather: Arc<dyn WeatherPort> = openweather;

    Ok(LookupService::new(
        GeocodeResolver::new(geocoding),
        WeatherFetcher::new(weather),
        PlaceFinder::new(yelp).with_limit(usize::from(config.yelp.limit)),
        LookupUi {
            input: ui.clone(),
            notifier: ui.clone(),
            weather_display: ui.clone(),
            places_display: ui.clone(),
        },
    ))
}

async fn run_interactive(service: &LookupService, ui: &TerminalUi<Stdout>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        ui.write_str("\n📍 Ciudad: ");
        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };
        if is_quit_command(&line) {
            break;
        }

        ui.set_location(&line);
        let outcome = service.submit().await;
        info!(?outcome, "Interactive lookup finished");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    init_logging(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;

    config
        .resolve_secrets(&EnvSecretStore::with_prefix(ENV_PREFIX))
        .await;

    if let Commands::CheckConfig = cli.command {
        return Ok(match config.validate() {
            Ok(()) => {
                println!("{config:#?}");
                println!("✅ Configuration is valid");
                ExitCode::SUCCESS
            },
            Err(e) => {
                println!("❌ {e}");
                ExitCode::FAILURE
            },
        });
    }

    config.validate()?;

    let ui = Arc::new(TerminalUi::new(std::io::stdout()));
    let service = build_lookup_service(&config, &ui)?;

    match cli.command {
        Commands::Lookup { city } => {
            ui.set_location(&city);
            Ok(ExitCode::from(exit_status(service.submit().await)))
        },
        Commands::Interactive => {
            run_interactive(&service, &ui).await?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::CheckConfig => Ok(ExitCode::SUCCESS),
    }
}
