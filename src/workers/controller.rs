//! Dashboard controller
//!
//! Bootstraps the city list, then loads current conditions followed by the
//! forecast for every selected city. Failures are logged and leave the
//! affected region as it was.

use super::core::{Command, EventSender};
use crate::api::AirQualityApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{DEFAULT_CITY, FORECAST_HOURS};
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{ControllerState, DashboardUpdate, EventType, Source};
use crate::render::{render_current, render_forecast};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Picks the city to select once the list is known: the preferred city if
/// listed, else the default city if listed, else the first entry.
pub fn default_selection(cities: &[String], preferred: Option<&str>) -> Option<String> {
    preferred
        .into_iter()
        .chain(std::iter::once(DEFAULT_CITY))
        .find(|candidate| cities.iter().any(|city| city.as_str() == *candidate))
        .map(str::to_string)
        .or_else(|| cities.first().cloned())
}

pub struct DashboardController {
    api: Box<dyn AirQualityApi>,
    event_sender: EventSender,
    preferred_city: Option<String>,
    classifier: ErrorClassifier,
}

impl DashboardController {
    pub fn new(
        api: Box<dyn AirQualityApi>,
        event_sender: EventSender,
        preferred_city: Option<String>,
    ) -> Self {
        Self {
            api,
            event_sender,
            preferred_city,
            classifier: ErrorClassifier::new(),
        }
    }

    async fn report_failure(&self, source: Source, what: String, error: &ApiError) {
        let log_level = self.classifier.classify_api_error(error);
        self.event_sender
            .send_log(
                source,
                format!("Failed to load {}: {}", what, error),
                EventType::Error,
                log_level,
            )
            .await;
    }

    /// Fetches the city list and publishes the selector contents.
    /// Returns the city that ended up selected.
    pub async fn initialize(&self) -> Option<String> {
        self.event_sender
            .send_log(
                Source::Cities,
                format!("Fetching city list from {}", self.api.environment().api_url()),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let list = match self.api.get_cities().await {
            Ok(list) => list,
            Err(e) => {
                self.report_failure(Source::Cities, "city list".to_string(), &e)
                    .await;
                return None;
            }
        };

        let selected = default_selection(&list.cities, self.preferred_city.as_deref());
        self.event_sender
            .send_log(
                Source::Cities,
                format!("Loaded {} cities", list.cities.len()),
                EventType::Success,
                LogLevel::Info,
            )
            .await;
        self.event_sender
            .send_update(
                Source::Cities,
                DashboardUpdate::CitiesLoaded {
                    cities: list.cities,
                    selected: selected.clone(),
                },
            )
            .await;
        selected
    }

    /// Loads current conditions, then the forecast. The forecast request is
    /// only issued once the current-conditions request has finished.
    pub async fn on_city_selected(&self, city: &str) {
        if city.is_empty() {
            return;
        }
        self.event_sender
            .send_state(
                ControllerState::Loading(city.to_string()),
                format!("Loading {}", city),
            )
            .await;

        self.load_current(city).await;
        self.load_forecast(city).await;

        self.event_sender
            .send_state(ControllerState::Idle, format!("Loaded {}", city))
            .await;
    }

    /// Returns whether a new card was published.
    pub async fn load_current(&self, city: &str) -> bool {
        match self.api.get_current(city).await {
            Ok(data) => {
                let card = render_current(&data);
                self.event_sender
                    .send_log(
                        Source::Current,
                        format!("{}: AQI {} ({})", city, card.aqi, card.category.label),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.event_sender
                    .send_update(
                        Source::Current,
                        DashboardUpdate::Current {
                            city: city.to_string(),
                            card,
                        },
                    )
                    .await;
                true
            }
            Err(e) => {
                self.report_failure(Source::Current, format!("current data for {}", city), &e)
                    .await;
                false
            }
        }
    }

    /// Returns whether a new chart was published.
    pub async fn load_forecast(&self, city: &str) -> bool {
        match self.api.get_forecast(city, FORECAST_HOURS).await {
            Ok(data) => {
                let series = render_forecast(&data);
                self.event_sender
                    .send_log(
                        Source::Forecast,
                        format!("{}: {}", city, series),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.event_sender
                    .send_update(
                        Source::Forecast,
                        DashboardUpdate::Forecast {
                            city: city.to_string(),
                            series,
                        },
                    )
                    .await;
                true
            }
            Err(e) => {
                self.report_failure(Source::Forecast, format!("forecast for {}", city), &e)
                    .await;
                false
            }
        }
    }

    /// Runs one command to completion. A reload that selects a city yields
    /// the selection as a follow-up.
    async fn execute(&self, command: Command) -> Option<Command> {
        match command {
            Command::Reload => match self.initialize().await {
                Some(city) => Some(Command::Select(city)),
                None => {
                    self.event_sender
                        .send_state(ControllerState::Idle, "Nothing to load".to_string())
                        .await;
                    None
                }
            },
            Command::Select(city) => {
                self.on_city_selected(&city).await;
                None
            }
        }
    }

    /// Start the worker
    ///
    /// Runs the bootstrap, then serves commands one at a time. A command that
    /// arrives while another is running cancels it.
    pub fn run(
        self,
        mut commands: mpsc::Receiver<Command>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut pending = Some(Command::Reload);

            loop {
                if let Some(command) = pending.take() {
                    let running = command.clone();
                    tokio::select! {
                        next = self.execute(command) => pending = next,
                        command = commands.recv() => match command {
                            Some(next) => {
                                log::debug!("{:?} superseded by {:?}", running, next);
                                self.event_sender
                                    .send_log(
                                        Source::Controller,
                                        format!("Cancelled {}", running),
                                        EventType::Refresh,
                                        LogLevel::Debug,
                                    )
                                    .await;
                                pending = Some(next);
                            }
                            None => break,
                        },
                        _ = shutdown.recv() => break,
                    }
                    continue;
                }

                tokio::select! {
                    command = commands.recv() => match command {
                        Some(command) => pending = Some(command),
                        None => break,
                    },
                    _ = shutdown.recv() => break,
                }
            }
        })
    }
}
