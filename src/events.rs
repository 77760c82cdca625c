//! Event System
//!
//! Messages from the controller worker to the UI: activity log entries,
//! loading-state changes, and the rendered display models.

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use crate::render::{CurrentCard, ForecastSeries};
use chrono::Local;
use std::fmt::Display;

/// Which controller operation produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// City list bootstrap.
    Cities,
    /// Current-conditions load.
    Current,
    /// Forecast load.
    Forecast,
    /// Selection handling and lifecycle.
    Controller,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    StateChange,
    Update,
}

/// What the controller is doing right now.
#[derive(Debug, Clone, Eq, PartialEq, strum::Display)]
pub enum ControllerState {
    /// Fetching data for the named city.
    Loading(String),
    /// Nothing in flight.
    Idle,
}

/// Display content produced by the controller, applied by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardUpdate {
    /// Selector options in source order and the city to select.
    CitiesLoaded {
        cities: Vec<String>,
        selected: Option<String>,
    },
    /// Replacement for the current-conditions region.
    Current { city: String, card: CurrentCard },
    /// Replacement for the forecast chart.
    Forecast {
        city: String,
        series: ForecastSeries,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Set on state change events.
    pub state: Option<ControllerState>,
    /// Set on update events.
    pub update: Option<DashboardUpdate>,
}

fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: now(),
            event_type,
            log_level,
            state: None,
            update: None,
        }
    }

    pub fn state_change(state: ControllerState, msg: String) -> Self {
        Self {
            state: Some(state),
            ..Self::new(
                Source::Controller,
                msg,
                EventType::StateChange,
                LogLevel::Info,
            )
        }
    }

    pub fn update(source: Source, update: DashboardUpdate) -> Self {
        let msg = match &update {
            DashboardUpdate::CitiesLoaded { cities, .. } => format!("{} cities", cities.len()),
            DashboardUpdate::Current { city, .. } => format!("current conditions for {}", city),
            DashboardUpdate::Forecast { city, series } => {
                format!("{} forecast points for {}", series.len(), city)
            }
        };
        Self {
            update: Some(update),
            ..Self::new(source, msg, EventType::Update, LogLevel::Debug)
        }
    }

    pub fn should_display(&self) -> bool {
        // Payload carriers are applied, not logged
        if matches!(self.event_type, EventType::StateChange | EventType::Update) {
            return false;
        }
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_events_are_not_displayed() {
        let update = Event::update(
            Source::Forecast,
            DashboardUpdate::Forecast {
                city: "Delhi".to_string(),
                series: ForecastSeries::default(),
            },
        );
        assert!(!update.should_display());
        assert_eq!(update.msg, "0 forecast points for Delhi");

        let state = Event::state_change(ControllerState::Idle, "Idle".to_string());
        assert!(!state.should_display());
    }

    #[test]
    fn errors_and_successes_are_displayed() {
        let error = Event::new(
            Source::Current,
            "boom".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        assert!(error.should_display());
        assert!(error.to_string().ends_with("Current: boom"));

        let success = Event::new(
            Source::Cities,
            "Loaded".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(success.should_display());
    }
}
