//! Core worker utilities

use crate::error_classifier::LogLevel;
use crate::events::{ControllerState, DashboardUpdate, Event, EventType, Source};
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    /// Send an activity log entry
    pub async fn send_log(
        &self,
        source: Source,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::new(source, message, event_type, log_level))
            .await;
    }

    /// Send rendered display content
    pub async fn send_update(&self, source: Source, update: DashboardUpdate) {
        self.send_event(Event::update(source, update)).await;
    }

    pub async fn send_state(&self, state: ControllerState, message: String) {
        self.send_event(Event::state_change(state, message)).await;
    }
}

/// Requests from the UI to the controller worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the city list again and select the default city.
    Reload,
    /// Load and render the named city.
    Select(String),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Reload => write!(f, "reloading the city list"),
            Command::Select(city) => write!(f, "loading {}", city),
        }
    }
}
