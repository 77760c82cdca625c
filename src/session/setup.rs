//! Session setup and initialization

use crate::api::ApiClient;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_controller;
use crate::workers::Command;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for controller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sends selections to the controller
    pub command_sender: mpsc::Sender<Command>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop the controller
    pub shutdown_sender: broadcast::Sender<()>,
    /// API the session reads from
    pub environment: Environment,
}

/// Resolved inputs for a dashboard session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub environment: Environment,
    /// City to select if the city list contains it.
    pub preferred_city: Option<String>,
    /// Total per-request timeout.
    pub timeout: Option<Duration>,
}

/// Builds the API client and starts the controller worker.
///
/// The controller starts loading immediately; the caller decides how the
/// resulting events are shown.
pub fn setup_session(options: SessionOptions) -> SessionData {
    let SessionOptions {
        environment,
        preferred_city,
        timeout,
    } = options;

    let api = ApiClient::with_timeout(environment.clone(), timeout);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, command_sender, join_handles) =
        start_controller(api, preferred_city, shutdown_sender.subscribe());

    SessionData {
        event_receiver,
        command_sender,
        join_handles,
        shutdown_sender,
        environment,
    }
}
