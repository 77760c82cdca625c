//! Runtime for the dashboard controller worker

use crate::api::ApiClient;
use crate::consts::cli_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::events::Event;
use crate::workers::{Command, DashboardController, EventSender};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the controller worker.
///
/// Returns the UI's ends of the event and command channels plus the worker's
/// join handles.
pub fn start_controller(
    api: ApiClient,
    preferred_city: Option<String>,
    shutdown: broadcast::Receiver<()>,
) -> (
    mpsc::Receiver<Event>,
    mpsc::Sender<Command>,
    Vec<JoinHandle<()>>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (command_sender, command_receiver) = mpsc::channel::<Command>(COMMAND_QUEUE_SIZE);

    let controller = DashboardController::new(
        Box::new(api),
        EventSender::new(event_sender),
        preferred_city,
    );

    let join_handles = vec![controller.run(command_receiver, shutdown)];
    (event_receiver, command_sender, join_handles)
}
