//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{ControllerState, DashboardUpdate, Event};
use std::error::Error;

/// Text to print for an event, if any.
fn render_event(event: &Event) -> Option<String> {
    if let Some(update) = &event.update {
        return match update {
            DashboardUpdate::CitiesLoaded { cities, selected } => Some(format!(
                "Cities: {} (selected: {})",
                cities.join(", "),
                selected.as_deref().unwrap_or("none")
            )),
            DashboardUpdate::Current { card, .. } => Some(card.to_string()),
            DashboardUpdate::Forecast { city, series } => Some(format!("{}: {}", city, series)),
        };
    }
    event.should_display().then(|| event.to_string())
}

/// The first idle report means the startup sequence is over.
fn is_finished(event: &Event) -> bool {
    event.state == Some(ControllerState::Idle)
}

/// Runs the application in headless mode
///
/// Prints activity and the rendered panels as text, then exits once the
/// startup selection has loaded or on Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    loop {
        tokio::select! {
            event = session.event_receiver.recv() => {
                let Some(event) = event else { break };
                if let Some(line) = render_event(&event) {
                    println!("{}", line);
                }
                if is_finished(&event) {
                    let _ = session.shutdown_sender.send(());
                    break;
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // Wait for workers to finish
    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::events::{EventType, Source};
    use crate::render::ForecastSeries;

    #[test]
    fn updates_print_their_text_rendition() {
        let event = Event::update(
            Source::Forecast,
            DashboardUpdate::Forecast {
                city: "Delhi".to_string(),
                series: ForecastSeries {
                    labels: vec!["H1".to_string()],
                    values: vec![42.0],
                },
            },
        );
        assert_eq!(
            render_event(&event).as_deref(),
            Some("Delhi: 1 hours forecast, peak AQI 42 at H1 (Good)")
        );
    }

    #[test]
    fn state_changes_are_silent_and_idle_finishes() {
        let loading = Event::state_change(
            ControllerState::Loading("Delhi".to_string()),
            "Loading Delhi".to_string(),
        );
        assert_eq!(render_event(&loading), None);
        assert!(!is_finished(&loading));

        let idle = Event::state_change(ControllerState::Idle, "Loaded Delhi".to_string());
        assert!(is_finished(&idle));
    }

    #[test]
    fn errors_are_printed() {
        let event = Event::new(
            Source::Current,
            "Failed to load current data for Delhi".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        assert!(render_event(&event).unwrap().contains("Failed to load current data"));
    }
}
