//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{splash_duration, tick};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::Command;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub forecast_hours: u32,
}

impl UIConfig {
    pub fn new(with_background_color: bool, forecast_hours: u32) -> Self {
        Self {
            with_background_color,
            forecast_hours,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The dashboard itself.
    Dashboard,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Send(Command),
    None,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Dashboard state. Exists from the start so events that arrive during
    /// the splash screen are kept.
    state: DashboardState,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the controller worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sends selections to the controller worker.
    command_sender: mpsc::Sender<Command>,

    /// Broadcasts shutdown signal to the worker.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        command_sender: mpsc::Sender<Command>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state: DashboardState::new(environment, Instant::now(), ui_config),
            current_screen: Screen::Splash,
            event_receiver,
            command_sender,
            shutdown_sender,
        }
    }

    fn send(&self, command: Command) {
        // A full queue means the worker is busy with older input; the user
        // can press again.
        if let Err(e) = self.command_sender.try_send(command) {
            log::warn!("dropping command: {}", e);
        }
    }
}

/// Maps a key on the dashboard screen to an action, updating the selector.
pub fn handle_key(state: &mut DashboardState, code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => {
            state.selector.highlight_previous();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selector.highlight_next();
            KeyAction::None
        }
        KeyCode::Enter => match state.selector.commit() {
            Some(city) => KeyAction::Send(Command::Select(city)),
            None => KeyAction::None,
        },
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if !state.cities_loaded() {
                return KeyAction::Send(Command::Reload);
            }
            match state.selector.selected() {
                Some(city) => KeyAction::Send(Command::Select(city.to_string())),
                None => KeyAction::None,
            }
        }
        _ => KeyAction::None,
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }
        app.state.update();

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.current_screen = Screen::Dashboard;
        }

        terminal.draw(|f| render(f, app.current_screen, &app.state))?;

        if event::poll(tick())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let action = match app.current_screen {
                    Screen::Splash => {
                        // Any key other than quit skips the splash screen
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            KeyAction::Quit
                        } else {
                            app.current_screen = Screen::Dashboard;
                            KeyAction::None
                        }
                    }
                    Screen::Dashboard => handle_key(&mut app.state, key.code),
                };

                match action {
                    KeyAction::Quit => {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    KeyAction::Send(command) => app.send(command),
                    KeyAction::None => {}
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
