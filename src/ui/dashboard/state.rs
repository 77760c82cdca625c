//! Dashboard state management
//!
//! Contains the main dashboard state struct

use super::canvas::ChartCanvas;
use super::selector::CitySelector;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{ControllerState, Event as WorkerEvent};
use crate::render::CurrentCard;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state: selector, current card, forecast canvas and activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The API the dashboard is reading from.
    pub environment: Environment,
    /// When the dashboard started, for the uptime shown in the header.
    pub start_time: Instant,
    /// City options and the current selection.
    pub selector: CitySelector,
    /// Content of the current-conditions panel, if any has loaded.
    pub current_card: Option<CurrentCard>,
    /// Holds the single forecast chart instance.
    pub canvas: ChartCanvas,
    /// Forecast horizon, for panel titles.
    pub forecast_hours: u32,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// What the controller reported last
    controller_state: ControllerState,
    /// Whether the city list has arrived
    cities_loaded: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            selector: CitySelector::default(),
            current_card: None,
            canvas: ChartCanvas::new(),
            forecast_hours: ui_config.forecast_hours,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            controller_state: ControllerState::Idle,
            cities_loaded: false,
        }
    }

    pub fn controller_state(&self) -> &ControllerState {
        &self.controller_state
    }

    pub fn set_controller_state(&mut self, state: ControllerState) {
        self.controller_state = state;
    }

    pub fn cities_loaded(&self) -> bool {
        self.cities_loaded
    }

    pub fn set_cities_loaded(&mut self, loaded: bool) {
        self.cities_loaded = loaded;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
