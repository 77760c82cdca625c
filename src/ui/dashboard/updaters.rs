//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;
use crate::events::{DashboardUpdate, Event as WorkerEvent, EventType};

impl DashboardState {
    /// Update the dashboard state with a new tick and any queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::StateChange => {
                if let Some(state) = &event.state {
                    self.set_controller_state(state.clone());
                }
            }
            EventType::Update => {
                if let Some(update) = &event.update {
                    self.apply_update(update.clone());
                }
            }
            EventType::Success | EventType::Error | EventType::Refresh => {}
        }
    }

    /// Applies rendered content. Content for a city other than the selected
    /// one is a late answer to an earlier selection and is dropped.
    pub fn apply_update(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::CitiesLoaded { cities, selected } => {
                self.selector.populate(cities, selected.as_deref());
                self.set_cities_loaded(true);
            }
            DashboardUpdate::Current { city, card } => {
                if self.selector.is_selected(&city) {
                    self.current_card = Some(card);
                } else {
                    log::debug!("dropping stale current conditions for {}", city);
                }
            }
            DashboardUpdate::Forecast { city, series } => {
                if self.selector.is_selected(&city) {
                    self.canvas.mount(city, series);
                } else {
                    log::debug!("dropping stale forecast for {}", city);
                }
            }
        }
    }
}
