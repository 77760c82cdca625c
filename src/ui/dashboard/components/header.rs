//! Dashboard header component
//!
//! Renders the title and loading gauge

use super::super::state::DashboardState;
use super::super::utils::format_uptime;
use crate::events::ControllerState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and controller progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "AIR QUALITY DASHBOARD v{} | {} | up {}",
        version,
        state.environment.api_url(),
        format_uptime(state.start_time.elapsed())
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = match state.controller_state() {
        ControllerState::Loading(city) => {
            // Loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (format!("LOADING - {}", city), Color::LightYellow, progress)
        }
        ControllerState::Idle if !state.cities_loaded() => (
            "WAITING - No city list yet, press R to retry".to_string(),
            Color::LightRed,
            0,
        ),
        ControllerState::Idle => {
            let city = state.selector.selected().unwrap_or("-");
            (format!("IDLE - Showing {}", city), Color::LightBlue, 100)
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
