//! City selector panel

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};

pub fn render_selector_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let selector = &state.selector;

    let block = Block::default()
        .title("CITIES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if selector.is_empty() {
        let placeholder = if state.cities_loaded() {
            "No cities available"
        } else {
            "Loading cities..."
        };
        let list = List::new(vec![ListItem::new(placeholder)])
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(list, area);
        return;
    }

    let items: Vec<ListItem> = selector
        .options()
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let marker = if selector.selected_index() == Some(i) {
                "● "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(city.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(selector.highlighted()));
    f.render_stateful_widget(list, area, &mut list_state);
}
