//! Current conditions panel
//!
//! Renders the AQI headline, the health alert and the pollutant grid

use super::super::state::DashboardState;
use super::super::utils::tag_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_current_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("CURRENT CONDITIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let Some(card) = &state.current_card else {
        let waiting = Paragraph::new("Waiting for data...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(waiting, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(inner);

    let color = tag_color(card.category.tag);
    let mut lines = vec![
        Line::from(Span::styled(
            card.city.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("AQI {}", card.aqi),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(card.category.label, Style::default().fg(color)),
        ]),
    ];
    if let Some(timestamp) = &card.timestamp {
        lines.push(Line::from(Span::styled(
            format!("Updated {}", timestamp),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(alert) = &card.alert {
        let alert_style = if alert.critical {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{}: {}", alert.level, alert.message),
            alert_style,
        )));
        if let Some(recommendation) = &alert.recommendation {
            lines.push(Line::from(Span::styled(
                recommendation.as_str(),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, card.pollutants.len().max(1) as u32);
            card.pollutants.len()
        ])
        .split(chunks[1]);

    for (cell, area) in card.pollutants.iter().zip(cells.iter()) {
        let widget = Paragraph::new(Line::from(Span::styled(
            cell.value.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .title(cell.label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(widget, *area);
    }
}
