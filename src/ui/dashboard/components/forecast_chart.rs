//! Forecast chart panel
//!
//! Draws the chart mounted on the canvas as a single line

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph,
};

pub fn render_forecast_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let title = format!("{}-HOUR AQI FORECAST", state.forecast_hours);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(chart) = state.canvas.chart() else {
        let waiting = Paragraph::new("Waiting for data...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(waiting, area);
        return;
    };

    let points = chart.points();
    let dataset = Dataset::default()
        .name("Predicted AQI")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightBlue))
        .data(&points);

    let [y_low, y_high] = chart.y_bounds();
    let y_labels = vec![
        Span::raw(format!("{:.0}", y_low)),
        Span::raw(format!("{:.0}", (y_low + y_high) / 2.0)),
        Span::raw(format!("{:.0}", y_high)),
    ];
    let x_labels: Vec<Span> = chart
        .axis_labels()
        .into_iter()
        .map(Span::raw)
        .collect();

    let widget = Chart::new(vec![dataset])
        .block(block.title_bottom(format!(" {} ", chart.series)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds(chart.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("AQI")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_low, y_high])
                .labels(y_labels),
        );
    f.render_widget(widget, area);
}
