//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
   █████╗   ██████╗   ██╗
  ██╔══██╗ ██╔═══██╗  ██║
  ███████║ ██║   ██║  ██║
  ██╔══██║ ██║▄▄ ██║  ██║
  ██║  ██║ ╚██████╔╝  ██║
  ╚═╝  ╚═╝  ╚══▀▀═╝   ╚═╝
"#;

fn splash_lines() -> Vec<Line<'static>> {
    let logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| Line::from(Span::styled(line, logo_style)))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Air Quality Dashboard",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("Version {}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    )));
    lines
}

pub fn render_splash(f: &mut Frame) {
    let lines = splash_lines();
    let [area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
