//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::aqi::AqiTag;
use crate::events::Source;
use ratatui::prelude::Color;
use std::time::Duration;

/// Colour for an AQI category tag.
pub fn tag_color(tag: AqiTag) -> Color {
    match tag {
        AqiTag::Good => Color::Green,
        AqiTag::Moderate => Color::Yellow,
        AqiTag::Unhealthy => Color::LightRed,
        AqiTag::VeryUnhealthy => Color::Red,
        AqiTag::Hazardous => Color::Magenta,
    }
}

/// Get a ratatui color for the operation that produced a log line
pub fn source_color(source: Source) -> Color {
    match source {
        Source::Cities => Color::Cyan,
        Source::Current => Color::Yellow,
        Source::Forecast => Color::Green,
        Source::Controller => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date), Some(time)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date.get(5..10), time.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Uptime as `1h 02m 03s`, dropping leading zero units.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Shortens transport errors to something that fits one log line.
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        return "API unreachable - press r to retry".to_string();
    }
    if msg.contains("operation timed out") || msg.contains("TimedOut") {
        return "Request timed out - press r to retry".to_string();
    }
    msg.to_string()
}
