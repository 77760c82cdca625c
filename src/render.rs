//! Display models built from API responses
//!
//! These are the pure halves of the current-conditions and forecast renders;
//! drawing them is the UI's job.

use crate::aqi::{AqiCategory, classify_aqi};
use crate::models::{CurrentConditions, ForecastResponse};
use std::fmt::{Display, Formatter};

/// Placeholder shown for a pollutant the API did not report.
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct AlertBlock {
    pub level: String,
    pub message: String,
    pub recommendation: Option<String>,
    /// Drawn highlighted when set.
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollutantCell {
    pub label: &'static str,
    pub value: String,
}

/// Everything the current-conditions panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCard {
    pub city: String,
    pub timestamp: Option<String>,
    pub aqi: i64,
    pub category: AqiCategory,
    pub alert: Option<AlertBlock>,
    pub pollutants: Vec<PollutantCell>,
}

/// Parallel label/value sequences for the forecast chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Highest predicted value and its label.
    pub fn peak(&self) -> Option<(&str, f64)> {
        let (index, value) = self
            .values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))?;
        self.labels
            .get(index)
            .map(|label| (label.as_str(), *value))
    }
}

/// Rounds half up, so `2.5` becomes `3` and `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// One decimal place with exact ties rounded away from zero, so `12.25`
/// reads `12.3` while `1.45` (stored as 1.4499..) reads `1.4`.
fn format_one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    // The product must be exact, otherwise the tie is a rounding artifact
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        let away = scaled + 0.5_f64.copysign(value);
        return format!("{:.1}", away / 10.0);
    }
    format!("{:.1}", value)
}

/// One decimal place, or the placeholder when absent.
pub fn format_concentration(value: Option<f64>) -> String {
    match value {
        Some(v) => format_one_decimal(v),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn render_current(data: &CurrentConditions) -> CurrentCard {
    let aqi = data.aqi_or_zero();
    let alert = data.health_alert.as_ref().map(|alert| AlertBlock {
        level: alert.level.clone(),
        message: alert.message.clone(),
        recommendation: alert.recommendation.clone(),
        critical: alert.is_critical(),
    });

    CurrentCard {
        city: data.city.clone(),
        timestamp: data.timestamp.clone(),
        aqi: round_half_up(aqi),
        category: classify_aqi(aqi),
        alert,
        pollutants: vec![
            PollutantCell {
                label: "PM2.5",
                value: format_concentration(data.pm2_5()),
            },
            PollutantCell {
                label: "PM10",
                value: format_concentration(data.pm10()),
            },
        ],
    }
}

pub fn render_forecast(data: &ForecastResponse) -> ForecastSeries {
    let (labels, values) = data
        .forecasts
        .iter()
        .map(|point| (format!("H{}", point.hour), point.predicted_aqi))
        .unzip();
    ForecastSeries { labels, values }
}

impl Display for CurrentCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.city)?;
        writeln!(f, "AQI {} ({}) [{}]", self.aqi, self.category.label, self.category.tag)?;
        if let Some(alert) = &self.alert {
            let marker = if alert.critical { "!! " } else { "" };
            writeln!(f, "{}{}: {}", marker, alert.level, alert.message)?;
            if let Some(recommendation) = &alert.recommendation {
                writeln!(f, "{}", recommendation)?;
            }
        }
        let grid = self
            .pollutants
            .iter()
            .map(|cell| format!("{} {}", cell.label, cell.value))
            .collect::<Vec<_>>()
            .join(" | ");
        write!(f, "{}", grid)
    }
}

impl Display for ForecastSeries {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no forecast data");
        }
        match self.peak() {
            Some((label, value)) => write!(
                f,
                "{} hours forecast, peak AQI {:.0} at {} ({})",
                self.len(),
                value,
                label,
                classify_aqi(value).label
            ),
            None => write!(f, "{} hours forecast", self.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::AqiTag;
    use crate::models::{ForecastPoint, HealthAlert, Severity};
    use std::collections::BTreeMap;

    fn conditions(aqi: Option<f64>, pollutants: &[(&str, f64)]) -> CurrentConditions {
        CurrentConditions {
            city: "Delhi".to_string(),
            timestamp: None,
            aqi,
            health_alert: Some(HealthAlert {
                level: "Very Unhealthy".to_string(),
                message: "Health warning! Serious health effects possible.".to_string(),
                severity: Severity::Critical,
                recommendation: None,
            }),
            pollutants: pollutants
                .iter()
                .map(|(code, value)| (code.to_string(), Some(*value)))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn forecast(points: &[(i64, f64)]) -> ForecastResponse {
        ForecastResponse {
            city: Some("Delhi".to_string()),
            forecast_time: None,
            forecasts: points
                .iter()
                .map(|(hour, aqi)| ForecastPoint {
                    hour: *hour,
                    predicted_aqi: *aqi,
                    health_alert: None,
                })
                .collect(),
        }
    }

    #[test]
    fn pm25_is_shown_with_one_decimal() {
        let card = render_current(&conditions(Some(120.0), &[("PM2_5", 55.26)]));
        assert_eq!(card.pollutants[0].label, "PM2.5");
        assert_eq!(card.pollutants[0].value, "55.3");
    }

    #[test]
    fn absent_pollutants_show_placeholder() {
        let card = render_current(&conditions(Some(120.0), &[]));
        assert_eq!(card.pollutants[0].value, "N/A");
        assert_eq!(card.pollutants[1].value, "N/A");
    }

    #[test]
    fn zero_concentration_is_a_value_not_missing() {
        let card = render_current(&conditions(Some(10.0), &[("PM10", 0.0)]));
        assert_eq!(card.pollutants[1].value, "0.0");
    }

    #[test]
    fn aqi_is_rounded_and_classified() {
        let card = render_current(&conditions(Some(250.5), &[]));
        assert_eq!(card.aqi, 251);
        assert_eq!(card.category.label, "Very Unhealthy");
        assert_eq!(card.category.tag, AqiTag::VeryUnhealthy);
        assert!(card.alert.as_ref().unwrap().critical);
    }

    #[test]
    fn missing_aqi_reads_as_zero() {
        let card = render_current(&conditions(None, &[]));
        assert_eq!(card.aqi, 0);
        assert_eq!(card.category.label, "Good");
    }

    #[test]
    fn round_half_up_matches_browser_rounding() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(187.4), 187);
        assert_eq!(round_half_up(0.49999999999999994), 0);
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_concentration(Some(12.25)), "12.3");
        assert_eq!(format_concentration(Some(2.75)), "2.8");
        assert_eq!(format_concentration(Some(-2.75)), "-2.8");
        assert_eq!(format_concentration(Some(1.45)), "1.4");
        assert_eq!(format_concentration(Some(55.26)), "55.3");
    }

    #[test]
    fn forecast_produces_parallel_sequences() {
        let series = render_forecast(&forecast(&[(1, 80.0), (2, 95.0)]));
        assert_eq!(series.labels, vec!["H1", "H2"]);
        assert_eq!(series.values, vec![80.0, 95.0]);
        assert_eq!(series.peak(), Some(("H2", 95.0)));
    }

    #[test]
    fn empty_forecast_has_no_peak() {
        let series = render_forecast(&forecast(&[]));
        assert!(series.is_empty());
        assert_eq!(series.to_string(), "no forecast data");
    }

    #[test]
    fn card_text_lists_alert_and_grid() {
        let text = render_current(&conditions(Some(42.0), &[("PM2.5", 9.04)])).to_string();
        assert!(text.contains("AQI 42 (Good) [good]"));
        assert!(text.contains("!! Very Unhealthy"));
        assert!(text.contains("PM2.5 9.0 | PM10 N/A"));
    }
}
