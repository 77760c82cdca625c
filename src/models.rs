//! Response schemas of the air-quality API.
//!
//! Every field the dashboard can live without is optional, so a partial
//! response degrades the display instead of failing the decode.

use serde::Deserialize;
use std::collections::BTreeMap;

/// `GET /cities`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityList {
    pub cities: Vec<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Severity attached to a health alert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthAlert {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl HealthAlert {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// `GET /current/{city}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub aqi: Option<f64>,
    #[serde(default)]
    pub health_alert: Option<HealthAlert>,
    /// Pollutant code to concentration. Codes are kept as sent.
    #[serde(default)]
    pub pollutants: BTreeMap<String, Option<f64>>,
}

impl CurrentConditions {
    /// AQI with a missing value read as zero.
    pub fn aqi_or_zero(&self) -> f64 {
        self.aqi.unwrap_or(0.0)
    }

    /// Concentration for the first of `codes` that has a value.
    pub fn pollutant(&self, codes: &[&str]) -> Option<f64> {
        codes
            .iter()
            .find_map(|code| self.pollutants.get(*code).copied().flatten())
    }

    pub fn pm2_5(&self) -> Option<f64> {
        self.pollutant(&["PM2_5", "PM2.5"])
    }

    pub fn pm10(&self) -> Option<f64> {
        self.pollutant(&["PM10"])
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastPoint {
    pub hour: i64,
    pub predicted_aqi: f64,
    /// Health level name for the predicted value.
    #[serde(default)]
    pub health_alert: Option<String>,
}

/// `GET /forecast/{city}?hours=N`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub forecast_time: Option<String>,
    pub forecasts: Vec<ForecastPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityAqi {
    pub city: String,
    pub aqi: f64,
    #[serde(default)]
    pub health_level: Option<String>,
}

/// `GET /city-comparison`, latest AQI per city, worst first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityComparison {
    pub cities: Vec<CityAqi>,
}

/// `GET /health`, served beside the API root rather than under it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("running")
    }
}

/// Validation scores of one forecasting model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ModelMetrics {
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BestModel {
    pub name: String,
    pub metrics: ModelMetrics,
}

/// `GET /model-performance`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelPerformance {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub models: BTreeMap<String, ModelMetrics>,
    pub best_model: BestModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_conditions_full_payload() {
        let json = r#"{
            "city": "Delhi",
            "timestamp": "2024-11-02 10:00:00",
            "aqi": 187.4,
            "pollutants": {"PM2_5": 55.26, "PM10": 120.0},
            "health_alert": {
                "level": "Unhealthy",
                "severity": "high",
                "message": "Health alert! Everyone may experience health effects.",
                "recommendation": "Limit outdoor activities."
            }
        }"#;
        let data: CurrentConditions = serde_json::from_str(json).unwrap();
        assert_eq!(data.city, "Delhi");
        assert_eq!(data.pm2_5(), Some(55.26));
        assert_eq!(data.pm10(), Some(120.0));
        let alert = data.health_alert.unwrap();
        assert_eq!(alert.severity, Severity::High);
        assert!(!alert.is_critical());
    }

    #[test]
    fn dotted_pm25_key_is_read() {
        let json = r#"{"city": "Pune", "aqi": 40, "pollutants": {"PM2.5": 12.0}}"#;
        let data: CurrentConditions = serde_json::from_str(json).unwrap();
        assert_eq!(data.pm2_5(), Some(12.0));
        assert_eq!(data.pm10(), None);
    }

    #[test]
    fn missing_optional_fields_decode() {
        let json = r#"{"city": "Pune", "pollutants": {"PM10": null}}"#;
        let data: CurrentConditions = serde_json::from_str(json).unwrap();
        assert_eq!(data.aqi_or_zero(), 0.0);
        assert!(data.health_alert.is_none());
        assert_eq!(data.pm10(), None);
    }

    #[test]
    fn unknown_severity_does_not_fail() {
        let json = r#"{"level": "Odd", "message": "?", "severity": "apocalyptic"}"#;
        let alert: HealthAlert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.severity, Severity::Unknown);

        let json = r#"{"level": "Very Unhealthy", "message": "!", "severity": "critical"}"#;
        let alert: HealthAlert = serde_json::from_str(json).unwrap();
        assert!(alert.is_critical());
    }

    #[test]
    fn forecast_requires_forecasts_array() {
        let ok = r#"{"city": "Delhi", "forecasts": [{"hour": 1, "predicted_aqi": 80.5}]}"#;
        let data: ForecastResponse = serde_json::from_str(ok).unwrap();
        assert_eq!(data.forecasts.len(), 1);
        assert_eq!(data.forecasts[0].hour, 1);

        let bad = r#"{"city": "Delhi"}"#;
        assert!(serde_json::from_str::<ForecastResponse>(bad).is_err());
    }

    #[test]
    fn health_status_decodes() {
        let json = r#"{"status": "running", "timestamp": "2024-11-02T10:00:00", "version": "1.0"}"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(health.is_running());
        assert_eq!(health.version.as_deref(), Some("1.0"));

        let down: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!down.is_running());
    }

    #[test]
    fn model_performance_decodes() {
        let json = r#"{
            "timestamp": "2024-11-02T10:00:00",
            "models": {
                "Random Forest": {"r2": 0.91, "rmse": 12.4, "mae": 8.1},
                "Linear Regression": {"r2": 0.72, "rmse": 21.0, "mae": 15.3}
            },
            "best_model": {"name": "Random Forest", "metrics": {"r2": 0.91, "rmse": 12.4, "mae": 8.1}}
        }"#;
        let perf: ModelPerformance = serde_json::from_str(json).unwrap();
        assert_eq!(perf.models.len(), 2);
        assert_eq!(perf.best_model.name, "Random Forest");
        assert_eq!(perf.models["Linear Regression"].mae, 15.3);
    }
}
