//! AQI categories
//!
//! Breakpoints use inclusive upper bounds: `<=50` Good, `<=100` Moderate,
//! `<=150` Unhealthy for Sensitive Groups, `<=200` Unhealthy, `<=300` Very
//! Unhealthy, anything else Hazardous.

/// Display tag of a category, used to pick its colour.
///
/// Unhealthy and Very Unhealthy share `VeryUnhealthy`. Their labels differ.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum AqiTag {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AqiCategory {
    pub label: &'static str,
    pub tag: AqiTag,
}

impl AqiCategory {
    const fn new(label: &'static str, tag: AqiTag) -> Self {
        Self { label, tag }
    }
}

/// Maps an AQI value onto its category. Total over `f64`: NaN fails every
/// comparison and comes out Hazardous.
pub fn classify_aqi(aqi: f64) -> AqiCategory {
    if aqi <= 50.0 {
        AqiCategory::new("Good", AqiTag::Good)
    } else if aqi <= 100.0 {
        AqiCategory::new("Moderate", AqiTag::Moderate)
    } else if aqi <= 150.0 {
        AqiCategory::new("Unhealthy for Sensitive Groups", AqiTag::Unhealthy)
    } else if aqi <= 200.0 {
        AqiCategory::new("Unhealthy", AqiTag::VeryUnhealthy)
    } else if aqi <= 300.0 {
        AqiCategory::new("Very Unhealthy", AqiTag::VeryUnhealthy)
    } else {
        AqiCategory::new("Hazardous", AqiTag::Hazardous)
    }
}
