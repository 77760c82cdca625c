use crate::environment::Environment;
use crate::models::{
    CityComparison, CityList, CurrentConditions, ForecastResponse, HealthStatus, ModelPerformance,
};
use error::ApiError;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The air-quality API as seen by the dashboard.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AirQualityApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// List the cities the API has data for, in display order.
    async fn get_cities(&self) -> Result<CityList, ApiError>;

    /// Latest readings for a city.
    async fn get_current(&self, city: &str) -> Result<CurrentConditions, ApiError>;

    /// Hourly AQI predictions for the next `hours` hours.
    async fn get_forecast(&self, city: &str, hours: u32) -> Result<ForecastResponse, ApiError>;

    /// Latest AQI of every city, worst first.
    async fn get_city_comparison(&self) -> Result<CityComparison, ApiError>;

    /// Liveness of the API server.
    async fn get_health(&self) -> Result<HealthStatus, ApiError>;

    /// Validation scores of the forecasting models.
    async fn get_model_performance(&self) -> Result<ModelPerformance, ApiError>;
}
