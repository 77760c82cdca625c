//! Air-quality API client
//!
//! Thin JSON-over-HTTP client for the city list, current conditions and
//! forecast endpoints.

use crate::api::AirQualityApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::network;
use crate::environment::Environment;
use crate::models::{
    CityComparison, CityList, CurrentConditions, ForecastResponse, HealthStatus, ModelPerformance,
};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("aqi-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    /// Creates a client with only a connect timeout; a request that connects
    /// but never answers waits until the network layer gives up.
    pub fn new(environment: Environment) -> Self {
        Self::with_timeout(environment, None)
    }

    pub fn with_timeout(environment: Environment, timeout: Option<Duration>) -> Self {
        let mut builder = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            client: builder.build().expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn city_endpoint(prefix: &str, city: &str) -> String {
        format!("{}/{}", prefix, urlencoding::encode(city))
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// URL of an endpoint served from the server root instead of the API base.
    fn build_root_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.service_root(),
            endpoint.trim_start_matches('/')
        )
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.get_url(&self.build_url(endpoint), query).await
    }

    async fn get_url<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl AirQualityApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_cities(&self) -> Result<CityList, ApiError> {
        self.get_request("cities", &[]).await
    }

    async fn get_current(&self, city: &str) -> Result<CurrentConditions, ApiError> {
        self.get_request(&Self::city_endpoint("current", city), &[])
            .await
    }

    async fn get_forecast(&self, city: &str, hours: u32) -> Result<ForecastResponse, ApiError> {
        self.get_request(
            &Self::city_endpoint("forecast", city),
            &[("hours", hours.to_string())],
        )
        .await
    }

    async fn get_city_comparison(&self) -> Result<CityComparison, ApiError> {
        self.get_request("city-comparison", &[]).await
    }

    async fn get_health(&self) -> Result<HealthStatus, ApiError> {
        self.get_url(&self.build_root_url("health"), &[]).await
    }

    async fn get_model_performance(&self) -> Result<ModelPerformance, ApiError> {
        self.get_request("model-performance", &[]).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_double_slashes() {
        let client = ApiClient::new(Environment::Custom {
            api_url: "http://example.test/api/".to_string(),
        });
        assert_eq!(
            client.build_url("/cities"),
            "http://example.test/api/cities"
        );
    }

    #[test]
    fn health_lives_beside_the_api_prefix() {
        let client = ApiClient::new(Environment::Local);
        assert_eq!(client.build_root_url("health"), "http://localhost:5000/health");
        assert_eq!(
            client.build_url("model-performance"),
            "http://localhost:5000/api/model-performance"
        );
    }

    #[test]
    fn city_names_are_percent_encoded() {
        assert_eq!(
            ApiClient::city_endpoint("current", "New Delhi"),
            "current/New%20Delhi"
        );
        assert_eq!(ApiClient::city_endpoint("forecast", "Pune"), "forecast/Pune");
    }

    #[test]
    fn decode_errors_are_reported_as_decode() {
        let result: Result<CityList, ApiError> = ApiClient::decode_response(b"{\"towns\": []}");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    /// Nothing listens on port 9 of the loopback interface.
    async fn unreachable_api_is_a_reqwest_error() {
        let client = ApiClient::new(Environment::Custom {
            api_url: "http://127.0.0.1:9/api".to_string(),
        });
        let result = client.get_cities().await;
        assert!(matches!(result, Err(ApiError::Reqwest(_))));
    }
}
