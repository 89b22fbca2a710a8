//! Geocoding clients
//!
//! Forward geocoding (place name to coordinates) uses the `OpenMeteo`
//! geocoding service; reverse geocoding (coordinates to place name) uses
//! Nominatim (OpenStreetMap), which requires an identifying user agent.
//! Neither service needs an API key.

use crate::config::ApiConfig;
use crate::error::WeatherNowError;
use crate::models::{Coordinates, nominatim, openmeteo};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for the two geocoding collaborators
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    geocoding_base_url: String,
    reverse_base_url: String,
}

impl GeocodingClient {
    /// Create a new geocoding client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self, WeatherNowError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| WeatherNowError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            geocoding_base_url: config.geocoding_base_url.clone(),
            reverse_base_url: config.reverse_geocoding_base_url.clone(),
        })
    }

    /// Look up the single best match for a free-text place name
    ///
    /// Returns `Ok(None)` when the service answered but found nothing, which
    /// the caller reports differently from a transport failure.
    pub async fn forward(
        &self,
        query: &str,
    ) -> Result<Option<openmeteo::GeocodingMatch>, WeatherNowError> {
        let url = format!(
            "{}/v1/search?name={}&count=1&language=en&format=json",
            self.geocoding_base_url,
            urlencoding::encode(query)
        );

        debug!("Geocoding '{}' via {}", query, self.geocoding_base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherNowError::geocode(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherNowError::geocode(format!(
                "geocoding service returned {status}"
            )));
        }

        let body: openmeteo::GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherNowError::geocode(format!("invalid geocoding response: {e}")))?;

        Ok(body.results.unwrap_or_default().into_iter().next())
    }

    /// Look up the address at a coordinate pair
    pub async fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> Result<nominatim::ReverseResponse, WeatherNowError> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.reverse_base_url, coordinates.latitude, coordinates.longitude
        );

        debug!(
            "Reverse geocoding ({}, {}) via {}",
            coordinates.latitude, coordinates.longitude, self.reverse_base_url
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherNowError::reverse_geocode(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherNowError::reverse_geocode(format!(
                "reverse geocoding service returned {status}"
            )));
        }

        response.json().await.map_err(|e| {
            WeatherNowError::reverse_geocode(format!("invalid reverse geocoding response: {e}"))
        })
    }
}
