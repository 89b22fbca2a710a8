//! Forecast retrieval from the `OpenMeteo` forecast service
//!
//! Fetches current conditions plus daily max/min temperature and weather
//! code, with day boundaries in the location's local timezone, and
//! normalizes the response into internal types.

use crate::config::ApiConfig;
use crate::error::WeatherNowError;
use crate::models::{Coordinates, CurrentConditions, DailyForecastEntry, openmeteo};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Normalized forecast data for one location
///
/// Either field is `None` when the service omitted that section of the
/// response; absence is not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    pub current: Option<CurrentConditions>,
    /// Daily entries ascending by date, as returned by the service
    pub daily: Option<Vec<DailyForecastEntry>>,
}

/// Client for the `OpenMeteo` forecast service
#[derive(Debug, Clone)]
pub struct ForecastFetcher {
    client: Client,
    base_url: String,
}

impl ForecastFetcher {
    /// Create a new forecast fetcher from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self, WeatherNowError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| WeatherNowError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.forecast_base_url.clone(),
        })
    }

    /// Fetch current conditions and the daily forecast for a coordinate pair
    pub async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<ForecastBundle, WeatherNowError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true&daily=temperature_2m_max,temperature_2m_min,weathercode&timezone=auto",
            self.base_url, coordinates.latitude, coordinates.longitude
        );

        debug!(
            "Fetching forecast for ({}, {})",
            coordinates.latitude, coordinates.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherNowError::forecast_fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherNowError::forecast_fetch(format!(
                "forecast service returned {status}"
            )));
        }

        let body: openmeteo::ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherNowError::forecast_fetch(format!("invalid forecast response: {e}")))?;

        Ok(ForecastBundle::from(body))
    }
}

impl From<openmeteo::ForecastResponse> for ForecastBundle {
    fn from(response: openmeteo::ForecastResponse) -> Self {
        let current = response.current_weather.map(|cw| CurrentConditions {
            temperature: cw.temperature,
            wind_speed: cw.windspeed,
            weather_code: cw.weathercode,
        });

        // The daily arrays are index-aligned by day; zipping keeps entries
        // positional and stops at the shortest array.
        let daily = response.daily.map(|daily| {
            daily
                .time
                .iter()
                .zip(&daily.temperature_max)
                .zip(&daily.temperature_min)
                .zip(&daily.weather_code)
                .map(
                    |(((date, temp_max), temp_min), weather_code)| DailyForecastEntry {
                        date: *date,
                        temp_max: *temp_max,
                        temp_min: *temp_min,
                        weather_code: *weather_code,
                    },
                )
                .collect()
        });

        Self { current, daily }
    }
}
