//! Weather query orchestration
//!
//! Sequences location resolution and forecast retrieval for one query and
//! holds the query lifecycle as a single tagged state, so that impossible
//! flag combinations (loading and failed at once) cannot be represented.

use crate::config::WeatherNowConfig;
use crate::error::WeatherNowError;
use crate::forecast::ForecastFetcher;
use crate::geocoding::GeocodingClient;
use crate::location_resolver::LocationResolver;
use crate::models::QueryResult;
use tracing::{info, warn};

/// Number of daily forecast entries kept for display
pub const DISPLAY_DAYS: usize = 3;

/// Message shown when an error surfaces without a usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Lifecycle of the current query
///
/// Overwritten as a whole on every transition; a new query supersedes any
/// prior result or error entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading,
    Success(QueryResult),
    Failed(String),
}

/// Runs one weather query at a time: resolve the location, then fetch the
/// forecast, strictly in sequence
pub struct WeatherQueryOrchestrator {
    geocoding: GeocodingClient,
    forecast: ForecastFetcher,
    state: QueryState,
}

impl WeatherQueryOrchestrator {
    /// Create a new orchestrator from configuration
    pub fn new(config: &WeatherNowConfig) -> Result<Self, WeatherNowError> {
        Ok(Self {
            geocoding: GeocodingClient::new(&config.api)?,
            forecast: ForecastFetcher::new(&config.api)?,
            state: QueryState::Idle,
        })
    }

    /// Current query state
    #[must_use]
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Run one query end to end
    ///
    /// Entering `Loading` discards any prior result or error. The returned
    /// state is either `Success` or `Failed`; the `&mut` receiver means a
    /// second query cannot start while one is in flight.
    pub async fn run_query(&mut self, raw_input: &str) -> &QueryState {
        self.state = QueryState::Loading;

        self.state = match self.execute(raw_input).await {
            Ok(result) => {
                info!("Query succeeded for '{}'", result.place_name);
                QueryState::Success(result)
            }
            Err(err) => {
                warn!("Query failed: {}", err);
                let mut message = err.user_message();
                if message.is_empty() {
                    message = GENERIC_ERROR_MESSAGE.to_string();
                }
                QueryState::Failed(message)
            }
        };

        &self.state
    }

    /// Resolve, then fetch; the forecast call never starts unless
    /// resolution succeeded
    async fn execute(&self, raw_input: &str) -> Result<QueryResult, WeatherNowError> {
        let location = LocationResolver::resolve(&self.geocoding, raw_input).await?;
        let bundle = self.forecast.fetch_forecast(location.coordinates).await?;

        Ok(QueryResult {
            place_name: location.place_name,
            current: bundle.current,
            daily: bundle
                .daily
                .map(|entries| entries.into_iter().take(DISPLAY_DAYS).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_idle() {
        let orchestrator =
            WeatherQueryOrchestrator::new(&WeatherNowConfig::default()).unwrap();
        assert_eq!(*orchestrator.state(), QueryState::Idle);
    }

    #[test]
    fn test_state_is_a_single_variant() {
        // Failed replaces Success wholesale; no residual result can leak
        let mut state = QueryState::Success(QueryResult {
            place_name: "Delhi".to_string(),
            current: None,
            daily: None,
        });
        state = QueryState::Failed("City not found. Try another.".to_string());
        assert!(matches!(state, QueryState::Failed(_)));
    }
}
