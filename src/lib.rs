//! `weathernow` - city and coordinate weather lookup
//!
//! This library resolves a user-supplied location (city name or `lat,lon`
//! pair) into coordinates, retrieves current conditions and a short daily
//! forecast from `OpenMeteo`, and normalizes the result for display.

pub mod config;
pub mod error;
pub mod forecast;
pub mod geocoding;
pub mod location_resolver;
pub mod models;
pub mod query;
pub mod render;
pub mod weather_code;

// Re-export core types for public API
pub use config::WeatherNowConfig;
pub use error::WeatherNowError;
pub use forecast::{ForecastBundle, ForecastFetcher};
pub use geocoding::GeocodingClient;
pub use location_resolver::LocationResolver;
pub use models::{
    Coordinates, CurrentConditions, DailyForecastEntry, QueryResult, ResolvedLocation,
};
pub use query::{QueryState, WeatherQueryOrchestrator};
pub use weather_code::{WeatherMeta, describe};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherNowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
