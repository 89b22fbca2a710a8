//! Error types and handling for the `weathernow` crate

use thiserror::Error;

/// Main error type for a weather query
///
/// Every variant is terminal for the query it occurred in; there is no retry
/// and no partial-result recovery.
#[derive(Error, Debug)]
pub enum WeatherNowError {
    /// The query string was empty after trimming
    #[error("empty input")]
    EmptyInput,

    /// Input contained a comma but did not parse as a lat,lon pair
    #[error("malformed coordinates: {input}")]
    MalformedCoordinate { input: String },

    /// Reverse geocoding (coordinates to place name) failed
    #[error("reverse geocoding failed: {message}")]
    ReverseGeocode { message: String },

    /// Forward geocoding (place name to coordinates) failed in transport
    #[error("geocoding failed: {message}")]
    Geocode { message: String },

    /// Forward geocoding succeeded but returned zero matches
    #[error("no match for place: {query}")]
    PlaceNotFound { query: String },

    /// Forecast retrieval failed
    #[error("forecast fetch failed: {message}")]
    ForecastFetch { message: String },

    /// Configuration-related errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl WeatherNowError {
    /// Create a new malformed-coordinate error
    pub fn malformed_coordinate<S: Into<String>>(input: S) -> Self {
        Self::MalformedCoordinate {
            input: input.into(),
        }
    }

    /// Create a new reverse-geocoding error
    pub fn reverse_geocode<S: Into<String>>(message: S) -> Self {
        Self::ReverseGeocode {
            message: message.into(),
        }
    }

    /// Create a new forward-geocoding error
    pub fn geocode<S: Into<String>>(message: S) -> Self {
        Self::Geocode {
            message: message.into(),
        }
    }

    /// Create a new place-not-found error
    pub fn place_not_found<S: Into<String>>(query: S) -> Self {
        Self::PlaceNotFound {
            query: query.into(),
        }
    }

    /// Create a new forecast-fetch error
    pub fn forecast_fetch<S: Into<String>>(message: S) -> Self {
        Self::ForecastFetch {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the one-line user-facing message for this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherNowError::EmptyInput => {
                "Please enter a city name or coordinates.".to_string()
            }
            WeatherNowError::MalformedCoordinate { .. } => {
                "Invalid coordinates. Use: lat,lon (e.g., 28.61,77.21)".to_string()
            }
            WeatherNowError::ReverseGeocode { .. } => "Reverse geocoding failed.".to_string(),
            WeatherNowError::Geocode { .. } => "Geocoding failed.".to_string(),
            WeatherNowError::PlaceNotFound { .. } => "City not found. Try another.".to_string(),
            WeatherNowError::ForecastFetch { .. } => "Weather fetch failed.".to_string(),
            WeatherNowError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let geocode_err = WeatherNowError::geocode("connection refused");
        assert!(matches!(geocode_err, WeatherNowError::Geocode { .. }));

        let not_found_err = WeatherNowError::place_not_found("Nowhere123");
        assert!(matches!(not_found_err, WeatherNowError::PlaceNotFound { .. }));

        let coord_err = WeatherNowError::malformed_coordinate("abc,def");
        assert!(matches!(
            coord_err,
            WeatherNowError::MalformedCoordinate { .. }
        ));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            WeatherNowError::EmptyInput.user_message(),
            "Please enter a city name or coordinates."
        );
        assert_eq!(
            WeatherNowError::place_not_found("Nowhere123").user_message(),
            "City not found. Try another."
        );
        assert_eq!(
            WeatherNowError::malformed_coordinate("abc,def").user_message(),
            "Invalid coordinates. Use: lat,lon (e.g., 28.61,77.21)"
        );
        assert_eq!(
            WeatherNowError::forecast_fetch("HTTP 503").user_message(),
            "Weather fetch failed."
        );
    }

    #[test]
    fn test_not_found_distinct_from_transport_failure() {
        let not_found = WeatherNowError::place_not_found("Nowhere123");
        let transport = WeatherNowError::geocode("HTTP 500");
        assert_ne!(not_found.user_message(), transport.user_message());
    }
}
