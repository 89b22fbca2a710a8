//! Data models for weather queries and API responses
//!
//! Contains the internal types that flow through a query as well as the
//! wire-format structures for the external services. Fields the services may
//! omit are modelled as `Option` so absence is representable without being an
//! error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the pair lies within the valid lat/lon ranges
    #[must_use]
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A resolved location: coordinates plus a display name
///
/// Produced once per query by the resolver and not persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub place_name: String,
}

/// Current conditions at a location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: u16,
}

/// One calendar day of forecast data
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    /// WMO weather code
    pub weather_code: u16,
}

/// The aggregate result of one successful query
///
/// Either weather field may be absent when the forecast service omitted the
/// corresponding section; rendering treats absence as "nothing to show".
/// Superseded entirely by each new query, never merged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QueryResult {
    pub place_name: String,
    pub current: Option<CurrentConditions>,
    /// Daily entries ascending by date, already truncated for display
    pub daily: Option<Vec<DailyForecastEntry>>,
}

/// `OpenMeteo` API response structures
pub mod openmeteo {
    use super::{Coordinates, NaiveDate, ResolvedLocation};
    use serde::Deserialize;

    /// Geocoding response from the `OpenMeteo` search endpoint
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingMatch>>,
    }

    /// One geocoding match
    #[derive(Debug, Deserialize)]
    pub struct GeocodingMatch {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
    }

    /// Forecast response from the `OpenMeteo` forecast endpoint
    ///
    /// Both sections are optional; the service only returns what was asked
    /// for and may drop either one.
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeather>,
        pub daily: Option<DailyData>,
    }

    /// Current conditions block (`current_weather=true`)
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: f64,
        pub windspeed: f64,
        pub weathercode: u16,
    }

    /// Daily forecast arrays, index-aligned by day
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<NaiveDate>,
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Vec<f64>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Vec<f64>,
        #[serde(rename = "weathercode")]
        pub weather_code: Vec<u16>,
    }

    impl From<GeocodingMatch> for ResolvedLocation {
        fn from(m: GeocodingMatch) -> Self {
            let place_name = match &m.country {
                Some(country) => format!("{}, {}", m.name, country),
                None => m.name.clone(),
            };
            Self {
                coordinates: Coordinates::new(m.latitude, m.longitude),
                place_name,
            }
        }
    }
}

/// Nominatim (OpenStreetMap) reverse geocoding response structures
pub mod nominatim {
    use serde::Deserialize;

    /// Reverse geocoding response
    #[derive(Debug, Deserialize)]
    pub struct ReverseResponse {
        pub address: Option<Address>,
        pub display_name: Option<String>,
    }

    /// Address components of a reverse geocoding match
    #[derive(Debug, Deserialize, Default)]
    pub struct Address {
        pub city: Option<String>,
        pub town: Option<String>,
        pub village: Option<String>,
    }

    impl ReverseResponse {
        /// Pick the display name by priority: city, town, village, then the
        /// full display name. `None` when the response carries none of them.
        #[must_use]
        pub fn place_name(&self) -> Option<String> {
            if let Some(address) = &self.address {
                let place = address
                    .city
                    .clone()
                    .or_else(|| address.town.clone())
                    .or_else(|| address.village.clone())
                    .or_else(|| self.display_name.clone());
                if place.is_some() {
                    return place;
                }
            }
            self.display_name.clone()
        }
    }
}
