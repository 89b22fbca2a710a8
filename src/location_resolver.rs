//! Location Resolution Module
//!
//! Turns raw user input (a city name or a `lat,lon` pair) into a
//! [`ResolvedLocation`] via the appropriate external lookup: reverse
//! geocoding for coordinate input, forward geocoding for free text.

use crate::error::WeatherNowError;
use crate::geocoding::GeocodingClient;
use crate::models::{Coordinates, ResolvedLocation};
use tracing::debug;

/// Service for resolving raw location input
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve raw user input into a structured location
    ///
    /// Input containing a comma is treated as a coordinate pair and must
    /// parse as one; anything else is treated as a free-text place name.
    /// Classification and parsing happen before any network call.
    pub async fn resolve(
        client: &GeocodingClient,
        input: &str,
    ) -> Result<ResolvedLocation, WeatherNowError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(WeatherNowError::EmptyInput);
        }

        let location = if input.contains(',') {
            let coordinates = Self::parse_coordinates(input)?;
            Self::resolve_coordinates(client, coordinates).await?
        } else {
            Self::resolve_name(client, input).await?
        };

        debug!(
            "Resolved '{}' to {} at ({}, {})",
            input,
            location.place_name,
            location.coordinates.latitude,
            location.coordinates.longitude
        );

        Ok(location)
    }

    /// Parse a `lat,lon` pair, splitting on the first comma
    fn parse_coordinates(input: &str) -> Result<Coordinates, WeatherNowError> {
        let Some((lat_part, lon_part)) = input.split_once(',') else {
            return Err(WeatherNowError::malformed_coordinate(input));
        };

        let latitude: f64 = lat_part
            .trim()
            .parse()
            .map_err(|_| WeatherNowError::malformed_coordinate(input))?;
        let longitude: f64 = lon_part
            .trim()
            .parse()
            .map_err(|_| WeatherNowError::malformed_coordinate(input))?;

        let coordinates = Coordinates::new(latitude, longitude);
        if !coordinates.in_range() {
            return Err(WeatherNowError::malformed_coordinate(input));
        }

        Ok(coordinates)
    }

    /// Resolve coordinates to a named location via reverse geocoding
    async fn resolve_coordinates(
        client: &GeocodingClient,
        coordinates: Coordinates,
    ) -> Result<ResolvedLocation, WeatherNowError> {
        let response = client.reverse(coordinates).await?;

        // A lookup that answers without any usable name still resolves;
        // the coordinates themselves become the display name.
        let place_name = response.place_name().unwrap_or_else(|| {
            format!(
                "Lat: {}, Lon: {}",
                coordinates.latitude, coordinates.longitude
            )
        });

        Ok(ResolvedLocation {
            coordinates,
            place_name,
        })
    }

    /// Resolve a free-text place name via forward geocoding
    async fn resolve_name(
        client: &GeocodingClient,
        name: &str,
    ) -> Result<ResolvedLocation, WeatherNowError> {
        match client.forward(name).await? {
            Some(best_match) => Ok(best_match.into()),
            None => Err(WeatherNowError::place_not_found(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_coordinates() {
        let coords = LocationResolver::parse_coordinates("28.61,77.21").unwrap();
        assert_eq!(coords.latitude, 28.61);
        assert_eq!(coords.longitude, 77.21);
    }

    #[test]
    fn test_parse_coordinates_trims_parts() {
        let coords = LocationResolver::parse_coordinates(" -33.87 , 151.21 ").unwrap();
        assert_eq!(coords.latitude, -33.87);
        assert_eq!(coords.longitude, 151.21);
    }

    #[rstest]
    #[case("abc,def")]
    #[case("28.61,")]
    #[case(",77.21")]
    #[case("1,2,3")]
    #[case("91.0,0.0")]
    #[case("0.0,-181.0")]
    fn test_parse_coordinates_rejects_malformed(#[case] input: &str) {
        let result = LocationResolver::parse_coordinates(input);
        assert!(matches!(
            result,
            Err(WeatherNowError::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn test_synthesized_place_name_format() {
        // Fallback name when reverse geocoding yields no usable component
        let coordinates = Coordinates::new(28.61, 77.21);
        let name = format!(
            "Lat: {}, Lon: {}",
            coordinates.latitude, coordinates.longitude
        );
        assert_eq!(name, "Lat: 28.61, Lon: 77.21");
    }
}
