//! Configuration management for the `weathernow` crate
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, with validation of all settings. Every endpoint base URL is
//! configurable so tests can point the clients at a local mock server.

use crate::WeatherNowError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherNowConfig {
    /// External service endpoints and HTTP settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// External service endpoints and HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the `OpenMeteo` geocoding service
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL of the Nominatim reverse geocoding service
    #[serde(default = "default_reverse_geocoding_base_url")]
    pub reverse_geocoding_base_url: String,
    /// Base URL of the `OpenMeteo` forecast service
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Identifying user agent, required by Nominatim's usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_reverse_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    concat!("weathernow/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            reverse_geocoding_base_url: default_reverse_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for WeatherNowConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WeatherNowConfig {
    /// Load configuration from the default file location and environment
    /// variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the specified path, falling back to the
    /// default location when none is given
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. WEATHERNOW_API__FORECAST_BASE_URL
        builder = builder.add_source(
            Environment::with_prefix("WEATHERNOW")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WeatherNowConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weathernow").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            return Err(WeatherNowError::config(
                "Request timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.api.user_agent.is_empty() {
            return Err(WeatherNowError::config(
                "User agent cannot be empty; Nominatim requires an identifying header",
            )
            .into());
        }

        for url in [
            &self.api.geocoding_base_url,
            &self.api.reverse_geocoding_base_url,
            &self.api.forecast_base_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WeatherNowError::config(format!(
                    "Service base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherNowError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WeatherNowConfig::default();
        assert_eq!(
            config.api.geocoding_base_url,
            "https://geocoding-api.open-meteo.com"
        );
        assert_eq!(
            config.api.reverse_geocoding_base_url,
            "https://nominatim.openstreetmap.org"
        );
        assert_eq!(config.api.forecast_base_url, "https://api.open-meteo.com");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_timeout() {
        let mut config = WeatherNowConfig::default();
        config.api.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[test]
    fn test_config_validation_invalid_base_url() {
        let mut config = WeatherNowConfig::default();
        config.api.forecast_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = WeatherNowConfig::default();
        config.logging.level = "noisy".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid log level")
        );
    }

    #[test]
    fn test_config_path_generation() {
        let path = WeatherNowConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("weathernow"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
