//! Connection configuration for the FreeScout datasource.
//!
//! The host platform constructs a [`Config`] once per datasource instance;
//! it is immutable for the instance's lifetime. For standalone use outside
//! a host platform, [`Config::from_env`] reads the same two values from
//! environment variables.

use crate::error::FreeScoutError;
use std::env;

/// Configuration for connecting to a FreeScout instance.
///
/// Both fields are set once at construction and never mutated.
/// The API key is stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the FreeScout instance (e.g., `https://support.example.com`).
    pub base_url: String,

    /// API key for authentication, sent as `X-FreeScout-API-Key`.
    /// This value must never be logged or included in error messages.
    pub api_key: String,
}

impl Config {
    /// Creates a configuration from host-supplied values.
    ///
    /// The base URL is trimmed of a trailing slash; the API key is checked
    /// against common placeholder values.
    ///
    /// # Errors
    ///
    /// Returns `FreeScoutError::Config` if the URL lacks an `http://` or
    /// `https://` scheme, or the API key is empty or a placeholder.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, FreeScoutError> {
        let base_url = Self::validate_base_url(base_url.into())?;
        let api_key = api_key.into();
        Self::validate_api_key(&api_key)?;

        Ok(Config { base_url, api_key })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `FREESCOUT_URL`: Base URL of the FreeScout instance
    /// - `FREESCOUT_API_KEY`: API key for authentication
    ///
    /// # Errors
    ///
    /// Returns `FreeScoutError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, FreeScoutError> {
        let base_url = Self::get_required_env("FREESCOUT_URL")?;
        let api_key = Self::get_required_env("FREESCOUT_API_KEY")?;

        Self::new(base_url, api_key)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreeScoutError> {
        env::var(name)
            .map_err(|_| FreeScoutError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreeScoutError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, FreeScoutError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(FreeScoutError::invalid_config(
                "base URL must start with http:// or https://",
            ));
        }

        Ok(url)
    }

    /// Validates the API key is not empty or a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreeScoutError> {
        if key.trim().is_empty() {
            return Err(FreeScoutError::invalid_config("API key must not be empty"));
        }

        let key_lower = key.to_lowercase();
        let placeholder_patterns = ["your_api_key", "your_key", "placeholder", "xxx", "changeme"];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(FreeScoutError::invalid_config(
                    "API key appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_removes_trailing_slash() {
        let config = Config::new("https://support.example.com/", "abc123").unwrap();
        assert_eq!(config.base_url, "https://support.example.com");
    }

    #[test]
    fn test_new_requires_scheme() {
        let result = Config::new("support.example.com", "abc123");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_placeholder_key() {
        let result = Config::new("https://support.example.com", "your_api_key_here");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let result = Config::new("https://support.example.com", "   ");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_accepts_real_key() {
        let result = Config::new("https://support.example.com", "abc123def456");
        assert!(result.is_ok());
    }
}
