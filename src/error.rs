//! Error types for the FreeScout datasource.
//!
//! This module defines `FreeScoutError`, the unified error type used
//! throughout the crate. There are only two designed failure kinds: a
//! transport failure carrying the raw response body, and everything the
//! underlying HTTP client surfaces unmodified. JSON decode failures on
//! success responses are never errors; the transport layer degrades to
//! plain text instead.
//!
//! # Security
//!
//! Error messages may include response bodies from the server. Use
//! `sanitize_message()` before logging to ensure the API key never leaks.

use thiserror::Error;

/// Unified error type for all datasource operations.
#[derive(Error, Debug)]
pub enum FreeScoutError {
    /// Configuration error - missing or invalid connection values.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission (DNS, connect, etc.).
    /// Propagated unmodified from the underlying client, not reclassified.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The server answered with a non-success status (> 300).
    ///
    /// The message is the raw response body text; the host platform is
    /// responsible for presentation. No retry is attempted.
    #[error("{body}")]
    Api {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The raw response body text.
        body: String,
    },

    /// A URL could not be constructed from the configured base.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A response was missing an envelope field the operation relies on,
    /// such as `_embedded` on a single-conversation read.
    #[error("response is missing expected field: {field}")]
    Envelope {
        /// Dotted path of the missing field.
        field: &'static str,
    },
}

impl FreeScoutError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreeScoutError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreeScoutError::Config(message.into())
    }

    /// Creates a transport failure from a status code and raw body text.
    pub fn api(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        FreeScoutError::Api {
            status,
            body: body.into(),
        }
    }

    /// Creates an envelope error for a missing response field.
    pub fn envelope(field: &'static str) -> Self {
        FreeScoutError::Envelope { field }
    }

    /// Sanitizes a message to remove any occurrence of the API key.
    ///
    /// Server error bodies are passed through verbatim, so anything that
    /// logs them must strip the key first.
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the API key replaced with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = FreeScoutError::missing_env("FREESCOUT_API_KEY");
        assert!(err.to_string().contains("FREESCOUT_API_KEY"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_api_error_message_is_raw_body() {
        let err = FreeScoutError::api(
            reqwest::StatusCode::NOT_FOUND,
            "Conversation #42 not found",
        );
        assert_eq!(err.to_string(), "Conversation #42 not found");
    }

    #[test]
    fn test_envelope_error_names_field() {
        let err = FreeScoutError::envelope("_embedded");
        assert!(err.to_string().contains("_embedded"));
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreeScoutError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = FreeScoutError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitized_display() {
        let err = FreeScoutError::api(
            reqwest::StatusCode::UNAUTHORIZED,
            "invalid key: sekrit123",
        );
        let sanitized = err.sanitized_display("sekrit123");
        assert!(!sanitized.contains("sekrit123"));
        assert!(sanitized.contains("[REDACTED]"));
    }
}
