//! Error types for the Freshdesk client.
//!
//! This module defines `FreshdeskError`, the unified error type returned by
//! the transport, the resource managers and the result cursor.
//!
//! # Security
//!
//! Error messages built from response bodies are sanitized so the API key
//! never shows up in logs or error displays. Use `sanitize_message()` when
//! constructing messages from external sources.

use std::time::Duration;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = FreshdeskError> = std::result::Result<T, E>;

/// Unified error type for all Freshdesk operations.
#[derive(Error, Debug)]
pub enum FreshdeskError {
    /// A required setting is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never got a response (connection, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The reqwest client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The server answered with a status other than the one the operation expects.
    #[error("unexpected HTTP {status} (expected {expected}): {body}")]
    UnexpectedStatus {
        /// The status code the operation expects (200 or 201).
        expected: reqwest::StatusCode,
        /// The status code actually returned.
        status: reqwest::StatusCode,
        /// The response body, truncated and sanitized.
        body: String,
    },

    /// No response within the configured timeout.
    #[error("request timed out after {duration:?} ({operation})")]
    Timeout {
        /// The configured timeout.
        duration: Duration,
        /// Method and path of the request.
        operation: String,
    },

    /// Rate limited by the server (HTTP 429). Reported, never retried.
    #[error("rate limited by Freshdesk")]
    RateLimited {
        /// Suggested delay from the `Retry-After` header, if present.
        retry_after: Option<Duration>,
    },

    /// Requested resource was not found (HTTP 404).
    #[error("resource not found: {path}")]
    NotFound {
        /// The path that was requested.
        path: String,
    },

    /// Authentication failed (HTTP 401/403) - likely an invalid API key.
    #[error("authentication failed - check FRESHDESK_API_KEY")]
    Authentication,

    /// A request body could not be encoded or a response body decoded.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `next()` was called on a cursor without a next page.
    #[error("no more pages")]
    ExhaustedCursor,

    /// Rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// The startup probe against `/agents/me` failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// What went wrong, already sanitized.
        message: String,
    },
}

impl FreshdeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshdeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshdeskError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FreshdeskError::Validation(message.into())
    }

    /// Creates a not found error for a path.
    pub fn not_found(path: impl Into<String>) -> Self {
        FreshdeskError::NotFound { path: path.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        FreshdeskError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        FreshdeskError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the transport: network failures,
    /// timeouts and any status the operation did not expect.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FreshdeskError::Http(_)
                | FreshdeskError::Timeout { .. }
                | FreshdeskError::UnexpectedStatus { .. }
                | FreshdeskError::RateLimited { .. }
                | FreshdeskError::NotFound { .. }
                | FreshdeskError::Authentication
        )
    }

    /// Returns the HTTP status behind this error, if there is one.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FreshdeskError::UnexpectedStatus { status, .. } => Some(*status),
            FreshdeskError::RateLimited { .. } => Some(reqwest::StatusCode::TOO_MANY_REQUESTS),
            FreshdeskError::NotFound { .. } => Some(reqwest::StatusCode::NOT_FOUND),
            FreshdeskError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the server-suggested delay for a rate-limited request.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            FreshdeskError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }

    /// Replaces every occurrence of `api_key` in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Display text with the API key scrubbed.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}
