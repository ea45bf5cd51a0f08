//! Configuration for the Freshdesk client.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present.

use crate::error::FreshdeskError;
use std::env;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to a Freshdesk account.
///
/// The API key is stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the helpdesk (e.g., `https://acme.freshdesk.com`).
    pub domain: String,

    /// API key for basic authentication.
    /// This value must never be logged or included in error messages.
    pub api_key: String,

    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Builds a configuration from explicit values, applying the same
    /// validation as [`Config::from_env`].
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Result<Self, FreshdeskError> {
        let domain = Self::validate_domain(domain.into())?;
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FreshdeskError::invalid_config("API key must not be empty"));
        }
        Self::validate_api_key(&api_key)?;

        Ok(Config {
            domain,
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `FRESHDESK_DOMAIN`: helpdesk URL or subdomain (`acme`, `acme.freshdesk.com`)
    /// - `FRESHDESK_API_KEY`: the agent API key
    ///
    /// # Optional
    ///
    /// - `FRESHDESK_TIMEOUT_SECS`: request timeout, defaults to 30
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if a required variable is missing
    /// or a value fails validation.
    pub fn from_env() -> Result<Self, FreshdeskError> {
        let domain = Self::get_required_env("FRESHDESK_DOMAIN")?;
        let api_key = Self::get_required_env("FRESHDESK_API_KEY")?;

        let timeout = match env::var("FRESHDESK_TIMEOUT_SECS") {
            Ok(raw) => Self::parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self::new(domain, api_key)?.with_timeout(timeout))
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshdeskError> {
        env::var(name)
            .map_err(|_| FreshdeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreshdeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    fn parse_timeout(raw: &str) -> Result<Duration, FreshdeskError> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(FreshdeskError::invalid_config(
                "FRESHDESK_TIMEOUT_SECS must be a positive integer",
            )),
        }
    }

    /// Validates and normalizes the helpdesk domain.
    ///
    /// A bare subdomain (`acme`) or host (`acme.freshdesk.com`) is expanded
    /// to an https URL.
    fn validate_domain(domain: String) -> Result<String, FreshdeskError> {
        let domain = domain.trim().trim_end_matches('/').to_string();

        if domain.is_empty() {
            return Err(FreshdeskError::invalid_config("FRESHDESK_DOMAIN must not be empty"));
        }

        if domain.starts_with("http://") || domain.starts_with("https://") {
            return Ok(domain);
        }

        if domain.contains("://") {
            return Err(FreshdeskError::invalid_config(
                "FRESHDESK_DOMAIN must start with http:// or https://",
            ));
        }

        if domain.contains('.') {
            Ok(format!("https://{}", domain))
        } else {
            Ok(format!("https://{}.freshdesk.com", domain))
        }
    }

    /// Validates the API key is not a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreshdeskError> {
        let key_lower = key.to_lowercase();
        let placeholder_patterns = ["your_api_key", "your_key", "placeholder", "xxx", "changeme"];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(FreshdeskError::invalid_config(
                    "FRESHDESK_API_KEY appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}
