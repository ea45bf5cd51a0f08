//! HTTP transport for the Freshdesk API.
//!
//! This module provides [`ApiClient`], which makes authenticated requests
//! against a helpdesk, checks the expected status code, and exposes the
//! resource managers.
//!
//! # Errors
//!
//! Nothing is retried. Network failures and unexpected statuses are returned
//! to the caller as soon as they happen; 401/403, 404 and 429 are classified
//! into their own variants.
//!
//! # Security
//!
//! The API key is never logged. Error bodies are sanitized before they are
//! stored in an error.

use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, LINK, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::endpoints::Endpoints;
use crate::error::{FreshdeskError, Result};
use crate::managers::{AgentManager, CompanyManager, GroupManager, TicketManager, UserManager};
use crate::pagination::parse_link_header;

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Freshdesk expects the API key as the basic-auth user and any password.
const BASIC_AUTH_PASSWORD: &str = "X";

/// Authenticated HTTP client for one Freshdesk helpdesk.
///
/// Cloning is cheap: the underlying connection pool is shared.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ApiClient::new(&config)?;
///
/// let companies = client.companies().all().await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Helpdesk root, e.g. `https://acme.freshdesk.com`.
    base_url: String,

    /// SECURITY: Never log this value!
    api_key: String,

    endpoints: Endpoints,

    timeout: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client from configuration, using the default endpoint table.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FreshdeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.domain.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            endpoints: Endpoints::default(),
            timeout: config.timeout,
        })
    }

    /// Replaces the endpoint table.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// The endpoint table used by the managers.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The helpdesk root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ticket operations.
    pub fn tickets(&self) -> TicketManager<'_> {
        TicketManager::new(self)
    }

    /// Company operations.
    pub fn companies(&self) -> CompanyManager<'_> {
        CompanyManager::new(self)
    }

    /// Contact operations.
    pub fn users(&self) -> UserManager<'_> {
        UserManager::new(self)
    }

    /// Agent group operations.
    pub fn groups(&self) -> GroupManager<'_> {
        GroupManager::new(self)
    }

    /// Agent operations.
    pub fn agents(&self) -> AgentManager<'_> {
        AgentManager::new(self)
    }

    /// Tests connectivity by fetching the agent that owns the API key.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::ConnectionTest` describing the failure.
    pub async fn test_connection(&self) -> Result<()> {
        tracing::debug!("Testing connection to Freshdesk");

        match self.agents().me().await {
            Ok(agent) => {
                tracing::info!(agent_id = agent.id, "Connection test successful");
                Ok(())
            }
            Err(FreshdeskError::Authentication) => Err(FreshdeskError::connection_test(
                "Authentication failed - verify FRESHDESK_API_KEY is correct",
            )),
            Err(FreshdeskError::Timeout { duration, .. }) => {
                Err(FreshdeskError::connection_test(format!(
                    "Connection timed out after {:?} - verify FRESHDESK_DOMAIN is correct and reachable",
                    duration
                )))
            }
            Err(e) => Err(FreshdeskError::connection_test(
                e.sanitized_display(&self.api_key),
            )),
        }
    }

    /// Rejects identifiers the API can never hold.
    pub(crate) fn validate_id(id: i64, field_name: &str) -> Result<()> {
        if id <= 0 {
            return Err(FreshdeskError::validation(format!(
                "{} must be a positive integer, got: {}",
                field_name, id
            )));
        }
        Ok(())
    }

    /// Extracts the `rel="next"` URL from the `Link` response headers.
    pub fn next_link(headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(LINK)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|value| parse_link_header(value, "next"))
    }

    /// Turns a path or an absolute next link into a full URL.
    ///
    /// Absolute URLs must share the configured origin so a crafted `Link`
    /// header cannot send the API key elsewhere.
    fn resolve(&self, path_or_url: &str) -> Result<String> {
        if !(path_or_url.starts_with("http://") || path_or_url.starts_with("https://")) {
            return Ok(format!("{}{}", self.base_url, path_or_url));
        }

        let target = Url::parse(path_or_url)
            .map_err(|e| FreshdeskError::validation(format!("invalid next link: {}", e)))?;
        let base = Url::parse(&self.base_url)
            .map_err(|e| FreshdeskError::validation(format!("invalid base URL: {}", e)))?;

        if target.origin() != base.origin() {
            return Err(FreshdeskError::validation(format!(
                "link host mismatch: expected {:?}, got {:?}",
                base.host_str(),
                target.host_str()
            )));
        }

        Ok(target.into())
    }

    /// GETs a path (or a next link) and decodes the JSON body. Expects 200.
    ///
    /// The response headers are returned alongside the value so callers can
    /// look for a next link.
    pub async fn get<T>(&self, path: &str) -> Result<(T, HeaderMap)>
    where
        T: DeserializeOwned,
    {
        let (body, headers) = self
            .send(Method::GET, path, None, StatusCode::OK)
            .await?;
        let value = serde_json::from_str(&body)?;
        Ok((value, headers))
    }

    /// POSTs `input` as JSON and decodes the response. Any status other than
    /// `expected` is an error.
    pub async fn post<T, B>(&self, path: &str, input: &B, expected: StatusCode) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(input)?;
        let (body, _) = self
            .send(Method::POST, path, Some(payload), expected)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// PUTs `input` as JSON and decodes the response. Any status other than
    /// `expected` is an error.
    pub async fn put<T, B>(&self, path: &str, input: &B, expected: StatusCode) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(input)?;
        let (body, _) = self
            .send(Method::PUT, path, Some(payload), expected)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends one request and returns the raw body and headers.
    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<Vec<u8>>,
        expected: StatusCode,
    ) -> Result<(String, HeaderMap)> {
        let url = self.resolve(path)?;

        tracing::debug!(
            method = %method,
            path = %path,
            "Making Freshdesk API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD))
            .header(ACCEPT, "application/json");

        if let Some(payload) = payload {
            req = req.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return FreshdeskError::timeout(self.timeout, format!("{} {}", method, path));
            }
            FreshdeskError::Http(e)
        })?;
        let status = response.status();

        if status != expected {
            return Err(self.handle_http_error(status, expected, path, response).await);
        }

        let headers = response.headers().clone();
        let body = response.text().await.map_err(FreshdeskError::Http)?;

        tracing::trace!(body = %body, "Freshdesk API response");

        Ok((body, headers))
    }

    /// Converts a response with an unexpected status into an error.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        expected: StatusCode,
        path: &str,
        response: reqwest::Response,
    ) -> FreshdeskError {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.text().await.unwrap_or_default();
        let body = FreshdeskError::sanitize_message(&body, &self.api_key);
        let body = truncate_body(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FreshdeskError::Authentication,
            StatusCode::NOT_FOUND => FreshdeskError::not_found(path),
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!(?retry_after, "Rate limited by Freshdesk");
                FreshdeskError::RateLimited { retry_after }
            }
            _ => FreshdeskError::UnexpectedStatus {
                expected,
                status,
                body,
            },
        }
    }
}

fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body;
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
