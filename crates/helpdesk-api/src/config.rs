//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::ApiError;

/// Path under which the backend mounts its REST controllers.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Server origin used when nothing else is configured.
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Deadline applied to every request. AI operations on the backend can be
/// slow, hence the generous value.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`HelpdeskClient`](crate::HelpdeskClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to (e.g. `http://host/api`).
    pub base_url: Url,

    /// Uniform request deadline (default: 30 seconds).
    pub request_timeout: Duration,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(&format!("{DEFAULT_SERVER}{DEFAULT_API_PREFIX}"))
                .expect("static URL is valid"),
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: format!("helpdesk-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from a server origin and an API prefix.
    ///
    /// `from_server("http://host:8080/", "/api")` yields the base URL
    /// `http://host:8080/api`. An empty prefix targets the origin itself.
    pub fn from_server(server: &str, api_prefix: &str) -> Result<Self, ApiError> {
        let server = server.trim_end_matches('/');
        let prefix = api_prefix.trim_matches('/');
        let raw = if prefix.is_empty() {
            server.to_string()
        } else {
            format!("{server}/{prefix}")
        };
        let base_url = Url::parse(&raw)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(raw));
        }
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
