//! The HTTP connection handle shared by every accessor.
//!
//! A [`Connection`] owns the API endpoint, the bearer token and the request
//! timeout. It wraps a `reqwest::Client`, which may be supplied by the caller
//! so an existing pool can be reused.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::error::Result;
use crate::protocol;

/// Path of the JSON-RPC endpoint below the frontend root.
pub const API_PATH: &str = "api_jsonrpc.php";

/// Timeout applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Append [`API_PATH`] to a frontend URL.
///
/// A separator is inserted only when `base` does not already end with one, so
/// `http://host` and `http://host/` resolve to the same endpoint.
#[must_use]
pub fn endpoint_url(base: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{API_PATH}")
    } else {
        format!("{base}/{API_PATH}")
    }
}

pub struct Connection {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    timeout: Duration,
    closed: AtomicBool,
}

impl Connection {
    /// Create a connection with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the HTTP client cannot be built (for
    /// example when no TLS backend is available).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(http, base_url, timeout))
    }

    /// Wrap an existing HTTP client.
    ///
    /// Endpoint, headers and timeout are applied per request, so the client's
    /// own defaults are overridden without touching the client itself.
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            http,
            endpoint: endpoint_url(base_url),
            token: None,
            timeout,
            closed: AtomicBool::new(false),
        }
    }

    /// Attach the bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// Mark the connection closed. Returns `true` only for the call that
    /// actually closed it.
    pub fn close(&self) -> bool {
        let was_open = !self.closed.swap(true, Ordering::SeqCst);
        if was_open {
            tracing::debug!("Closed connection to {}", self.endpoint);
        }
        was_open
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Build a POST carrying `body` with the connection's headers and timeout.
    /// The bearer token is added only when `authenticated` is set.
    pub(crate) fn post(&self, body: Vec<u8>, authenticated: bool) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header(CONTENT_TYPE, protocol::CONTENT_TYPE)
            .body(body);

        match &self.token {
            Some(token) if authenticated => {
                builder.header(AUTHORIZATION, format!("Bearer {token}"))
            }
            _ => builder,
        }
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
