//! The top-level client and its builder.

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};
use zbx_rpc::{Connection, DEFAULT_TIMEOUT, Error, Result, transport};
use zbx_types::UserLogin;

use crate::accessor::Accessor;
use crate::capability::ObjectApi;
use crate::kind::ObjectKind;
use crate::registry::Registry;

/// Request id used for the login call.
const LOGIN_REQUEST_ID: u64 = 1;

/// Entry point to the API. Cloning is cheap and clones share the connection
/// and the accessor cache.
#[derive(Debug, Clone)]
pub struct ZabbixClient {
    registry: Arc<Registry>,
}

impl ZabbixClient {
    #[must_use]
    pub fn builder(url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(url)
    }

    /// Wrap a connection that is already authenticated.
    #[must_use]
    pub fn from_connection(connection: Arc<Connection>) -> Self {
        Self {
            registry: Arc::new(Registry::new(connection)),
        }
    }

    #[must_use]
    pub fn connection(&self) -> &Arc<Connection> {
        self.registry.connection()
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Untyped accessor for `kind`.
    #[must_use]
    pub fn object(&self, kind: ObjectKind) -> Arc<Accessor> {
        self.registry.accessor(kind)
    }

    /// Typed accessor, e.g. `client.api::<HostApi>()`.
    #[must_use]
    pub fn api<T: ObjectApi>(&self) -> T {
        T::from_accessor(self.registry.accessor(T::KIND))
    }

    /// Borrow the client for a scope; the connection is closed when the
    /// returned guard is dropped.
    #[must_use]
    pub fn session(&self) -> Session<'_> {
        Session { client: self }
    }

    /// Close the connection. Returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        self.connection().close()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.connection().is_closed()
    }
}

/// Scoped use of a client. Dereferences to the client and closes its
/// connection on drop.
#[derive(Debug)]
pub struct Session<'a> {
    client: &'a ZabbixClient,
}

impl Deref for Session<'_> {
    type Target = ZabbixClient;

    fn deref(&self) -> &Self::Target {
        self.client
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.client.close();
    }
}

enum Auth {
    Token(String),
    Login(UserLogin),
}

/// Builder for [`ZabbixClient`].
#[derive(Clone)]
pub struct ClientBuilder {
    url: String,
    token: Option<String>,
    credentials: Option<(String, String)>,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Authenticate with an API token. Takes precedence over credentials.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Authenticate by calling `user.login` during [`ClientBuilder::build`].
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reuse an existing HTTP client instead of creating one.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    fn auth(&mut self) -> Result<Auth> {
        let token = self.token.take().filter(|token| !token.is_empty());
        let credentials = self
            .credentials
            .take()
            .filter(|(user, password)| !user.is_empty() && !password.is_empty());

        match (token, credentials) {
            (Some(token), _) => Ok(Auth::Token(token)),
            (None, Some((user, password))) => Ok(Auth::Login(UserLogin::new(user, password))),
            (None, None) => Err(Error::CredentialMissing),
        }
    }

    /// Resolve credentials and return a ready client.
    ///
    /// # Errors
    ///
    /// - `Error::CredentialMissing` if neither a token nor a complete
    ///   username/password pair was given; no request is sent in that case
    /// - any transport or API error raised by the login call
    /// - `Error::UnexpectedResponse` if login returns something other than a
    ///   string token
    pub async fn build(mut self) -> Result<ZabbixClient> {
        let auth = self.auth()?;

        let connection = match self.http {
            Some(http) => Connection::with_http_client(http, &self.url, self.timeout),
            None => Connection::new(&self.url, self.timeout)?,
        };

        let token = match auth {
            Auth::Token(token) => token,
            Auth::Login(params) => login(&connection, &params).await?,
        };

        info!("Connected to {}", connection.endpoint());
        Ok(ZabbixClient::from_connection(Arc::new(
            connection.with_token(token),
        )))
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.credentials.as_ref().map(|(user, _)| user))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

async fn login(connection: &Connection, params: &UserLogin) -> Result<String> {
    debug!("Logging in as {}", params.username);

    let method = ObjectKind::User.method("login");
    let params = serde_json::to_value(params)?;
    match transport::send(connection, &method, params, LOGIN_REQUEST_ID).await? {
        Value::String(token) => Ok(token),
        other => Err(Error::UnexpectedResponse(format!(
            "user.login returned {other} instead of a session token"
        ))),
    }
}
