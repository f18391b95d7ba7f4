//! Authenticator implementation
//!
//! Performs the login handshake against `/identity/authenticate`.

use super::types::{AuthToken, Credentials};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde_json::Value;
use tracing::debug;

/// Path of the login endpoint, relative to the API base
const LOGIN_PATH: &str = "/identity/authenticate";

/// Exchanges credentials for a session-scoped bearer token.
///
/// Must complete successfully before any `/machines` request is issued.
pub struct Authenticator {
    credentials: Credentials,
}

impl Authenticator {
    /// Create a new authenticator with the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Perform the login handshake.
    ///
    /// One POST, no retries. A non-2xx response surfaces as
    /// `Error::HttpStatus`, a connection-level failure as `Error::Transport`.
    /// A 2xx response that carries no `token` field fails fast with
    /// `Error::MalformedResponse` so the caller never proceeds
    /// unauthenticated.
    pub async fn login(&self, client: &HttpClient) -> Result<AuthToken> {
        let response = client.post(LOGIN_PATH, self.credentials.login_body()).await?;

        let body = response.text().await.map_err(Error::Transport)?;
        let json: Value = serde_json::from_str(&body)?;

        let token = json
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::malformed("authentication response has no token field"))?;

        debug!("Authenticated as {}", self.credentials.username);
        Ok(AuthToken::new(token))
    }

    /// The credentials this authenticator logs in with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
