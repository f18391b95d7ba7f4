//! Auth types
//!
//! Credentials for the login request and the opaque token it returns.

use serde_json::{json, Value};

/// SEPM admin credentials. Immutable input to the login handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Admin user name
    pub username: String,
    /// Admin password
    pub password: String,
    /// Optional SEPM authentication domain
    pub domain: Option<String>,
}

impl Credentials {
    /// Create credentials without a domain
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            domain: None,
        }
    }

    /// Set the authentication domain
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// The JSON body for `POST /identity/authenticate`.
    ///
    /// `domain` is omitted entirely when not set.
    pub fn login_body(&self) -> Value {
        let mut body = json!({
            "username": self.username,
            "password": self.password,
        });
        if let Some(domain) = &self.domain {
            body["domain"] = json!(domain);
        }
        body
    }
}

/// Opaque bearer token issued by the server.
///
/// Lifetime equals the session's lifetime; there is no expiry or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the raw string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
