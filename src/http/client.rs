//! HTTP client
//!
//! Wraps `reqwest` with the session state the SEPM API needs:
//! - Default JSON headers applied to every request
//! - Optional proxy routing
//! - A bearer token installed once after login
//! - Error classification: non-2xx status vs. transport failure
//!
//! Requests are sent exactly once. Retries, backoff, and rate limiting are
//! deliberately absent; a failure aborts the current run.

use crate::error::{Error, Result};
use crate::types::ProxyConfig;
use reqwest::{Client, Method, Proxy, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Path prefix of the SEPM REST API, version 1
const API_PREFIX: &str = "/sepm/api/v1";

/// Build the API base URL for a SEPM host.
///
/// `my-sep-host.example.com` becomes `https://my-sep-host.example.com/sepm/api/v1`.
pub fn api_base(hostname: &str) -> Result<Url> {
    let url = Url::parse(&format!("https://{hostname}{API_PREFIX}"))?;
    Ok(url)
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
    /// Optional proxy routing
    pub proxies: Option<ProxyConfig>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("sepm-machines/{}", env!("CARGO_PKG_VERSION")),
            proxies: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Create a config with the standard JSON session headers
    pub fn json_session(base_url: impl Into<String>) -> Self {
        Self::builder()
            .base_url(base_url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .build()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set proxy routing
    pub fn proxies(mut self, proxies: ProxyConfig) -> Self {
        self.config.proxies = Some(proxies);
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Session-scoped HTTP client
///
/// Mutated exactly once after login (`set_bearer_token`), read-only
/// afterwards.
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    bearer_token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent);

        if let Some(proxies) = &config.proxies {
            if let Some(http) = &proxies.http {
                let proxy = Proxy::http(http)
                    .map_err(|e| Error::config(format!("invalid http proxy URL '{http}': {e}")))?;
                builder = builder.proxy(proxy);
            }
            if let Some(https) = &proxies.https {
                let proxy = Proxy::https(https).map_err(|e| {
                    Error::config(format!("invalid https proxy URL '{https}': {e}"))
                })?;
                builder = builder.proxy(proxy);
            }
        }

        let client = builder.build().map_err(Error::Transport)?;

        Ok(Self {
            client,
            config,
            bearer_token: None,
        })
    }

    /// Install the bearer token applied to all subsequent requests.
    ///
    /// Called once, after a successful login.
    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.bearer_token = Some(token.into());
    }

    /// Whether a bearer token has been installed
    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config
    pub async fn get_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::GET, url, config).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, url: &str, body: Value) -> Result<Response> {
        self.request(Method::POST, url, RequestConfig::default().json(body))
            .await
    }

    /// Make a generic request
    ///
    /// Sent exactly once: a transport failure surfaces as `Error::Transport`,
    /// a non-2xx status is drained into `Error::HttpStatus`.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let full_url = self.build_url(url);
        let timeout = config.timeout.unwrap_or(self.config.timeout);

        let mut req = self.client.request(method.clone(), &full_url);

        // Session-level headers first, then request-specific overrides
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(body) = &config.body {
            req = req.json(body);
        }

        if let Some(token) = &self.bearer_token {
            req = req.bearer_auth(token);
        }

        req = req.timeout(timeout);

        let response = req.send().await.map_err(Error::Transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Request succeeded: {} {}", method, full_url);
        Ok(response)
    }

    /// Make a request and parse the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.request(method, url, config).await?;
        let body = response.text().await.map_err(Error::Transport)?;
        let json: T = serde_json::from_str(&body)?;
        Ok(json)
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request_json(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_bearer_token", &self.bearer_token.is_some())
            .finish_non_exhaustive()
    }
}
