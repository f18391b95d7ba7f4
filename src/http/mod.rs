//! HTTP client module
//!
//! Provides the session-scoped HTTP client used for both authentication and
//! pagination.
//!
//! # Features
//!
//! - **Session headers**: JSON Accept/Content-Type defaults on every request
//! - **Bearer token**: installed once after login, applied to all requests
//! - **Proxy routing**: optional http/https proxies
//! - **Error classification**: non-2xx status vs. transport failure

mod client;

pub use client::{api_base, HttpClient, HttpClientConfig, RequestConfig};
