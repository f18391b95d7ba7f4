//! # sepm-machines
//!
//! Client for the Symantec Endpoint Protection Manager (SEPM) REST API:
//! log in once for a session-scoped bearer token, then stream the paginated
//! managed-endpoint ("machine") inventory.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::{pin_mut, TryStreamExt};
//! use sepm_machines::auth::{Authenticator, Credentials};
//! use sepm_machines::http::{api_base, HttpClient, HttpClientConfig};
//! use sepm_machines::machines::{self, MachinesQuery};
//! use sepm_machines::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let base = api_base("my-sep-host.example.com")?;
//!     let mut client = HttpClient::with_config(HttpClientConfig::json_session(base.as_str()))?;
//!
//!     // One login per session; the token lives as long as the client
//!     let authenticator = Authenticator::new(Credentials::new("admin", "secret"));
//!     let token = authenticator.login(&client).await?;
//!     client.set_bearer_token(token.into_inner());
//!
//!     // Pages are fetched on demand, records emitted in order
//!     let records = machines::stream(&client, MachinesQuery::new());
//!     pin_mut!(records);
//!     while let Some(record) = records.try_next().await? {
//!         println!("{}", serde_json::Value::Object(record));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        CLI / caller                        │
//! │       login() → AuthToken      stream() → Stream<Record>   │
//! └────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴─────────────┬────────────────┐
//! │     Auth     │         Pagination         │      HTTP      │
//! ├──────────────┼────────────────────────────┼────────────────┤
//! │ POST login   │ offset += limit            │ JSON headers   │
//! │ token field  │ stop on short page         │ bearer token   │
//! │ no refresh   │ one request in flight      │ proxy routing  │
//! └──────────────┴────────────────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Login handshake and token types
pub mod auth;

/// Session-scoped HTTP client
pub mod http;

/// Offset pagination mechanics
pub mod pagination;

/// The machine listing stream
pub mod machines;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
