//! Authentication module
//!
//! One POST to `/identity/authenticate` exchanges admin credentials for a
//! session-scoped bearer token. There is no refresh: the token lives as long
//! as the session that obtained it.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthToken, Credentials};
