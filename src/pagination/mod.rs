//! Offset pagination
//!
//! The mechanics of the offset/limit loop, decoupled from the wire: the
//! caller fetches a page with `OffsetPaginator::params`, counts its records,
//! and feeds the count to `OffsetPaginator::advance`, which decides between
//! another round-trip and termination. The loop ends exactly when a page
//! holds fewer records than the limit (a zero-record page included); a page
//! of exactly `limit` records always forces one more round-trip.

mod strategies;
mod types;

pub use strategies::OffsetPaginator;
pub use types::{NextPage, PageState};
