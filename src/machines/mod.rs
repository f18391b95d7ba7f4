//! Machine listing
//!
//! Streams the `/machines` inventory as a lazy sequence of opaque records.
//! Pages are fetched on demand, one request at a time; every record of a
//! page is emitted in order before the next round-trip is issued. The
//! sequence is forward-only and non-restartable — dropping it mid-way
//! leaves no request in flight.

mod stream;
mod types;

pub use stream::stream;
pub use types::{MachinesQuery, PAGE_SIZE};
