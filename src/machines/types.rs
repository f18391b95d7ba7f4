//! Machine listing types

use crate::error::{Error, Result};
use crate::types::Record;
use serde_json::Value;

/// Records requested per page
pub const PAGE_SIZE: u32 = 1000;

/// Filter for the machine listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachinesQuery {
    /// Restrict the listing to machines with this computer name.
    /// When unset, the `computerName` parameter is absent from every request.
    pub computer_name: Option<String>,
}

impl MachinesQuery {
    /// Create an unfiltered query
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the listing to the given computer name
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = Some(name.into());
        self
    }
}

/// Extract the `content` array of a machines page body.
///
/// The server contract puts the page's records under `content`; a body
/// without it, or with non-object entries, is malformed.
pub(crate) fn page_records(mut body: Value) -> Result<Vec<Record>> {
    let content = body
        .get_mut("content")
        .map(Value::take)
        .ok_or_else(|| Error::malformed("machines response has no content field"))?;

    let entries = match content {
        Value::Array(entries) => entries,
        _ => return Err(Error::malformed("machines response content is not an array")),
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            Value::Object(record) => Ok(record),
            _ => Err(Error::malformed("machines response entry is not an object")),
        })
        .collect()
}
