//! Offset paginator
//!
//! `?offset=N&limit=M` pagination where the end of the data set is inferred
//! from receiving fewer records than requested.

use super::types::{NextPage, PageState};

/// Offset-based paginator
///
/// Each request carries the current `offset` and a fixed `limit`. After a
/// page arrives, `advance` decides: strictly fewer records than `limit`
/// (including zero) terminates the sequence; exactly `limit` records bumps
/// the offset by `limit` and continues, even if the next page turns out
/// empty. That extra round-trip mirrors the server's contract.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Query parameter name for offset
    pub offset_param: String,
    /// Query parameter name for limit
    pub limit_param: String,
    /// Number of records per page
    pub limit_value: u32,
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(
        offset_param: impl Into<String>,
        limit_param: impl Into<String>,
        limit_value: u32,
    ) -> Self {
        Self {
            offset_param: offset_param.into(),
            limit_param: limit_param.into(),
            limit_value,
        }
    }

    /// Query parameters for the request at the current state
    pub fn params(&self, state: &PageState) -> Vec<(String, String)> {
        vec![
            (self.offset_param.clone(), state.offset.to_string()),
            (self.limit_param.clone(), self.limit_value.to_string()),
        ]
    }

    /// Process a fetched page's record count and decide whether to continue
    pub fn advance(&self, records_count: usize, state: &mut PageState) -> NextPage {
        state.add_page(records_count);

        // A short page (zero included) is the last page
        if records_count < self.limit_value as usize {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(self.limit_value);
        NextPage::with_params(self.params(state))
    }
}
