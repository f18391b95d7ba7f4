//! Lazy machine record stream
//!
//! Drives the offset paginator against `GET /machines`.

use super::types::{page_records, MachinesQuery, PAGE_SIZE};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{OffsetPaginator, PageState};
use crate::types::Record;
use futures::stream::{self, Stream, TryStreamExt};
use serde_json::Value;
use tracing::debug;

/// Path of the machines endpoint, relative to the API base
const MACHINES_PATH: &str = "/machines";

/// State threaded through the page fetch loop
struct FetchState {
    query: MachinesQuery,
    paginator: OffsetPaginator,
    page: PageState,
}

/// Stream the machine inventory as a lazy sequence of records.
///
/// The client must already carry the bearer token from a successful login.
/// Each page is requested on demand; its records are emitted in order
/// before the next request is issued. A short page (fewer records than
/// [`PAGE_SIZE`], zero included) ends the sequence. A failed request ends
/// the sequence with an error; records already emitted stay with the
/// consumer.
pub fn stream(
    client: &HttpClient,
    query: MachinesQuery,
) -> impl Stream<Item = Result<Record>> + '_ {
    let state = FetchState {
        query,
        paginator: OffsetPaginator::new("offset", "limit", PAGE_SIZE),
        page: PageState::new(),
    };

    stream::try_unfold(state, move |mut state| async move {
        if state.page.done {
            return Ok::<_, Error>(None);
        }

        let mut req = RequestConfig::new();
        for (key, value) in state.paginator.params(&state.page) {
            req = req.query(key, value);
        }
        if let Some(name) = &state.query.computer_name {
            req = req.query("computerName", name);
        }

        let response = client.get_with_config(MACHINES_PATH, req).await?;
        let body = response.text().await.map_err(Error::Transport)?;
        let json: Value = serde_json::from_str(&body)?;
        let records = page_records(json)?;

        debug!(
            "Page {}: fetched {} records at offset {}",
            state.page.pages_fetched + 1,
            records.len(),
            state.page.offset
        );

        state.paginator.advance(records.len(), &mut state.page);
        Ok(Some((records, state)))
    })
    .map_ok(|records| stream::iter(records.into_iter().map(Ok::<Record, Error>)))
    .try_flatten()
}
