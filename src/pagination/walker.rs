//! Cursor-following page walk
//!
//! Requests pages one at a time, following the server-supplied `info.next`
//! pointer, and folds each page's items into one ordered sequence.

use super::types::{FetchOutcome, NextPage, PaginationState};
use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::Page;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Fetch and decode a single listing page
///
/// A non-success status yields [`Error::HttpStatus`]; a body that is not a
/// valid page yields [`Error::JsonParse`].
pub async fn fetch_page<T: DeserializeOwned>(client: &HttpClient, url: &str) -> Result<Page<T>> {
    let response = client.get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let page: Page<T> = serde_json::from_str(&body)?;
    Ok(page)
}

/// Walk every page starting at `start_url` and return all items in order
///
/// The token is checked before each request and again once each response
/// has been observed, before its items are folded. A cancelled walk returns
/// [`FetchOutcome::Cancelled`] even if the abandoned request failed.
///
/// The first failure aborts the walk and the partial accumulation is
/// dropped. There is no bound on the number of pages.
pub async fn fetch_all_pages<T: DeserializeOwned>(
    client: &HttpClient,
    start_url: &str,
    cancel: &CancelToken,
) -> Result<FetchOutcome<Vec<T>>> {
    if start_url.trim().is_empty() {
        return Err(Error::config("start URL must not be empty"));
    }

    let mut state = PaginationState::new(start_url);
    let mut accumulated: Vec<T> = Vec::new();

    while let Some(url) = state.next_url.take() {
        if cancel.is_cancelled() {
            debug!("Page walk cancelled before requesting {url}");
            return Ok(FetchOutcome::Cancelled);
        }

        let result = fetch_page::<T>(client, &url).await;

        if cancel.is_cancelled() {
            debug!(
                "Page walk cancelled after page {}, discarding {} items",
                state.pages_fetched + 1,
                accumulated.len()
            );
            return Ok(FetchOutcome::Cancelled);
        }

        let page = result?;
        let next = NextPage::from_page(&page);
        let count = page.results.len();
        accumulated.extend(page.results);
        state.record_page(count, next);

        debug!(
            "Page {}: fetched {count} items ({} total)",
            state.pages_fetched, state.total_fetched
        );
    }

    info!(
        "Fetched {} items across {} pages",
        state.total_fetched, state.pages_fetched
    );
    Ok(FetchOutcome::Completed(accumulated))
}
