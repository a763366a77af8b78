//! Pagination module
//!
//! Supports: Next URL (cursor pointer in the response body)
//!
//! # Overview
//!
//! Listing responses carry an `info.next` field holding the URL of the next
//! page, or null on the last page. The walker follows that pointer until it
//! is exhausted, a request fails, or the caller's [`crate::CancelToken`]
//! is cancelled.

mod types;
mod walker;

pub use types::{FetchOutcome, NextPage, PaginationState};
pub use walker::{fetch_all_pages, fetch_page};
