//! Pagination types
//!
//! Defines the cursor decision, the walk bookkeeping and the outcome of a
//! cancellable walk.

use crate::types::Page;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this URL
    Continue {
        /// URL of the next page, as supplied by the server
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Derive the next step from a page's `info.next` pointer
    pub fn from_page<T>(page: &Page<T>) -> Self {
        match page.next_url() {
            Some(url) => Self::with_url(url),
            None => Self::Done,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during a walk
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// URL to request next, `None` once the walk is exhausted
    pub next_url: Option<String>,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Items folded so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create state positioned at the starting URL
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            next_url: Some(start_url.into()),
            ..Default::default()
        }
    }

    /// Record a folded page and advance the cursor
    pub fn record_page(&mut self, items: usize, next: NextPage) {
        self.pages_fetched += 1;
        self.total_fetched += items as u64;
        match next {
            NextPage::Continue { url } => self.next_url = Some(url),
            NextPage::Done => self.mark_done(),
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.next_url = None;
        self.done = true;
    }
}

/// Outcome of a cancellable fetch
///
/// Cancellation is not a failure, so it lives here rather than in
/// [`crate::error::Error`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The operation ran to completion
    Completed(T),
    /// The token was cancelled; results were discarded
    Cancelled,
}

impl<T> FetchOutcome<T> {
    /// Check if the operation was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The completed value, if any
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Cancelled => None,
        }
    }

    /// Transform the completed value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            Self::Completed(value) => FetchOutcome::Completed(f(value)),
            Self::Cancelled => FetchOutcome::Cancelled,
        }
    }
}
